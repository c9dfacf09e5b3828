//! Home page rendering.
//!
//! The template is a user-supplied [minijinja](https://docs.rs/minijinja)
//! (Jinja2 syntax) file. The whole [`HomePage`] is the template context:
//!
//! | Variable | Contents |
//! |----------|----------|
//! | `time` | generation timestamp |
//! | `categories`, `tags`, `dates` | lists of `{ name, entries }` groups |
//! | `pages_without_entry` | page ids with no metadata |
//! | `entries_without_page` | entries whose page is missing |
//! | `stats` | summary counts |
//!
//! Each entry exposes `date`, `category`, `title`, `link`, `tags` and `page`.
//!
//! Undefined variables are errors rather than blanks, output is not
//! HTML-escaped, and the template's trailing newline is kept.
//!
//! The document is rendered to memory first; the output file is only opened
//! once rendering has succeeded, and it is truncated before writing.

use crate::types::HomePage;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot read template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("cannot write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env
}

/// Render `page` through a template given as source text.
pub fn render(template_source: &str, page: &HomePage) -> Result<String, RenderError> {
    let env = environment();
    let template = env.template_from_str(template_source)?;
    Ok(template.render(page)?)
}

/// Render the template at `template_path` and write the result to `output_path`.
pub fn write_home_page(
    template_path: &Path,
    output_path: &Path,
    page: &HomePage,
) -> Result<(), RenderError> {
    let source = fs::read_to_string(template_path).map_err(|source| RenderError::ReadTemplate {
        path: template_path.to_path_buf(),
        source,
    })?;
    let document = render(&source, page)?;
    fs::write(output_path, document).map_err(|source| RenderError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {}", output_path.display());
    Ok(())
}

/// Returns the stock home page template.
///
/// Used by the `gen-template` CLI command.
pub fn stock_template() -> &'static str {
    r#"# Home

_Generated {{ time }}_

## Categories
{% for category in categories %}
### {{ category.name }}
{% for entry in category.entries %}
- [{{ entry.title }}]({{ entry.link }}){% if entry.date %} ({{ entry.date }}){% endif %}
{%- endfor %}
{% endfor %}
## Tags
{% for tag in tags %}
### {{ tag.name }}
{% for entry in tag.entries %}
- [{{ entry.title }}]({{ entry.link }})
{%- endfor %}
{% endfor %}
## Timeline
{% for date in dates %}
### {{ date.name }}
{% for entry in date.entries %}
- [{{ entry.title }}]({{ entry.link }})
{%- endfor %}
{% endfor %}
## Housekeeping

Pages without an entry:
{% for page in pages_without_entry %}
- [{{ page }}]({{ page }})
{%- else %}
- none
{%- endfor %}

Entries without a page:
{% for entry in entries_without_page %}
- {{ entry.title }} → `{{ entry.page }}`
{%- else %}
- none
{%- endfor %}

## Stats

| Pages | Categories | Tags | Dates | Pages without entry | Entries without page |
|-------|------------|------|-------|---------------------|----------------------|
| {{ stats.page_count }} | {{ stats.category_count }} | {{ stats.tag_count }} | {{ stats.date_count }} | {{ stats.orphan_page_count }} | {{ stats.orphan_entry_count }} |
"#
}
