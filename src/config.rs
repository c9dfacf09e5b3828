//! Wiki configuration module.
//!
//! Handles loading and validating an optional `config.toml` placed in the
//! wiki root. Without one, the stock defaults reproduce the classic layout:
//!
//! ```text
//! ./                          # working directory
//! ├── home-page.template      # template (relative to working directory)
//! ├── Home.md                 # generated output (relative to working directory)
//! └── wiki/                   # --wiki-root
//!     ├── config.toml         # optional
//!     ├── wiki.xml            # metadata (relative to wiki root)
//!     └── *.md                # pages
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//! metadata_file = "wiki.xml"
//! template = "home-page.template"
//! output = "Home.md"
//! page_marker = ".md"
//! ```
//!
//! Config files are sparse: override just the keys you need. Unknown keys
//! are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the wiki root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Wiki configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WikiConfig {
    /// Metadata file, relative to the wiki root.
    pub metadata_file: String,
    /// Home page template, relative to the working directory.
    pub template: String,
    /// Generated home page, relative to the working directory.
    pub output: String,
    /// Case-insensitive substring a file name must contain to count as a page.
    pub page_marker: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            metadata_file: "wiki.xml".to_string(),
            template: "home-page.template".to_string(),
            output: "Home.md".to_string(),
            page_marker: ".md".to_string(),
        }
    }
}

impl WikiConfig {
    /// Reject values that would make the run meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("metadata_file", &self.metadata_file),
            ("template", &self.template),
            ("output", &self.output),
            ("page_marker", &self.page_marker),
        ];
        for (key, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Load config from `config.toml` in the wiki root, falling back to defaults.
///
/// The file is sparse: serde fills absent keys from [`WikiConfig::default`].
pub fn load_config(root: &Path) -> Result<WikiConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(WikiConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config: WikiConfig = toml::from_str(&content)?;
    config.validate()?;
    log::debug!("loaded {}", path.display());
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# wiki-home Configuration
# =======================
# Place this file in the wiki root. All settings are optional; values
# shown are the defaults. Unknown keys cause an error.

# Metadata describing the wiki's pages, relative to the wiki root.
metadata_file = "wiki.xml"

# Home page template (Jinja syntax), relative to the working directory.
template = "home-page.template"

# Where the rendered home page is written, relative to the working directory.
# The file is replaced on every run.
output = "Home.md"

# A file in the wiki root is a page when its name contains this text
# (case-insensitive). The page id is the file name minus its extension.
page_marker = ".md"
"##
}
