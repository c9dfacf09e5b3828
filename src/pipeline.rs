//! End-to-end run: resolve paths, collect inputs, aggregate, render.
//!
//! ```text
//! plan()     wiki root + config.toml + CLI overrides  →  Plan
//! collect()  Plan  →  HomePage        (scan pages, load wiki.xml, aggregate)
//! build()    Plan  →  HomePage + Home.md written
//! ```
//!
//! Every failure along the way surfaces as a [`PipelineError`]; nothing here
//! prints or exits. The binary decides what to do with the error.

use crate::aggregate::{Clock, aggregate};
use crate::config::{self, ConfigError, WikiConfig};
use crate::metadata::{self, MetadataError};
use crate::render::{self, RenderError};
use crate::scan::{self, ScanError};
use crate::types::HomePage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("wiki root {0} does not exist")]
    RootNotFound(PathBuf),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Fully resolved locations for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub root: PathBuf,
    pub metadata: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub page_marker: String,
}

/// Path overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Plan {
    /// Resolve config paths: metadata against the wiki root, template and
    /// output against `workdir`. Overrides are used as given.
    pub fn resolve(root: &Path, config: &WikiConfig, workdir: &Path, overrides: Overrides) -> Self {
        Self {
            root: root.to_path_buf(),
            metadata: root.join(&config.metadata_file),
            template: overrides
                .template
                .unwrap_or_else(|| workdir.join(&config.template)),
            output: overrides
                .output
                .unwrap_or_else(|| workdir.join(&config.output)),
            page_marker: config.page_marker.clone(),
        }
    }
}

/// Check the wiki root, load its config and resolve the run's paths.
pub fn plan(root: &Path, workdir: &Path, overrides: Overrides) -> Result<Plan, PipelineError> {
    if !root.is_dir() {
        return Err(PipelineError::RootNotFound(root.to_path_buf()));
    }
    let config = config::load_config(root)?;
    let plan = Plan::resolve(root, &config, workdir, overrides);
    log::info!("wiki root is {}", plan.root.display());
    Ok(plan)
}

/// Scan pages, load metadata and aggregate them.
pub fn collect(plan: &Plan, clock: &dyn Clock) -> Result<HomePage, PipelineError> {
    let pages = scan::scan_pages(&plan.root, &plan.page_marker)?;
    let entries = metadata::load_entries(&plan.metadata)?;
    Ok(aggregate(&entries, &pages, clock))
}

/// Collect, then render the template and write the home page.
pub fn build(plan: &Plan, clock: &dyn Clock) -> Result<HomePage, PipelineError> {
    let page = collect(plan, clock)?;
    render::write_home_page(&plan.template, &plan.output, &page)?;
    Ok(page)
}
