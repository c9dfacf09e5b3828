//! # wiki-home
//!
//! Generates a home page for a directory of markdown wiki pages. The page
//! files on disk and a `wiki.xml` metadata file describing them are
//! cross-referenced, grouped, and rendered through a user-supplied template.
//!
//! # Architecture
//!
//! ```text
//! wiki/*.md ──► scan ──────┐
//!                          ├──► aggregate ──► HomePage ──► render ──► Home.md
//! wiki/wiki.xml ► metadata ┘
//! ```
//!
//! The two inputs are read independently. [`aggregate`] is a pure function
//! of them plus a clock: it never fails and does no I/O, so every grouping
//! and cross-referencing rule is unit-tested without touching the disk.
//! [`pipeline`] strings the stages together and is the only place that
//! knows about file locations.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists page ids in the wiki root |
//! | [`metadata`] | Parses `wiki.xml` into entries |
//! | [`aggregate`] | Groups entries by category, tag and date; finds orphans; counts |
//! | [`render`] | Renders the home page template and writes the output file |
//! | [`pipeline`] | Resolves paths and runs the stages, collecting errors into one type |
//! | [`config`] | Optional `config.toml` in the wiki root |
//! | [`types`] | Entry, Group, Stats and the HomePage template context |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Two Collations
//!
//! Category groups sort ordinally, tag and date groups case-insensitively.
//! Existing templates and readers rely on this ordering, so it is kept as-is.
//!
//! ## Runtime Templates
//!
//! The home page layout belongs to the wiki owner, not to this binary, so the
//! template is a plain file read at runtime (Jinja syntax via minijinja).
//! Undefined variables fail the run instead of rendering blank.
//!
//! ## Fail Fast, Write Once
//!
//! Any missing or malformed input aborts the run with a typed error. The
//! output is rendered fully in memory before the file is opened and then
//! replaced as a whole, so a failed run never leaves a half-written or stale
//! home page behind.

pub mod aggregate;
pub mod config;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
