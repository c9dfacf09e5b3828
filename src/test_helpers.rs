//! Shared test utilities for the wiki-home test suite.
//!
//! Provides entry builders, a pinned clock, lookup helpers and fixture setup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let entries = vec![tagged(entry("About", "About"), &["intro"])];
//! let home = aggregate(&entries, &[], &fixed_clock());
//!
//! let intro = find_group(&home.tags, "intro");
//! assert_eq!(entry_titles(intro), vec!["About"]);
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::aggregate::FixedClock;
use crate::types::{Entry, Group};

// =========================================================================
// Fixture setup
// =========================================================================

/// The `fixtures/` directory of the crate.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Copy `fixtures/wiki/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&fixtures_dir().join("wiki"), tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Builders
// =========================================================================

/// An entry for `page` with the given title. Link mirrors the page; every
/// other field is empty.
pub fn entry(page: &str, title: &str) -> Entry {
    Entry {
        title: title.to_string(),
        link: page.to_string(),
        page: page.to_string(),
        ..Entry::default()
    }
}

/// Replace an entry's tags.
pub fn tagged(entry: Entry, tags: &[&str]) -> Entry {
    Entry {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..entry
    }
}

/// Clock pinned to `Mon, 02 Jan 2006 15:04:05 +0000`.
pub fn fixed_clock() -> FixedClock {
    let instant = chrono::DateTime::parse_from_rfc3339("2006-01-02T15:04:05+00:00").unwrap();
    FixedClock(instant)
}

// =========================================================================
// Lookups — panics with a clear message on miss
// =========================================================================

/// Find a group by name. Panics if not found.
pub fn find_group<'a>(groups: &'a [Group], name: &str) -> &'a Group {
    groups.iter().find(|g| g.name == name).unwrap_or_else(|| {
        let names = group_names(groups);
        panic!("group '{name}' not found. Available: {names:?}")
    })
}

/// All group names in order.
pub fn group_names(groups: &[Group]) -> Vec<&str> {
    groups.iter().map(|g| g.name.as_str()).collect()
}

/// Titles of a group's entries in order.
pub fn entry_titles(group: &Group) -> Vec<&str> {
    group.entries.iter().map(|e| e.title.as_str()).collect()
}

/// Page ids of a group's entries in order.
pub fn entry_pages(group: &Group) -> Vec<&str> {
    group.entries.iter().map(|e| e.page.as_str()).collect()
}
