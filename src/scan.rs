//! Page discovery in the wiki root.
//!
//! Only the root directory itself is listed; subdirectories are neither
//! pages nor searched. A file counts as a page when its lowercased name
//! contains the configured marker (`.md` by default):
//!
//! ```text
//! wiki/
//! ├── Home.md          → "Home"
//! ├── About.MD         → "About"
//! ├── draft.md.bak     → "draft.md"   (marker anywhere in the name)
//! ├── wiki.xml         (skipped)
//! └── images.md/       (skipped, directory)
//! ```
//!
//! The page id is the file name minus its last extension. Results come back
//! sorted by file name.

use crate::types::PageId;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot list wiki root {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// List the page ids found directly under `root`.
pub fn scan_pages(root: &Path, marker: &str) -> Result<Vec<PageId>, ScanError> {
    let marker = marker.to_lowercase();
    let mut pages = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for dir_entry in walker {
        let dir_entry = dir_entry.map_err(|source| ScanError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        if dir_entry.file_type().is_dir() {
            continue;
        }

        let name = dir_entry.file_name().to_string_lossy();
        if !name.to_lowercase().contains(&marker) {
            continue;
        }

        let page = page_id(&name);
        log::debug!("page file: {page}");
        pages.push(page);
    }

    Ok(pages)
}

/// Strip the last extension from a file name.
///
/// - `Home.md` → `Home`
/// - `notes.md.bak` → `notes.md`
/// - `.md` → `.md` (a leading dot is not an extension)
fn page_id(file_name: &str) -> PageId {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixtures;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_markdown_pages_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.md"), "# B").unwrap();
        fs::write(tmp.path().join("a.md"), "# A").unwrap();
        fs::write(tmp.path().join("c.md"), "# C").unwrap();

        let pages = scan_pages(tmp.path(), ".md").unwrap();
        assert_eq!(pages, vec!["a", "b", "c"]);
    }

    #[test]
    fn marker_match_ignores_case() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("About.MD"), "").unwrap();

        let pages = scan_pages(tmp.path(), ".md").unwrap();
        assert_eq!(pages, vec!["About"]);
    }

    #[test]
    fn non_page_files_are_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Home.md"), "").unwrap();
        fs::write(tmp.path().join("wiki.xml"), "<wiki/>").unwrap();
        fs::write(tmp.path().join("home-page.template"), "").unwrap();

        let pages = scan_pages(tmp.path(), ".md").unwrap();
        assert_eq!(pages, vec!["Home"]);
    }

    #[test]
    fn directories_are_skipped_even_when_named_like_pages() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("images.md")).unwrap();
        fs::create_dir_all(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/Nested.md"), "").unwrap();
        fs::write(tmp.path().join("Top.md"), "").unwrap();

        let pages = scan_pages(tmp.path(), ".md").unwrap();
        assert_eq!(pages, vec!["Top"]);
    }

    #[test]
    fn marker_anywhere_in_name_only_last_extension_stripped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("draft.md.bak"), "").unwrap();

        let pages = scan_pages(tmp.path(), ".md").unwrap();
        assert_eq!(pages, vec!["draft.md"]);
    }

    #[test]
    fn custom_marker() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Home.md"), "").unwrap();
        fs::write(tmp.path().join("Notes.txt"), "").unwrap();

        let pages = scan_pages(tmp.path(), ".txt").unwrap();
        assert_eq!(pages, vec!["Notes"]);
    }

    #[test]
    fn empty_root_has_no_pages() {
        let tmp = TempDir::new().unwrap();
        assert!(scan_pages(tmp.path(), ".md").unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan_pages(&tmp.path().join("nope"), ".md");
        assert!(matches!(result, Err(ScanError::Io { .. })));
    }

    #[test]
    fn fixture_pages() {
        let tmp = setup_fixtures();
        let pages = scan_pages(tmp.path(), ".md").unwrap();
        assert_eq!(pages, vec!["About", "Home", "Rust-Notes", "Scratch"]);
    }

    #[test]
    fn page_id_strips_last_extension() {
        assert_eq!(page_id("Home.md"), "Home");
        assert_eq!(page_id("notes.md.bak"), "notes.md");
        assert_eq!(page_id("README"), "README");
    }

    #[test]
    fn page_id_keeps_dotfile_name() {
        assert_eq!(page_id(".md"), ".md");
    }
}
