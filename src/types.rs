//! Shared types flowing through the pipeline.
//!
//! Everything here is `Serialize` because the finished [`HomePage`] is the
//! template context handed to the renderer, and the `check --json` command
//! dumps it verbatim.

use serde::Serialize;

/// Identifier of a page file: the filename with its extension stripped.
pub type PageId = String;

/// One metadata record from `wiki.xml`.
///
/// Missing fields are already resolved to empty values by the loader, so
/// nothing downstream has to deal with `Option`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Date label. Free text, never parsed.
    pub date: String,
    pub category: String,
    pub title: String,
    pub link: String,
    /// Tags in document order. May be empty.
    pub tags: Vec<String>,
    /// Page this entry describes, matched exactly against [`PageId`]s.
    pub page: String,
}

/// A named bucket of entries sharing one field value.
///
/// Used for categories, tags and dates alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Summary counts shown at the bottom of the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub page_count: usize,
    /// Never computed; always zero.
    pub total_word_count: usize,
    /// Never computed; always zero.
    pub distinct_word_count: usize,
    pub category_count: usize,
    pub tag_count: usize,
    pub date_count: usize,
    pub orphan_page_count: usize,
    pub orphan_entry_count: usize,
}

/// The complete aggregation result and template context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    /// Generation timestamp, RFC 1123 style.
    pub time: String,
    pub categories: Vec<Group>,
    pub tags: Vec<Group>,
    pub dates: Vec<Group>,
    /// Pages with no metadata entry, in enumeration order.
    pub pages_without_entry: Vec<PageId>,
    /// Entries pointing at a page that does not exist, in metadata order.
    pub entries_without_page: Vec<Entry>,
    pub stats: Stats,
}
