//! Cross-referencing and grouping of metadata entries.
//!
//! The engine takes the entries loaded from `wiki.xml` and the page ids found
//! on disk and produces the [`HomePage`] handed to the template:
//!
//! ```text
//! entries ──┬── by category ─┐
//!           ├── by tag ──────┤
//!           ├── by date ─────┼──► HomePage
//! pages ────┴── orphans ─────┘
//! ```
//!
//! ## Collation
//!
//! Categories are compared ordinally (byte order, so `"Apple"` sorts before
//! `"zoo"` and `"Zoo"` before `"apple"`). Tags and dates are compared on their
//! lowercased form. Both rules apply to group names and to the titles of the
//! entries inside each group. All sorts are stable, so entries with equal
//! titles keep their metadata order.
//!
//! Bucket keys themselves are always exact: `"Rust"` and `"rust"` are two
//! different tag groups, and `2020-01-02` and `2 Jan 2020` are two different
//! date groups.
//!
//! ## Orphans
//!
//! A page is an orphan when no entry points at it; an entry is an orphan when
//! it points at a page that was not found. The two scans are independent and
//! keep their input order.
//!
//! ## Time
//!
//! The only impure input is the generation timestamp, which comes from a
//! [`Clock`] so tests can pin it.

use crate::types::{Entry, Group, HomePage, PageId, Stats};
use chrono::{DateTime, FixedOffset, Local};
use std::collections::{BTreeMap, HashSet};

/// Timestamp layout used on the home page, e.g. `Mon, 02 Jan 2006 15:04:05 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Source of the generation timestamp.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// String ordering applied to group names and entry titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collation {
    /// Plain byte order.
    Ordinal,
    /// Compare lowercased strings.
    CaseInsensitive,
}

impl Collation {
    /// Stable sort of `items` by the string `key` returns.
    fn sort<T>(self, items: &mut [T], key: impl Fn(&T) -> &str) {
        match self {
            Collation::Ordinal => items.sort_by(|a, b| key(a).cmp(key(b))),
            Collation::CaseInsensitive => items.sort_by_cached_key(|item| key(item).to_lowercase()),
        }
    }
}

/// Build the home page data from metadata entries and discovered pages.
///
/// Never fails: empty inputs give empty groups and zero counts. Duplicate
/// page ids or entries are taken as-is.
pub fn aggregate(entries: &[Entry], pages: &[PageId], clock: &dyn Clock) -> HomePage {
    // The three passes share nothing, so they fork freely.
    let (categories, (tags, dates)) = rayon::join(
        || group_by_category(entries),
        || rayon::join(|| group_by_tag(entries), || group_by_date(entries)),
    );

    let pages_without_entry = orphan_pages(pages, entries);
    let entries_without_page = orphan_entries(entries, pages);

    let stats = Stats {
        page_count: pages.len(),
        total_word_count: 0,
        distinct_word_count: 0,
        category_count: categories.len(),
        tag_count: tags.len(),
        date_count: dates.len(),
        orphan_page_count: pages_without_entry.len(),
        orphan_entry_count: entries_without_page.len(),
    };

    HomePage {
        time: clock.now().format(TIMESTAMP_FORMAT).to_string(),
        categories,
        tags,
        dates,
        pages_without_entry,
        entries_without_page,
        stats,
    }
}

fn group_by_category(entries: &[Entry]) -> Vec<Group> {
    let mut buckets: BTreeMap<&str, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        buckets
            .entry(entry.category.as_str())
            .or_default()
            .push(entry.clone());
    }
    into_groups(buckets, Collation::Ordinal)
}

/// An entry lands in one bucket per distinct tag; repeated tags count once.
fn group_by_tag(entries: &[Entry]) -> Vec<Group> {
    let mut buckets: BTreeMap<&str, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        for (i, tag) in entry.tags.iter().enumerate() {
            if entry.tags[..i].contains(tag) {
                continue;
            }
            buckets.entry(tag.as_str()).or_default().push(entry.clone());
        }
    }
    into_groups(buckets, Collation::CaseInsensitive)
}

fn group_by_date(entries: &[Entry]) -> Vec<Group> {
    let mut buckets: BTreeMap<&str, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        buckets
            .entry(entry.date.as_str())
            .or_default()
            .push(entry.clone());
    }
    into_groups(buckets, Collation::CaseInsensitive)
}

/// Sort each bucket by title, then the groups by name, under one collation.
///
/// Buckets arrive in ordinal key order, which fixes the order of names that
/// tie case-insensitively.
fn into_groups(buckets: BTreeMap<&str, Vec<Entry>>, collation: Collation) -> Vec<Group> {
    let mut groups: Vec<Group> = buckets
        .into_iter()
        .map(|(name, mut entries)| {
            collation.sort(&mut entries, |e| e.title.as_str());
            Group {
                name: name.to_string(),
                entries,
            }
        })
        .collect();
    collation.sort(&mut groups, |g| g.name.as_str());
    groups
}

fn orphan_pages(pages: &[PageId], entries: &[Entry]) -> Vec<PageId> {
    let referenced: HashSet<&str> = entries.iter().map(|e| e.page.as_str()).collect();
    pages
        .iter()
        .filter(|page| !referenced.contains(page.as_str()))
        .cloned()
        .collect()
}

fn orphan_entries(entries: &[Entry], pages: &[PageId]) -> Vec<Entry> {
    let known: HashSet<&str> = pages.iter().map(String::as_str).collect();
    entries
        .iter()
        .filter(|entry| !known.contains(entry.page.as_str()))
        .cloned()
        .collect()
}
