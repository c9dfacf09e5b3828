//! CLI output formatting.
//!
//! Each report has a `format_*` function (returns `Vec<String>`, no I/O) for
//! testability and a `print_*` wrapper that writes to stdout.
//!
//! ## Check
//!
//! ```text
//! Categories
//! 001 Languages (2 entries)
//!     Borrowing explained → Borrowing
//!     Rust notes → Rust-Notes
//!
//! Tags
//! 001 intro (1 entry)
//!     About this wiki → About
//!
//! Pages without entry
//!     Scratch
//!
//! Entries without page
//!     Borrowing explained → Borrowing
//!
//! Stats
//!     Pages: 4
//!     Categories: 2
//!     ...
//! ```
//!
//! ## Build
//!
//! ```text
//! Home page → Home.md
//! Indexed 4 pages: 2 categories, 3 tags, 3 dates
//! 1 page without entry, 1 entry without page
//! ```

use crate::types::{Group, HomePage};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `1 entry`, `2 entries`, `1 page`, ...
fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Group header: positional index, name and entry count.
///
/// Empty names (entries with no category or date) show as `(none)`.
fn group_header(index: usize, group: &Group) -> String {
    let name = if group.name.is_empty() {
        "(none)"
    } else {
        group.name.as_str()
    };
    format!(
        "{} {} ({})",
        format_index(index),
        name,
        plural(group.entries.len(), "entry", "entries")
    )
}

fn push_groups(lines: &mut Vec<String>, heading: &str, groups: &[Group]) {
    lines.push(heading.to_string());
    if groups.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, group) in groups.iter().enumerate() {
        lines.push(group_header(i + 1, group));
        for entry in &group.entries {
            lines.push(format!("    {} \u{2192} {}", entry.title, entry.page));
        }
    }
    lines.push(String::new());
}

/// Format the full cross-reference report printed by `check`.
pub fn format_check_output(page: &HomePage) -> Vec<String> {
    let mut lines = Vec::new();

    push_groups(&mut lines, "Categories", &page.categories);
    push_groups(&mut lines, "Tags", &page.tags);
    push_groups(&mut lines, "Dates", &page.dates);

    lines.push("Pages without entry".to_string());
    if page.pages_without_entry.is_empty() {
        lines.push("    (none)".to_string());
    }
    for id in &page.pages_without_entry {
        lines.push(format!("    {id}"));
    }
    lines.push(String::new());

    lines.push("Entries without page".to_string());
    if page.entries_without_page.is_empty() {
        lines.push("    (none)".to_string());
    }
    for entry in &page.entries_without_page {
        lines.push(format!("    {} \u{2192} {}", entry.title, entry.page));
    }
    lines.push(String::new());

    let stats = &page.stats;
    lines.push("Stats".to_string());
    lines.push(format!("    Pages: {}", stats.page_count));
    lines.push(format!("    Categories: {}", stats.category_count));
    lines.push(format!("    Tags: {}", stats.tag_count));
    lines.push(format!("    Dates: {}", stats.date_count));
    lines.push(format!("    Pages without entry: {}", stats.orphan_page_count));
    lines.push(format!("    Entries without page: {}", stats.orphan_entry_count));

    lines
}

/// Print the check report to stdout.
pub fn print_check_output(page: &HomePage) {
    for line in format_check_output(page) {
        println!("{}", line);
    }
}

/// Format the short summary printed after `build` writes the home page.
pub fn format_build_output(page: &HomePage, output: &Path) -> Vec<String> {
    let stats = &page.stats;
    vec![
        format!("Home page \u{2192} {}", output.display()),
        format!(
            "Indexed {}: {}, {}, {}",
            plural(stats.page_count, "page", "pages"),
            plural(stats.category_count, "category", "categories"),
            plural(stats.tag_count, "tag", "tags"),
            plural(stats.date_count, "date", "dates"),
        ),
        format!(
            "{} without entry, {} without page",
            plural(stats.orphan_page_count, "page", "pages"),
            plural(stats.orphan_entry_count, "entry", "entries"),
        ),
    ]
}

/// Print the build summary to stdout.
pub fn print_build_output(page: &HomePage, output: &Path) {
    for line in format_build_output(page, output) {
        println!("{}", line);
    }
}
