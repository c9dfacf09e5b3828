//! Loading of the `wiki.xml` metadata file.
//!
//! The file describes the pages the wiki *should* have:
//!
//! ```xml
//! <wiki>
//!   <entries>
//!     <entry>
//!       <date>2021-03-04</date>
//!       <category>Notes</category>
//!       <title>About this wiki</title>
//!       <link>About</link>
//!       <tags>
//!         <string>intro</string>
//!         <string>meta</string>
//!       </tags>
//!       <page>About</page>
//!     </entry>
//!   </entries>
//! </wiki>
//! ```
//!
//! The root element's name is not checked. Missing child elements read as
//! empty strings or an empty tag list; unknown elements are ignored, even
//! between repeated `<entry>` or `<string>` siblings. Several `<entries>`
//! blocks are concatenated in document order. Text values are trimmed, so
//! `<page>\n  About\n</page>` names the page `About`. Any structural problem
//! with the document is fatal for the run.

use crate::types::Entry;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("cannot read metadata file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed metadata file {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },
}

#[derive(Debug, Deserialize)]
struct WikiDocument {
    #[serde(default)]
    entries: Vec<EntryList>,
}

#[derive(Debug, Default, Deserialize)]
struct EntryList {
    #[serde(default)]
    entry: Vec<XmlEntry>,
}

/// `<entry>` as it appears on disk; tags are wrapped in `<tags><string>`.
#[derive(Debug, Deserialize)]
struct XmlEntry {
    #[serde(default)]
    date: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    tags: TagList,
    #[serde(default)]
    page: String,
}

#[derive(Debug, Default, Deserialize)]
struct TagList {
    #[serde(default)]
    string: Vec<String>,
}

impl From<XmlEntry> for Entry {
    fn from(raw: XmlEntry) -> Self {
        Entry {
            date: raw.date,
            category: raw.category,
            title: raw.title,
            link: raw.link,
            tags: raw.tags.string,
            page: raw.page,
        }
    }
}

/// Parse metadata XML into entries, in document order.
pub fn parse_entries(xml: &str) -> Result<Vec<Entry>, quick_xml::DeError> {
    let document: WikiDocument = quick_xml::de::from_str(xml)?;
    Ok(document
        .entries
        .into_iter()
        .flat_map(|list| list.entry)
        .map(Entry::from)
        .collect())
}

/// Read and parse the metadata file at `path`.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, MetadataError> {
    let xml = fs::read_to_string(path).map_err(|source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_entries(&xml).map_err(|source| MetadataError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
