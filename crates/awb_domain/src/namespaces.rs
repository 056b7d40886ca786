//! Ordered namespace prefix tables.
//!
//! A table is a sequence, not a map: every lookup is a linear first-match
//! scan in insertion order, so a table that lists a short prefix before a
//! longer one it is a prefix of will never resolve the longer one.

use crate::types::Namespace;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceTableError {
    #[error("namespace {index} has an empty prefix")]
    EmptyPrefix { index: Namespace },
    #[error("prefix {prefix:?} for namespace {index} must end with ':'")]
    MissingColon { index: Namespace, prefix: String },
}

/// One `index -> "Prefix:"` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceEntry {
    pub index: Namespace,
    /// Localized prefix including its trailing colon, e.g. `"Category:"`.
    pub prefix: String,
}

impl NamespaceEntry {
    pub fn new(index: Namespace, prefix: impl Into<String>) -> Self {
        Self {
            index,
            prefix: prefix.into(),
        }
    }
}

/// A prefix that can never match because an earlier entry always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedPrefix {
    pub shadowing: NamespaceEntry,
    pub shadowed: NamespaceEntry,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NamespaceEntry>", into = "Vec<NamespaceEntry>")]
pub struct NamespaceTable {
    entries: Vec<NamespaceEntry>,
}

impl NamespaceTable {
    /// Build a table, keeping the given order.
    pub fn new(entries: Vec<NamespaceEntry>) -> Result<Self, NamespaceTableError> {
        for entry in &entries {
            if entry.prefix.is_empty() {
                return Err(NamespaceTableError::EmptyPrefix { index: entry.index });
            }
            if !entry.prefix.ends_with(':') {
                return Err(NamespaceTableError::MissingColon {
                    index: entry.index,
                    prefix: entry.prefix.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Build a table from `(index, prefix)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, NamespaceTableError>
    where
        I: IntoIterator<Item = (i32, &'a str)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(index, prefix)| NamespaceEntry::new(Namespace(index), prefix))
                .collect(),
        )
    }

    /// The fixed English table consulted when the local table has no match.
    pub fn english() -> &'static NamespaceTable {
        static ENGLISH: OnceLock<NamespaceTable> = OnceLock::new();
        ENGLISH.get_or_init(|| NamespaceTable {
            entries: ENGLISH_NAMESPACES
                .iter()
                .map(|&(index, prefix)| NamespaceEntry::new(Namespace(index), prefix))
                .collect(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamespaceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose prefix starts `title`.
    pub fn match_prefix(&self, title: &str) -> Option<&NamespaceEntry> {
        self.entries.iter().find(|e| title.starts_with(e.prefix.as_str()))
    }

    /// First entry whose prefix occurs anywhere in `title`.
    pub fn find_contained(&self, title: &str) -> Option<&NamespaceEntry> {
        self.entries.iter().find(|e| title.contains(e.prefix.as_str()))
    }

    /// First prefix registered for `index`.
    pub fn prefix_for(&self, index: Namespace) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.index == index)
            .map(|e| e.prefix.as_str())
    }

    /// Entries that an earlier, shorter prefix makes unreachable.
    pub fn shadowed_prefixes(&self) -> Vec<ShadowedPrefix> {
        let mut shadowed = Vec::new();
        for (i, later) in self.entries.iter().enumerate() {
            if let Some(earlier) = self.entries[..i]
                .iter()
                .find(|e| later.prefix.starts_with(e.prefix.as_str()))
            {
                shadowed.push(ShadowedPrefix {
                    shadowing: earlier.clone(),
                    shadowed: later.clone(),
                });
            }
        }
        shadowed
    }
}

impl TryFrom<Vec<NamespaceEntry>> for NamespaceTable {
    type Error = NamespaceTableError;

    fn try_from(entries: Vec<NamespaceEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<NamespaceTable> for Vec<NamespaceEntry> {
    fn from(table: NamespaceTable) -> Self {
        table.entries
    }
}

impl<'a> IntoIterator for &'a NamespaceTable {
    type Item = &'a NamespaceEntry;
    type IntoIter = std::slice::Iter<'a, NamespaceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

const ENGLISH_NAMESPACES: &[(i32, &str)] = &[
    (-2, "Media:"),
    (-1, "Special:"),
    (1, "Talk:"),
    (2, "User:"),
    (3, "User talk:"),
    (4, "Wikipedia:"),
    (4, "Project:"),
    (5, "Wikipedia talk:"),
    (5, "Project talk:"),
    (6, "File:"),
    (6, "Image:"),
    (7, "File talk:"),
    (7, "Image talk:"),
    (8, "MediaWiki:"),
    (9, "MediaWiki talk:"),
    (10, "Template:"),
    (11, "Template talk:"),
    (12, "Help:"),
    (13, "Help talk:"),
    (14, "Category:"),
    (15, "Category talk:"),
    (100, "Portal:"),
    (101, "Portal talk:"),
];
