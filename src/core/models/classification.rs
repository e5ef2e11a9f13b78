//! Classification metadata
//!
//! Static per-class metadata handed to the reporting pipeline for
//! grouping and filtering. The engine never interprets these values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Metadata of one rule class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Class id
    pub id: u32,
    /// Item number the class belongs to
    pub item: u32,
    /// Severity level (1 = major .. 3 = minor)
    pub level: u8,
    /// Free-form grouping tags
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Human-readable title, may contain slot placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Classification {
    /// Create a classification without a title
    #[must_use]
    pub fn new<I, S>(id: u32, item: u32, level: u8, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            item,
            level,
            tags: tags.into_iter().map(Into::into).collect(),
            title: None,
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether this class carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
