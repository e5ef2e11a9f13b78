//! Feature kinds and input features
//!
//! A rule applies to one or more geometry kinds; the visitor uses the
//! kind of a feature to pick the rules it has to evaluate.

use serde::{Deserialize, Serialize};

use super::TagSet;

/// Geometry kind of a mapped feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Point feature
    #[default]
    Node,
    /// Linear feature
    Line,
    /// Area feature
    Area,
}

impl FeatureKind {
    /// All kinds, in a fixed order
    pub const ALL: [Self; 3] = [Self::Node, Self::Line, Self::Area];
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Line => write!(f, "line"),
            Self::Area => write!(f, "area"),
        }
    }
}

impl std::str::FromStr for FeatureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" | "point" => Ok(Self::Node),
            "line" | "way" => Ok(Self::Line),
            "area" | "relation" => Ok(Self::Area),
            _ => Err(format!("Invalid feature kind: {s}. Use: node, line, area")),
        }
    }
}

/// A feature as supplied by the external reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Caller-chosen identifier, echoed back in reports
    pub id: String,
    /// Geometry kind
    #[serde(default)]
    pub kind: FeatureKind,
    /// Attribute tags
    #[serde(default)]
    pub tags: TagSet,
}

impl Feature {
    /// Create a new feature
    #[must_use]
    pub fn new(id: impl Into<String>, kind: FeatureKind, tags: TagSet) -> Self {
        Self {
            id: id.into(),
            kind,
            tags,
        }
    }
}
