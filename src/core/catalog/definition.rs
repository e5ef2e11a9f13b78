//! Serialized rule definitions
//!
//! This is the shape the external rule compiler emits. Definitions are
//! plain data; [`CatalogBuilder`](super::CatalogBuilder) validates them and
//! compiles regexes into a [`RuleCatalog`](super::RuleCatalog).

use serde::{Deserialize, Serialize};

use crate::core::models::{Classification, FeatureKind};

/// Test operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestOp {
    /// Key is present
    Present,
    /// Key is absent
    Absent,
    /// Value equals literal
    Eq,
    /// Value differs from literal, or key absent
    Ne,
    /// Value contains substring
    Contains,
    /// Value matches regex
    Regex,
    /// Value does not match regex, or key absent
    NotRegex,
}

impl std::fmt::Display for TestOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Contains => "contains",
            Self::Regex => "regex",
            Self::NotRegex => "not_regex",
        };
        f.write_str(name)
    }
}

/// One test of a clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDefinition {
    /// Tested key
    pub key: String,
    /// Operator
    pub op: TestOp,
    /// Literal, substring or regex source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Capture slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<usize>,
}

impl TestDefinition {
    /// Create a test definition
    #[must_use]
    pub fn new(key: impl Into<String>, op: TestOp, value: Option<&str>, slot: Option<usize>) -> Self {
        Self {
            key: key.into(),
            op,
            value: value.map(str::to_string),
            slot,
        }
    }
}

/// One alternative of a rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseDefinition {
    /// Selector the clause was compiled from, kept for diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Subclass override for this clause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<u32>,
    /// Tests, evaluated in order
    #[serde(default)]
    pub tests: Vec<TestDefinition>,
}

impl ClauseDefinition {
    /// Create a clause definition from its tests
    #[must_use]
    pub fn new(tests: Vec<TestDefinition>) -> Self {
        Self {
            tests,
            ..Self::default()
        }
    }
}

fn default_kinds() -> Vec<FeatureKind> {
    vec![FeatureKind::Node]
}

/// One rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Unique rule id
    pub id: String,
    /// Class id reported in findings
    pub class: u32,
    /// Subclass shared by clauses that do not set their own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<u32>,
    /// Geometry kinds the rule applies to
    #[serde(default = "default_kinds")]
    pub kinds: Vec<FeatureKind>,
    /// Message template
    pub message: String,
    /// Explicit guard; derived from the clauses when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<Vec<Vec<String>>>,
    /// Alternatives, in declaration order
    #[serde(default, rename = "clause")]
    pub clauses: Vec<ClauseDefinition>,
}

impl RuleDefinition {
    /// Create a node rule without clauses
    #[must_use]
    pub fn new(id: impl Into<String>, class: u32, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class,
            subclass: None,
            kinds: default_kinds(),
            message: message.into(),
            guard: None,
            clauses: Vec::new(),
        }
    }

    /// Append a clause
    #[must_use]
    pub fn with_clause(mut self, clause: ClauseDefinition) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Set the rule-level subclass
    #[must_use]
    pub const fn with_subclass(mut self, subclass: u32) -> Self {
        self.subclass = Some(subclass);
        self
    }

    /// Set the geometry kinds
    #[must_use]
    pub fn with_kinds(mut self, kinds: Vec<FeatureKind>) -> Self {
        self.kinds = kinds;
        self
    }

    /// Set an explicit guard
    #[must_use]
    pub fn with_guard(mut self, guard: Vec<Vec<String>>) -> Self {
        self.guard = Some(guard);
        self
    }
}

/// A complete catalog as emitted by the compiler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Classification registry
    #[serde(default, rename = "class")]
    pub classes: Vec<Classification>,
    /// Rules, in evaluation order
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleDefinition>,
}
