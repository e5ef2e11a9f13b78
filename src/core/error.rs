//! Error types for catalog construction and rule evaluation
//!
//! A failing test inside a clause is not an error: it is ordinary
//! control flow (see [`ClauseAbort`](crate::core::rules::ClauseAbort)).
//! The types here describe defects in compiled rules, which must never
//! be mistaken for "no finding".

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or building a rule catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Catalog file is not valid TOML or does not fit the schema
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two rules share an id
    #[error("duplicate rule id: {0}")]
    DuplicateRule(String),

    /// Two classes share an id
    #[error("duplicate class id: {0}")]
    DuplicateClass(u32),

    /// Rule references a class missing from the registry
    #[error("rule {rule} references unknown class {class}")]
    UnknownClass {
        /// Rule id
        rule: String,
        /// Class id
        class: u32,
    },

    /// Rule has no clauses
    #[error("rule {0} has no clauses")]
    EmptyRule(String),

    /// Clause has no tests
    #[error("rule {rule} clause {clause} has no tests")]
    EmptyClause {
        /// Rule id
        rule: String,
        /// Clause index
        clause: usize,
    },

    /// Operator needs a value but none was given
    #[error("rule {rule} clause {clause}: '{op}' test on {key} requires a value")]
    MissingValue {
        /// Rule id
        rule: String,
        /// Clause index
        clause: usize,
        /// Operator name
        op: String,
        /// Tested key
        key: String,
    },

    /// Operator takes no value but one was given
    #[error("rule {rule} clause {clause}: '{op}' test on {key} takes no value")]
    UnexpectedValue {
        /// Rule id
        rule: String,
        /// Clause index
        clause: usize,
        /// Operator name
        op: String,
        /// Tested key
        key: String,
    },

    /// Regex pattern failed to compile
    #[error("rule {rule}: invalid regex /{pattern}/: {source}")]
    InvalidRegex {
        /// Rule id
        rule: String,
        /// Pattern source
        pattern: String,
        /// Compilation error
        source: regex::Error,
    },

    /// Regex pattern exceeds the configured length bound
    #[error("rule {rule}: regex of {len} bytes exceeds limit of {limit}")]
    PatternTooLong {
        /// Rule id
        rule: String,
        /// Pattern length
        len: usize,
        /// Configured limit
        limit: usize,
    },

    /// Explicit guard would reject a tag set that a clause accepts
    #[error("rule {rule}: guard does not cover clause {clause}")]
    UnsoundGuard {
        /// Rule id
        rule: String,
        /// Clause index
        clause: usize,
    },

    /// Message template references a slot the clause never binds
    #[error("rule {rule} clause {clause}: template references unbound slot {slot}")]
    UnboundPlaceholder {
        /// Rule id
        rule: String,
        /// Clause index
        clause: usize,
        /// Slot index
        slot: usize,
    },

    /// Brace group in a message template that is not a valid placeholder
    #[error("rule {rule}: malformed placeholder {text} in message template")]
    MalformedPlaceholder {
        /// Rule id
        rule: String,
        /// Offending brace group
        text: String,
    },

    /// Slot index out of range
    #[error("rule {rule} clause {clause}: slot {slot} exceeds maximum of {max}")]
    InvalidSlot {
        /// Rule id
        rule: String,
        /// Clause index
        clause: usize,
        /// Slot index
        slot: usize,
        /// Maximum slot index
        max: usize,
    },
}

/// Internal defects detected while dispatching a rule
///
/// These point at a malformed compiled rule, never at bad input data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Winning clause did not capture a slot the message references
    #[error("rule {rule}: placeholder references slot {slot} which was never captured")]
    UnresolvedPlaceholder {
        /// Rule id
        rule: String,
        /// Slot index
        slot: usize,
    },

    /// Guard rejected a tag set that one of the clauses matches
    #[error("rule {rule}: guard rejected tags matched by clause {clause}")]
    GuardUnsound {
        /// Rule id
        rule: String,
        /// Clause index
        clause: usize,
    },
}
