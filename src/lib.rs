//! tagcheck - Guarded-clause rule engine for tagged map features
//!
//! Evaluates a catalog of compiled rules against the key-value tags of map
//! features and reports at most one finding per rule and feature, with a
//! message rendered from the tags that matched.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::catalog::RuleCatalog;
pub use crate::core::error::{CatalogError, EvalError};
pub use crate::core::models::{Feature, FeatureKind, Finding, TagSet};
pub use crate::core::services::{FeatureVisitor, GuardedDispatcher, dispatch, evaluate_batch};
