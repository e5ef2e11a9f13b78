//! Core rule evaluation for tagcheck
//!
//! This module contains the evaluation runtime with no I/O dependencies.
//! Catalog files are read by [`adapters`](crate::adapters).
//!
//! ## Architecture
//!
//! - `models/` - Domain types (TagSet, Feature, Finding, Classification)
//! - `rules/` - Compiled rules, clauses, tests, guards and templates
//! - `catalog/` - Rule definitions and the immutable rule catalog
//! - `services/` - Dispatch, per-feature visiting, batch evaluation

pub mod catalog;
pub mod error;
pub mod models;
pub mod rules;
pub mod services;

pub use error::{CatalogError, EvalError};
