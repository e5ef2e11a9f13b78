//! Evaluation services
//!
//! Pure orchestration over a built catalog. Nothing here does I/O; tag
//! sets come in, findings go out.
//!
//! - [`dispatcher`] - Guarded, first-match-wins evaluation of one rule
//! - [`visitor`] - All applicable rules for one feature
//! - [`batch`] - Many features in parallel

pub mod batch;
pub mod dispatcher;
pub mod visitor;

pub use batch::{FeatureReport, evaluate_batch};
pub use dispatcher::{GuardedDispatcher, dispatch};
pub use visitor::FeatureVisitor;
