//! Batch evaluation
//!
//! Features are independent, so a batch fans out over the rayon pool.
//! Each feature is still evaluated sequentially, and reports come back in
//! input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::core::error::EvalError;
use crate::core::models::{Feature, FeatureKind, Finding};

use super::visitor::FeatureVisitor;

/// Findings of one feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureReport {
    /// Feature id, as supplied
    pub id: String,
    /// Geometry kind
    pub kind: FeatureKind,
    /// Findings, in catalog rule order
    pub findings: Vec<Finding>,
}

impl FeatureReport {
    /// Whether the feature produced no findings
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Evaluate `features` in parallel, keeping their order
///
/// Stops at the first internal defect reported by any feature.
pub fn evaluate_batch(
    visitor: &FeatureVisitor<'_>,
    features: &[Feature],
) -> Result<Vec<FeatureReport>, EvalError> {
    features
        .par_iter()
        .map(|feature| -> Result<FeatureReport, EvalError> {
            let findings = visitor.visit(feature.kind, &feature.tags)?;
            Ok(FeatureReport {
                id: feature.id.clone(),
                kind: feature.kind,
                findings,
            })
        })
        .collect()
}
