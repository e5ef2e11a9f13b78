//! Per-feature entry points
//!
//! A visitor evaluates every rule of the catalog that applies to a
//! feature's geometry kind and collects the findings, at most one per rule.

use crate::core::catalog::RuleCatalog;
use crate::core::error::EvalError;
use crate::core::models::{FeatureKind, Finding, TagSet};

use super::dispatcher::GuardedDispatcher;

/// Evaluates features against a shared catalog
#[derive(Debug, Clone, Copy)]
pub struct FeatureVisitor<'c> {
    catalog: &'c RuleCatalog,
    dispatcher: GuardedDispatcher,
}

impl<'c> FeatureVisitor<'c> {
    /// Visitor using the default dispatcher
    #[must_use]
    pub const fn new(catalog: &'c RuleCatalog) -> Self {
        Self {
            catalog,
            dispatcher: GuardedDispatcher::new(),
        }
    }

    /// Replace the dispatcher
    #[must_use]
    pub const fn with_dispatcher(mut self, dispatcher: GuardedDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Catalog being evaluated
    #[must_use]
    pub const fn catalog(&self) -> &'c RuleCatalog {
        self.catalog
    }

    /// Findings for a feature of `kind`, in catalog rule order
    pub fn visit(&self, kind: FeatureKind, tags: &TagSet) -> Result<Vec<Finding>, EvalError> {
        let mut findings = Vec::new();
        for rule in self.catalog.rules_for(kind) {
            if let Some(finding) = self.dispatcher.dispatch(rule, tags)? {
                findings.push(finding);
            }
        }
        Ok(findings)
    }

    /// Findings for a point feature
    pub fn visit_node(&self, tags: &TagSet) -> Result<Vec<Finding>, EvalError> {
        self.visit(FeatureKind::Node, tags)
    }

    /// Findings for a linear feature
    pub fn visit_line(&self, tags: &TagSet) -> Result<Vec<Finding>, EvalError> {
        self.visit(FeatureKind::Line, tags)
    }

    /// Findings for an area feature
    pub fn visit_area(&self, tags: &TagSet) -> Result<Vec<Finding>, EvalError> {
        self.visit(FeatureKind::Area, tags)
    }
}
