//! Guarded dispatch of one rule against one tag set
//!
//! The guard runs first and only looks at key presence. When it admits
//! the tags, clauses are attempted in declaration order and the first one
//! that matches wins; its captures render the message.

use log::trace;

use crate::core::error::EvalError;
use crate::core::models::{Finding, TagSet};
use crate::core::rules::{Rule, UnboundSlot};

/// Evaluates rules with a guard pre-check and first-match-wins alternation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardedDispatcher {
    verify_guards: bool,
}

impl GuardedDispatcher {
    /// Dispatcher that trusts guards
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verify_guards: false,
        }
    }

    /// Re-check every guard rejection by running the clauses anyway
    ///
    /// Costs the whole guard optimization; meant for catalog debugging.
    #[must_use]
    pub const fn with_verify_guards(mut self, verify: bool) -> Self {
        self.verify_guards = verify;
        self
    }

    /// Whether guard rejections are re-checked
    #[must_use]
    pub const fn verifies_guards(&self) -> bool {
        self.verify_guards
    }

    /// Evaluate `rule` against `tags`
    ///
    /// Returns at most one finding. Errors only report defects in the
    /// compiled rule.
    pub fn dispatch(&self, rule: &Rule, tags: &TagSet) -> Result<Option<Finding>, EvalError> {
        if !rule.guard().admits(tags) {
            if self.verify_guards
                && let Some(clause) = rule.clauses().iter().position(|c| c.matches(tags))
            {
                return Err(EvalError::GuardUnsound {
                    rule: rule.id().to_string(),
                    clause,
                });
            }
            return Ok(None);
        }

        let winner = rule
            .clauses()
            .iter()
            .enumerate()
            .find_map(|(index, clause)| clause.attempt(tags).map(|captures| (index, clause, captures)));

        let Some((index, clause, captures)) = winner else {
            return Ok(None);
        };

        trace!("Rule {} matched clause {index} ({clause})", rule.id());

        let text = rule.template().render(&captures).map_err(|UnboundSlot(slot)| {
            EvalError::UnresolvedPlaceholder {
                rule: rule.id().to_string(),
                slot,
            }
        })?;

        Ok(Some(Finding::new(rule.class(), clause.subclass(), text)))
    }
}

/// Evaluate `rule` against `tags` with the default dispatcher
pub fn dispatch(rule: &Rule, tags: &TagSet) -> Result<Option<Finding>, EvalError> {
    GuardedDispatcher::new().dispatch(rule, tags)
}
