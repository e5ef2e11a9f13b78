//! Guard - cheap key-presence pre-check
//!
//! A guard is an OR of ANDs over key names. It only looks at which keys a
//! feature carries, never at values, so a rule whose keys are all missing
//! is skipped before any comparison or regex runs.
//!
//! A guard may over-approximate (let through tags no clause matches) but
//! must never under-approximate.

use std::collections::BTreeSet;

use super::clause::Clause;
use crate::core::models::TagSet;

/// Key-presence pre-check of one rule
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Guard {
    conjuncts: Vec<Vec<String>>,
}

impl Guard {
    /// Build a guard from explicit conjuncts
    ///
    /// Keys inside a conjunct are sorted and deduplicated.
    #[must_use]
    pub fn new(conjuncts: Vec<Vec<String>>) -> Self {
        let conjuncts = conjuncts
            .into_iter()
            .map(|c| c.into_iter().collect::<BTreeSet<_>>().into_iter().collect())
            .collect();
        Self { conjuncts }
    }

    /// Derive the guard from a clause set
    ///
    /// One conjunct per clause, made of the keys its presence-requiring
    /// tests look at. Identical conjuncts are merged.
    #[must_use]
    pub fn derive(clauses: &[Clause]) -> Self {
        let conjuncts: BTreeSet<Vec<String>> = clauses
            .iter()
            .map(|clause| clause.required_keys().into_iter().map(str::to_string).collect())
            .collect();
        Self {
            conjuncts: conjuncts.into_iter().collect(),
        }
    }

    /// Conjuncts, each a sorted list of keys
    #[must_use]
    pub fn conjuncts(&self) -> &[Vec<String>] {
        &self.conjuncts
    }

    /// Whether the guard lets `tags` through
    #[must_use]
    pub fn admits(&self, tags: &TagSet) -> bool {
        self.conjuncts.iter().any(|keys| keys.iter().all(|k| tags.contains_key(k)))
    }

    /// Whether every tag set matched by `clause` passes this guard
    ///
    /// Holds when some conjunct only names keys the clause itself requires.
    #[must_use]
    pub fn covers(&self, clause: &Clause) -> bool {
        let required = clause.required_keys();
        self.conjuncts.iter().any(|keys| keys.iter().all(|k| required.contains(k.as_str())))
    }
}
