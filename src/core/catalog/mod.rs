//! Rule catalog
//!
//! The immutable registry of compiled rules and their classifications.
//! A catalog is built once, then shared by reference between any number
//! of evaluating threads; nothing in it is mutated afterwards except the
//! relaxed regex evaluation counters.
//!
//! - [`definition`] - Serialized rule definitions
//! - [`builder`] - Validation and compilation into a [`RuleCatalog`]

pub mod builder;
pub mod definition;

use std::collections::BTreeMap;

pub use builder::{CatalogBuilder, MAX_SLOT, RegexLimits, fingerprint};
pub use definition::{
    CatalogDefinition, ClauseDefinition, RuleDefinition, TestDefinition, TestOp,
};

use crate::core::models::{Classification, FeatureKind};
use crate::core::rules::Rule;

/// Compiled rules plus the classification registry
#[derive(Debug)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    classes: BTreeMap<u32, Classification>,
    /// Rule indices per kind, in catalog order
    by_kind: BTreeMap<FeatureKind, Vec<usize>>,
}

impl RuleCatalog {
    /// Start building a catalog
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub(crate) fn from_parts(rules: Vec<Rule>, classes: BTreeMap<u32, Classification>) -> Self {
        let mut by_kind: BTreeMap<FeatureKind, Vec<usize>> = BTreeMap::new();
        for (index, rule) in rules.iter().enumerate() {
            for kind in FeatureKind::ALL {
                if rule.applies_to(kind) {
                    by_kind.entry(kind).or_default().push(index);
                }
            }
        }
        Self {
            rules,
            classes,
            by_kind,
        }
    }

    /// All rules, in catalog order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by id
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id() == id)
    }

    /// Rules applicable to `kind`, in catalog order
    pub fn rules_for(&self, kind: FeatureKind) -> impl Iterator<Item = &Rule> + '_ {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|&index| &self.rules[index])
    }

    /// Classification of a class id
    #[must_use]
    pub fn classification(&self, class: u32) -> Option<&Classification> {
        self.classes.get(&class)
    }

    /// All classifications, by ascending id
    pub fn classes(&self) -> impl Iterator<Item = &Classification> + '_ {
        self.classes.values()
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of clauses across all rules
    #[must_use]
    pub fn clause_count(&self) -> usize {
        self.rules.iter().map(|r| r.clauses().len()).sum()
    }

    /// Total regex executions since the catalog was built
    #[must_use]
    pub fn regex_evaluations(&self) -> u64 {
        self.rules
            .iter()
            .flat_map(Rule::clauses)
            .flat_map(|c| c.tests())
            .filter_map(|t| t.predicate().pattern())
            .map(|p| p.evaluations())
            .sum()
    }
}
