//! Shared test fixtures and helpers
//!
//! Builders for tag sets and small hand-written catalogs.

use tagcheck::core::catalog::{ClauseDefinition, RuleDefinition, TestDefinition, TestOp};
use tagcheck::core::models::Classification;
use tagcheck::{RuleCatalog, TagSet};

/// Tag set from `(key, value)` pairs
pub fn tags(pairs: &[(&str, &str)]) -> TagSet {
    pairs.iter().copied().collect()
}

/// A test definition
pub fn test(key: &str, op: TestOp, value: Option<&str>, slot: Option<usize>) -> TestDefinition {
    TestDefinition::new(key, op, value, slot)
}

/// A clause definition
pub fn clause(tests: Vec<TestDefinition>) -> ClauseDefinition {
    ClauseDefinition::new(tests)
}

/// Catalog holding `rules` under class 1
pub fn catalog(rules: Vec<RuleDefinition>) -> RuleCatalog {
    rules
        .into_iter()
        .fold(RuleCatalog::builder().class(Classification::new(1, 1, 2, ["test"])), |b, r| b.rule(r))
        .build()
        .expect("test catalog should build")
}

/// Fresh seamark catalog with zeroed counters
pub fn seamark() -> RuleCatalog {
    RuleCatalog::seamark().expect("seamark catalog should build")
}
