//! Property-based tests for guards and dispatch
//!
//! Random clauses over a small key/value universe, so that random tag sets
//! actually hit them.

use proptest::prelude::*;
use tagcheck::core::catalog::{ClauseDefinition, RuleDefinition, TestDefinition, TestOp};
use tagcheck::{FeatureVisitor, TagSet, dispatch};

use crate::common::catalog;

const KEYS: [&str; 4] = ["a", "b", "c", "d"];
const VALUES: [&str; 3] = ["x", "y", "x;y"];
const PATTERNS: [&str; 3] = ["x", "^y$", ";"];

fn test_strategy() -> impl Strategy<Value = TestDefinition> {
    (0..KEYS.len(), 0..7u8, 0..VALUES.len()).prop_map(|(k, op, v)| {
        let key = KEYS[k];
        match op {
            0 => TestDefinition::new(key, TestOp::Present, None, None),
            1 => TestDefinition::new(key, TestOp::Absent, None, None),
            2 => TestDefinition::new(key, TestOp::Eq, Some(VALUES[v]), None),
            3 => TestDefinition::new(key, TestOp::Ne, Some(VALUES[v]), None),
            4 => TestDefinition::new(key, TestOp::Contains, Some(";"), None),
            5 => TestDefinition::new(key, TestOp::Regex, Some(PATTERNS[v]), None),
            _ => TestDefinition::new(key, TestOp::NotRegex, Some(PATTERNS[v]), None),
        }
    })
}

fn rule_strategy() -> impl Strategy<Value = RuleDefinition> {
    prop::collection::vec(prop::collection::vec(test_strategy(), 1..4), 1..4).prop_map(|clauses| {
        clauses.into_iter().fold(RuleDefinition::new("random", 1, "matched"), |rule, tests| {
            rule.with_clause(ClauseDefinition::new(tests))
        })
    })
}

fn tags_strategy() -> impl Strategy<Value = TagSet> {
    prop::collection::vec(prop::option::of(0..VALUES.len()), KEYS.len()).prop_map(|values| {
        KEYS.iter()
            .zip(values)
            .filter_map(|(key, value)| value.map(|v| (*key, VALUES[v])))
            .collect()
    })
}

proptest! {
    /// A derived guard never rejects tags some clause matches
    #[test]
    fn derived_guard_never_under_approximates(rule in rule_strategy(), tags in tags_strategy()) {
        let catalog = catalog(vec![rule]);
        let rule = &catalog.rules()[0];
        if rule.clauses().iter().any(|c| c.matches(&tags)) {
            prop_assert!(rule.guard().admits(&tags));
        }
    }

    /// The finding, if any, comes from the first matching clause
    #[test]
    fn first_matching_clause_wins(rule in rule_strategy(), tags in tags_strategy()) {
        let catalog = catalog(vec![rule]);
        let rule = &catalog.rules()[0];
        let first = rule.clauses().iter().find(|c| c.matches(&tags));
        let finding = dispatch(rule, &tags).unwrap();

        match (first, finding) {
            (Some(clause), Some(finding)) => prop_assert_eq!(finding.subclass, clause.subclass()),
            (None, None) => {},
            (first, finding) => prop_assert!(false, "clause {:?} vs finding {:?}", first.map(ToString::to_string), finding),
        }
    }

    /// Same inputs, same findings
    #[test]
    fn dispatch_is_deterministic(rule in rule_strategy(), tags in tags_strategy()) {
        let catalog = catalog(vec![rule]);
        let rule = &catalog.rules()[0];
        prop_assert_eq!(dispatch(rule, &tags), dispatch(rule, &tags));
    }

    /// A visitor reports at most one finding per rule
    #[test]
    fn at_most_one_finding_per_rule(
        rules in prop::collection::vec(rule_strategy(), 1..5),
        tags in tags_strategy()
    ) {
        let count = rules.len();
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(i, r)| RuleDefinition { id: format!("rule-{i}"), ..r })
            .collect();
        let catalog = catalog(rules);
        let findings = FeatureVisitor::new(&catalog).visit_node(&tags).unwrap();
        prop_assert!(findings.len() <= count);
    }
}
