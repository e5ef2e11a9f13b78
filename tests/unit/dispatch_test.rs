//! Tests for guarded, first-match-wins dispatch

use tagcheck::core::catalog::{RuleDefinition, TestOp};
use tagcheck::{GuardedDispatcher, dispatch};

use crate::common::{catalog, clause, tags, test};

/// Two alternatives that both match `{type=buoy, colour=red}`
fn overlapping_rule() -> RuleDefinition {
    RuleDefinition::new("buoy-colour", 1, "{0.value}: {1.key}={1.value}")
        .with_clause(clause(vec![
            test("type", TestOp::Eq, Some("buoy"), Some(0)),
            test("colour", TestOp::Present, None, Some(1)),
        ]))
        .with_clause(clause(vec![
            test("type", TestOp::Present, None, Some(0)),
            test("light", TestOp::Absent, None, Some(1)),
        ]))
}

// =============================================================================
// FIRST MATCH WINS
// =============================================================================

#[test]
fn earlier_clause_wins_when_both_match() {
    let catalog = catalog(vec![overlapping_rule()]);
    let rule = &catalog.rules()[0];
    let t = tags(&[("type", "buoy"), ("colour", "red")]);

    let finding = dispatch(rule, &t).unwrap().unwrap();
    assert_eq!(finding.text, "buoy: colour=red");
    assert_eq!(finding.subclass, rule.clauses()[0].subclass());
}

#[test]
fn later_clause_renders_only_its_own_captures() {
    let catalog = catalog(vec![overlapping_rule()]);
    let rule = &catalog.rules()[0];
    // First clause binds slot 1 to colour and then fails on type
    let t = tags(&[("type", "beacon"), ("colour", "red")]);

    let finding = dispatch(rule, &t).unwrap().unwrap();
    assert_eq!(finding.text, "beacon: light=");
    assert!(!finding.text.contains("colour"));
    assert_eq!(finding.subclass, rule.clauses()[1].subclass());
}

#[test]
fn clause_subclasses_are_distinct() {
    let catalog = catalog(vec![overlapping_rule()]);
    let clauses = catalog.rules()[0].clauses();
    assert_ne!(clauses[0].subclass(), clauses[1].subclass());
}

// =============================================================================
// GUARD
// =============================================================================

#[test]
fn guard_false_positive_yields_nothing() {
    let rule = RuleDefinition::new("wreck", 1, "{0.value}").with_clause(clause(vec![
        test("seamark:type", TestOp::Eq, Some("wreck"), Some(0)),
    ]));
    let catalog = catalog(vec![rule]);
    let rule = &catalog.rules()[0];
    let t = tags(&[("seamark:type", "rock")]);

    assert!(rule.guard().admits(&t));
    assert_eq!(dispatch(rule, &t), Ok(None));
}

#[test]
fn negated_tests_match_without_their_key() {
    let rule = RuleDefinition::new("bank", 1, "{0.key} is {0.value}, bank {1.value}")
        .with_clause(clause(vec![
            test("seamark:notice:bank", TestOp::Present, None, Some(0)),
            test("seamark:notice:category", TestOp::Ne, Some("no_entry"), Some(1)),
            test("seamark:notice:orientation", TestOp::NotRegex, Some("^[0-9]+$"), None),
        ]));
    let catalog = catalog(vec![rule]);
    let rule = &catalog.rules()[0];

    assert_eq!(rule.guard().conjuncts(), &[vec!["seamark:notice:bank".to_string()]]);

    let finding = dispatch(rule, &tags(&[("seamark:notice:bank", "up")])).unwrap().unwrap();
    assert_eq!(finding.text, "seamark:notice:bank is up, bank no_entry");
}

#[test]
fn regex_capture_renders_tag_value() {
    let rule = RuleDefinition::new("system", 1, "Unknown {0.key}: {0.value}").with_clause(clause(
        vec![test("seamark:notice:system", TestOp::NotRegex, Some("^(cevni|bniwr2|ppwbc)$"), Some(0))],
    ));
    let catalog = catalog(vec![rule]);
    let rule = &catalog.rules()[0];

    let finding = dispatch(rule, &tags(&[("seamark:notice:system", "other")])).unwrap().unwrap();
    assert_eq!(finding.text, "Unknown seamark:notice:system: other");
}

#[test]
fn verify_guards_accepts_sound_guards() {
    let catalog = catalog(vec![overlapping_rule()]);
    let verifying = GuardedDispatcher::new().with_verify_guards(true);
    let rule = &catalog.rules()[0];

    assert_eq!(verifying.dispatch(rule, &tags(&[("highway", "primary")])), Ok(None));
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn repeated_dispatch_is_identical() {
    let catalog = catalog(vec![overlapping_rule()]);
    let rule = &catalog.rules()[0];
    let t = tags(&[("type", "buoy"), ("colour", "red")]);

    let first = dispatch(rule, &t);
    for _ in 0..10 {
        assert_eq!(dispatch(rule, &t), first);
    }
}
