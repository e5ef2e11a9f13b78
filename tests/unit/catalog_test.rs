//! Tests for catalog loading and build-time validation

use std::fs;

use tagcheck::adapters::toml::{load_catalog, parse_catalog};
use tagcheck::core::catalog::{RegexLimits, RuleDefinition, TestOp, fingerprint};
use tagcheck::{CatalogError, FeatureKind, RuleCatalog};
use tempfile::TempDir;

use crate::common::{clause, test};

const CATALOG: &str = r#"
[[class]]
id = 100
item = 1
level = 2
tags = ["tag", "fixme"]
title = "Fixme"

[[rule]]
id = "fixme-on-ways"
class = 100
kinds = ["line", "area"]
message = "{0.key}: {0.value}"

[[rule.clause]]
tests = [{ key = "fixme", op = "present", slot = 0 }]

[[rule.clause]]
subclass = 5
tests = [{ key = "FIXME", op = "regex", value = "^(yes|todo)$", slot = 0 }]
"#;

#[test]
fn parse_catalog_from_toml() {
    let catalog = parse_catalog(CATALOG, RegexLimits::default()).unwrap();
    let rule = catalog.rule("fixme-on-ways").unwrap();

    assert_eq!(rule.kinds(), &[FeatureKind::Line, FeatureKind::Area]);
    assert_eq!(rule.clauses()[1].subclass(), 5);
    assert_eq!(
        rule.clauses()[0].subclass(),
        fingerprint("fixme-on-ways", &rule.clauses()[0].to_string())
    );
    assert_eq!(catalog.classification(100).and_then(|c| c.title.as_deref()), Some("Fixme"));
    assert_eq!(catalog.rules_for(FeatureKind::Node).count(), 0);
}

#[test]
fn load_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, CATALOG).unwrap();

    let catalog = load_catalog(&path, RegexLimits::default()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.clause_count(), 2);
}

#[test]
fn malformed_regex_fails_at_load() {
    let bad = CATALOG.replace("^(yes|todo)$", "^(yes|todo$");
    let err = parse_catalog(&bad, RegexLimits::default()).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRegex { ref rule, .. } if rule == "fixme-on-ways"));
}

#[test]
fn regex_size_limit_is_applied() {
    let limits = RegexLimits {
        size_limit: 16,
        ..RegexLimits::default()
    };
    let err = parse_catalog(CATALOG, limits).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRegex { .. }));
}

#[test]
fn bad_toml_is_parse_error() {
    let err = parse_catalog("[[rule]\nid = 1", RegexLimits::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn template_must_be_bound_in_every_clause() {
    let rule = RuleDefinition::new("partial", 100, "{0.value} {1.key}")
        .with_clause(clause(vec![
            test("a", TestOp::Present, None, Some(0)),
            test("b", TestOp::Absent, None, Some(1)),
        ]))
        .with_clause(clause(vec![test("a", TestOp::Present, None, Some(0))]));

    let err = RuleCatalog::builder()
        .class(tagcheck::core::models::Classification::new(100, 1, 2, ["tag"]))
        .rule(rule)
        .build()
        .unwrap_err();
    assert!(matches!(err, CatalogError::UnboundPlaceholder { clause: 1, slot: 1, .. }));
    assert!(err.to_string().contains("partial"));
}

#[test]
fn seamark_catalog_guards_are_explicit_and_sound() {
    let catalog = RuleCatalog::seamark().unwrap();
    for rule in catalog.rules() {
        assert!(!rule.guard().conjuncts().is_empty(), "rule {} has no guard", rule.id());
        for clause in rule.clauses() {
            assert!(rule.guard().covers(clause), "rule {} guard misses {clause}", rule.id());
        }
    }
}
