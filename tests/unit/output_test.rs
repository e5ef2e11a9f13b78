//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use tagcheck::core::services::FeatureReport;
use tagcheck::output::{CheckResult, ClassListResult, OutputMode, ValidateResult};
use tagcheck::{FeatureKind, Finding, RuleCatalog};

fn report(id: &str, findings: Vec<Finding>) -> FeatureReport {
    FeatureReport {
        id: id.to_string(),
        kind: FeatureKind::Node,
        findings,
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// CheckResult Tests
// =============================================================================

#[test]
fn check_result_keeps_only_features_with_findings() {
    let result = CheckResult::new(
        vec![
            report("n1", vec![]),
            report("n2", vec![Finding::new(9_012_006, 1, "wreck have no seamark:wreck:category".into())]),
            report("n3", vec![]),
        ],
        11,
    );

    assert!(!result.passed);
    assert_eq!(result.features_checked, 3);
    assert_eq!(result.findings, 1);
    assert_eq!(result.reports.len(), 1);
    assert_eq!(result.reports[0].id, "n2");
    assert_eq!(result.summary(), "1 finding(s) in 1 of 3 feature(s).");
}

#[test]
fn check_result_serialization() {
    let result = CheckResult::new(
        vec![report("n2", vec![Finding::new(9_012_006, 7, "wreck have no seamark:wreck:category".into())])],
        11,
    );

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"passed\":false"));
    assert!(json.contains("\"kind\":\"node\""));
    assert!(json.contains("\"class\":9012006"));
    assert!(json.contains("\"subclass\":7"));
}

#[test]
fn check_result_clean() {
    let result = CheckResult::new(vec![report("n1", vec![])], 11);
    assert!(result.passed);
    assert_eq!(result.summary(), "No findings in 1 feature(s).");
}

// =============================================================================
// Catalog listings
// =============================================================================

#[test]
fn class_list_counts_rules() {
    let catalog = RuleCatalog::seamark().unwrap();
    let result = ClassListResult::from_catalog(&catalog);

    assert_eq!(result.classes.len(), 10);
    let shared = result.classes.iter().find(|c| c.class.id == 9_012_008).unwrap();
    assert_eq!(shared.rules, 2);

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"id\":9012001"));
    assert!(json.contains("\"rules\":1"));
}

#[test]
fn validate_result_serialization() {
    let catalog = RuleCatalog::seamark().unwrap();
    let valid = ValidateResult::valid("built-in", &catalog);
    assert!(valid.valid);
    assert_eq!(valid.rules, 11);

    let json = serde_json::to_string(&valid).unwrap();
    assert!(!json.contains("error"));

    let invalid = ValidateResult::invalid("bad.toml", "rule x has no clauses");
    let json = serde_json::to_string(&invalid).unwrap();
    assert!(json.contains("\"valid\":false"));
    assert!(json.contains("rule x has no clauses"));
}
