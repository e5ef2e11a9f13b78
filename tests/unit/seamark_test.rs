//! Tests against the built-in seamark catalog
//!
//! The tag sets are the ones the nautical validator is known to flag (or
//! to leave alone).

use tagcheck::{FeatureKind, FeatureVisitor, Finding};

use crate::common::{seamark, tags};

fn findings_for(pairs: &[(&str, &str)]) -> Vec<Finding> {
    let catalog = seamark();
    FeatureVisitor::new(&catalog).visit_node(&tags(pairs)).unwrap()
}

fn find(findings: &[Finding], class: u32) -> Option<&Finding> {
    findings.iter().find(|f| f.class == class)
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn multicolour_lateral_buoy_without_pattern() {
    let findings = findings_for(&[
        ("seamark:type", "buoy_lateral"),
        ("seamark:buoy_lateral:color", "red;green"),
    ]);

    let finding = find(&findings, 9_012_001).expect("9012001 should fire");
    assert!(finding.text.contains("buoy_lateral"));
    assert!(finding.text.contains("seamark:buoy_lateral:colour_pattern"));
    assert_eq!(
        finding.text,
        "Multi-colour buoy_lateral without seamark:buoy_lateral:colour_pattern"
    );
}

#[test]
fn wreck_without_category() {
    let findings = findings_for(&[("seamark:type", "wreck")]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].class, 9_012_006);
    assert_eq!(findings[0].text, "wreck have no seamark:wreck:category");
}

#[test]
fn wreck_with_category_is_clean() {
    let findings =
        findings_for(&[("seamark:type", "wreck"), ("seamark:wreck:category", "dangerous")]);
    assert!(findings.is_empty());
}

#[test]
fn unrelated_feature_is_rejected_by_guards() {
    let catalog = seamark();
    let residential = tags(&[("highway", "residential")]);

    assert!(catalog.rules().iter().all(|r| !r.guard().admits(&residential)));

    let findings = FeatureVisitor::new(&catalog).visit_node(&residential).unwrap();
    assert!(findings.is_empty());
    assert_eq!(catalog.regex_evaluations(), 0);
}

#[test]
fn cardinal_buoy_colour_contradicts_category() {
    let findings = findings_for(&[
        ("seamark:type", "buoy_cardinal"),
        ("seamark:buoy_cardinal:colour", "black;yellow"),
        ("seamark:buoy_cardinal:category", "south"),
    ]);

    let finding = find(&findings, 9_012_005).expect("9012005 should fire");
    assert!(finding.text.contains("black;yellow"));
    assert!(finding.text.contains("north"));
    assert_eq!(
        finding.text,
        "Probably wrong category on buoy_cardinal, the colour combination black;yellow usually mean north"
    );
}

// =============================================================================
// OTHER RULES
// =============================================================================

#[test]
fn lateral_colour_contradicts_category() {
    let findings = findings_for(&[
        ("seamark:type", "buoy_lateral"),
        ("seamark:buoy_lateral:system", "iala-a"),
        ("seamark:buoy_lateral:category", "port"),
        ("seamark:buoy_lateral:colour", "green"),
    ]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].class, 9_012_004);
    assert_eq!(
        findings[0].text,
        "Probably wrong category on buoy_lateral, green colour mean starboard in iala-a"
    );
}

#[test]
fn lateral_without_system() {
    let findings = findings_for(&[
        ("seamark:type", "buoy_lateral"),
        ("seamark:buoy_lateral:colour", "red;green"),
    ]);
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].text,
        "buoy_lateral have no IALA or system defind (seamark:buoy_lateral:system)"
    );
}

#[test]
fn rules_sharing_a_class_keep_distinct_subclasses() {
    let rock = findings_for(&[("seamark:type", "rock")]);
    let notice =
        findings_for(&[("seamark:type", "notice"), ("seamark:notice:category", "no_entry")]);

    assert_eq!(rock[0].class, 9_012_008);
    assert_eq!(rock[0].text, "rock without seamark:rock:water_level");
    assert_eq!(notice[0].class, 9_012_008);
    assert_eq!(notice[0].text, "seamark:notice:category without seamark:notice:system");
    assert_ne!(rock[0].subclass, notice[0].subclass);
}

#[test]
fn seamark_rules_only_apply_to_nodes() {
    let catalog = seamark();
    let wreck = tags(&[("seamark:type", "wreck")]);
    let visitor = FeatureVisitor::new(&catalog);

    assert_eq!(visitor.visit(FeatureKind::Node, &wreck).unwrap().len(), 1);
    assert!(visitor.visit_line(&wreck).unwrap().is_empty());
    assert!(visitor.visit_area(&wreck).unwrap().is_empty());
}

#[test]
fn subclasses_are_stable_across_builds() {
    let pairs = [("seamark:type", "wreck")];
    assert_eq!(findings_for(&pairs), findings_for(&pairs));
}

#[test]
fn every_class_has_a_rule() {
    let catalog = seamark();
    for class in catalog.classes() {
        assert!(
            catalog.rules().iter().any(|r| r.class() == class.id),
            "class {} has no rule",
            class.id
        );
    }
}
