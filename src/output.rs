//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::catalog::RuleCatalog;
use crate::core::models::Classification;
use crate::core::services::FeatureReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a check run
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Whether no feature produced a finding
    pub passed: bool,
    /// Number of features evaluated
    pub features_checked: usize,
    /// Number of rules in the catalog
    pub rules: usize,
    /// Total number of findings
    pub findings: usize,
    /// Reports of features with at least one finding, in input order
    pub reports: Vec<FeatureReport>,
}

impl CheckResult {
    /// Summarize evaluated features
    #[must_use]
    pub fn new(reports: Vec<FeatureReport>, rules: usize) -> Self {
        let features_checked = reports.len();
        let reports: Vec<FeatureReport> = reports.into_iter().filter(|r| !r.is_clean()).collect();
        let findings = reports.iter().map(|r| r.findings.len()).sum();
        Self {
            passed: findings == 0,
            features_checked,
            rules,
            findings,
            reports,
        }
    }

    /// Last line of the human output
    #[must_use]
    pub fn summary(&self) -> String {
        if self.passed {
            format!("No findings in {} feature(s).", self.features_checked)
        } else {
            format!(
                "{} finding(s) in {} of {} feature(s).",
                self.findings,
                self.reports.len(),
                self.features_checked
            )
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "Checking {} feature(s) against {} rule(s)...\n",
            self.features_checked, self.rules
        );

        for report in &self.reports {
            println!("{} ({})", report.id.bold(), report.kind);
            for finding in &report.findings {
                let tag = format!("[{}/{}]", finding.class, finding.subclass);
                println!("  {} {}", tag.yellow(), finding.text);
            }
            println!();
        }

        if self.passed {
            println!("{}", self.summary().green());
        } else {
            println!("{}", self.summary().red());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of listing the classification registry
#[derive(Debug, Serialize)]
pub struct ClassListResult {
    /// Classes, by ascending id
    pub classes: Vec<ClassInfo>,
}

/// One class and how many rules report under it
#[derive(Debug, Serialize)]
pub struct ClassInfo {
    /// Class id
    #[serde(flatten)]
    pub class: Classification,
    /// Number of rules using this class
    pub rules: usize,
}

impl ClassListResult {
    /// Collect the registry of `catalog`
    #[must_use]
    pub fn from_catalog(catalog: &RuleCatalog) -> Self {
        let classes = catalog
            .classes()
            .map(|class| ClassInfo {
                rules: catalog.rules().iter().filter(|r| r.class() == class.id).count(),
                class: class.clone(),
            })
            .collect();
        Self { classes }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.classes.is_empty() {
            println!("No classes defined.");
            return;
        }

        println!("Classes:\n");
        for info in &self.classes {
            let class = &info.class;
            println!(
                "  {} item {} level {} ({} rule(s))",
                class.id.to_string().bold(),
                class.item,
                class.level,
                info.rules
            );
            if let Some(title) = &class.title {
                println!("    {title}");
            }
            if !class.tags.is_empty() {
                let tags: Vec<&str> = class.tags.iter().map(String::as_str).collect();
                println!("    tags: {}", tags.join(", "));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of validating a catalog
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether the catalog built
    pub valid: bool,
    /// Where the catalog came from
    pub source: String,
    /// Number of rules
    pub rules: usize,
    /// Number of clauses across all rules
    pub clauses: usize,
    /// Number of classes
    pub classes: usize,
    /// Build error, when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateResult {
    /// A catalog that built
    #[must_use]
    pub fn valid(source: impl Into<String>, catalog: &RuleCatalog) -> Self {
        Self {
            valid: true,
            source: source.into(),
            rules: catalog.len(),
            clauses: catalog.clause_count(),
            classes: catalog.classes().count(),
            error: None,
        }
    }

    /// A catalog that was rejected
    #[must_use]
    pub fn invalid(source: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            valid: false,
            source: source.into(),
            rules: 0,
            clauses: 0,
            classes: 0,
            error: Some(error.to_string()),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.error {
            None => println!(
                "{} {}: {} rule(s), {} clause(s), {} class(es)",
                "Valid".green(),
                self.source,
                self.rules,
                self.clauses,
                self.classes
            ),
            Some(error) => println!("{} {}: {error}", "Invalid".red(), self.source),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
