//! Check features against a catalog

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use log::info;
use tagcheck::config::EngineConfig;
use tagcheck::output::{CheckResult, OutputMode};
use tagcheck::{Feature, FeatureVisitor, evaluate_batch};

use super::{build_catalog, catalog_source};

/// Read features from `path`, or stdin for "-"
fn read_features(path: &Path) -> anyhow::Result<Vec<Feature>> {
    let content = if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("failed to read features from stdin")?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read features {}", path.display()))?
    };
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse features {}", path.display()))
}

/// Evaluate every feature and report findings; exits 1 when any were found
pub fn check(
    features: &Path,
    catalog: Option<&Path>,
    config: &EngineConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let rules = build_catalog(catalog, config)
        .with_context(|| format!("failed to load {}", catalog_source(catalog)))?;
    let features = read_features(features)?;

    info!("Evaluating {} feature(s) against {} rule(s)", features.len(), rules.len());

    let visitor = FeatureVisitor::new(&rules).with_dispatcher(config.dispatcher());
    let reports = evaluate_batch(&visitor, &features)?;

    let result = CheckResult::new(reports, rules.len());
    result.render(mode);

    if !result.passed {
        std::process::exit(1);
    }

    Ok(())
}
