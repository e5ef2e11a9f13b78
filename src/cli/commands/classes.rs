//! List the classification registry

use std::path::Path;

use anyhow::Context;
use tagcheck::config::EngineConfig;
use tagcheck::output::{ClassListResult, OutputMode};

use super::{build_catalog, catalog_source};

/// Print every class of the catalog
pub fn classes(catalog: Option<&Path>, config: &EngineConfig, mode: OutputMode) -> anyhow::Result<()> {
    let rules = build_catalog(catalog, config)
        .with_context(|| format!("failed to load {}", catalog_source(catalog)))?;
    ClassListResult::from_catalog(&rules).render(mode);
    Ok(())
}
