//! Validate a catalog

use std::path::Path;

use tagcheck::config::EngineConfig;
use tagcheck::output::{OutputMode, ValidateResult};

use super::{build_catalog, catalog_source};

/// Build the catalog and report its size, or the first defect
pub fn validate(catalog: Option<&Path>, config: &EngineConfig, mode: OutputMode) -> anyhow::Result<()> {
    let source = catalog_source(catalog);
    match build_catalog(catalog, config) {
        Ok(rules) => {
            ValidateResult::valid(source, &rules).render(mode);
            Ok(())
        },
        Err(e) => {
            ValidateResult::invalid(source, &e).render(mode);
            std::process::exit(1);
        },
    }
}
