//! TOML parser for compiled catalog files
//!
//! Catalog files hold `[[class]]` and `[[rule]]` tables as emitted by the
//! rule compiler. See [`CatalogDefinition`] for the schema.

use std::fs;
use std::path::Path;

use crate::core::catalog::{CatalogDefinition, RegexLimits, RuleCatalog};
use crate::core::error::CatalogError;

/// Deserialize a catalog definition from TOML text
pub fn parse_definition(content: &str) -> Result<CatalogDefinition, CatalogError> {
    Ok(toml::from_str(content)?)
}

/// Read a catalog definition from a file
pub fn load_definition(path: &Path) -> Result<CatalogDefinition, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_definition(&content)
}

/// Parse and build a catalog from TOML text
pub fn parse_catalog(content: &str, limits: RegexLimits) -> Result<RuleCatalog, CatalogError> {
    let definition = parse_definition(content)?;
    RuleCatalog::builder().with_limits(limits).definition(definition).build()
}

/// Read and build a catalog from a file
pub fn load_catalog(path: &Path, limits: RegexLimits) -> Result<RuleCatalog, CatalogError> {
    let definition = load_definition(path)?;
    RuleCatalog::builder().with_limits(limits).definition(definition).build()
}
