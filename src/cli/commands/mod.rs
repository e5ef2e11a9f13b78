//! Command implementations

mod check;
mod classes;
mod validate;

use std::path::Path;

use tagcheck::RuleCatalog;
use tagcheck::adapters::toml::load_catalog;
use tagcheck::config::EngineConfig;
use tagcheck::core::error::CatalogError;

pub use check::check;
pub use classes::classes;
pub use validate::validate;

/// Label of the catalog `path` selects
fn catalog_source(path: Option<&Path>) -> String {
    path.map_or_else(|| "built-in seamark catalog".to_string(), |p| p.display().to_string())
}

/// Build the catalog at `path`, or the built-in one
fn build_catalog(path: Option<&Path>, config: &EngineConfig) -> Result<RuleCatalog, CatalogError> {
    let limits = config.regex_limits();
    match path {
        Some(path) => load_catalog(path, limits),
        None => RuleCatalog::seamark_with_limits(limits),
    }
}
