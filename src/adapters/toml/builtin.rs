//! Built-in seamark catalog
//!
//! Nautical seamark checks (classes 9012001 to 9012010), embedded at
//! compile time.

use std::sync::OnceLock;

use log::warn;

use super::parser::parse_catalog;
use crate::core::catalog::{RegexLimits, RuleCatalog};
use crate::core::error::CatalogError;

/// Catalog source text
pub const SEAMARK_TOML: &str = include_str!("../../../catalogs/seamark.toml");

static SEAMARK: OnceLock<RuleCatalog> = OnceLock::new();

impl RuleCatalog {
    /// Build a fresh copy of the seamark catalog
    ///
    /// Each call compiles its own patterns, so evaluation counters start at
    /// zero.
    pub fn seamark() -> Result<Self, CatalogError> {
        Self::seamark_with_limits(RegexLimits::default())
    }

    /// Build the seamark catalog under explicit regex limits
    pub fn seamark_with_limits(limits: RegexLimits) -> Result<Self, CatalogError> {
        parse_catalog(SEAMARK_TOML, limits)
            .inspect_err(|e| warn!("Built-in seamark catalog rejected: {e}"))
    }

    /// Process-wide seamark catalog, built on first use
    pub fn shared_seamark() -> Result<&'static Self, CatalogError> {
        if let Some(catalog) = SEAMARK.get() {
            return Ok(catalog);
        }
        let catalog = Self::seamark()?;
        Ok(SEAMARK.get_or_init(|| catalog))
    }
}
