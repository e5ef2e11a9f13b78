//! Engine configuration
//!
//! Read from `tagcheck.toml` in the working directory, else from
//! `~/.config/tagcheck/config.toml`. Every field has a default, so an empty
//! or missing file is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::catalog::RegexLimits;
use crate::core::services::GuardedDispatcher;
use crate::paths;

/// Engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Regex complexity bounds
    #[serde(default)]
    pub regex: RegexConfig,
    /// Dispatch behaviour
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[regex]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexConfig {
    /// Compiled program size limit, in bytes
    pub size_limit: usize,
    /// Longest accepted pattern source, in bytes
    pub max_pattern_len: usize,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            size_limit: RegexLimits::DEFAULT_SIZE_LIMIT,
            max_pattern_len: RegexLimits::DEFAULT_MAX_PATTERN_LEN,
        }
    }
}

/// `[dispatch]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Run all clauses when a guard rejects, and fail if one matches
    pub verify_guards: bool,
}

/// `[output]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit JSON instead of text
    pub json: bool,
}

impl EngineConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Resolve and load the config
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// the default locations is used, falling back to defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::find(cwd) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            },
            None => Ok(Self::default()),
        }
    }

    /// First existing config file among the default locations
    #[must_use]
    pub fn find(cwd: &Path) -> Option<PathBuf> {
        paths::config_candidates(None, cwd).into_iter().find(|p| p.is_file())
    }

    /// Regex limits for catalog builds
    #[must_use]
    pub const fn regex_limits(&self) -> RegexLimits {
        RegexLimits {
            size_limit: self.regex.size_limit,
            max_pattern_len: self.regex.max_pattern_len,
        }
    }

    /// Dispatcher configured from `[dispatch]`
    #[must_use]
    pub const fn dispatcher(&self) -> GuardedDispatcher {
        GuardedDispatcher::new().with_verify_guards(self.dispatch.verify_guards)
    }
}
