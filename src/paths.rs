//! Centralized path definitions for tagcheck
//!
//! Single source of truth for the configuration file locations.
//!
//! ```text
//! ./tagcheck.toml                      # Project config, checked first
//! ~/.config/tagcheck/
//! └── config.toml                      # User config
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "tagcheck.toml";

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".config/tagcheck";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config file in `dir`.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Get the global tagcheck directory.
///
/// Returns `~/.config/tagcheck/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/tagcheck/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config files to try, in lookup order.
///
/// An explicit path wins outright; otherwise the project file in `cwd`
/// comes before the global one.
#[must_use]
pub fn config_candidates(explicit: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => vec![project_config(cwd), global_config()],
    }
}
