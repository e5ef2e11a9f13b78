//! Adapters that touch the outside world
//!
//! - `toml/` - Compiled catalog files and the embedded seamark catalog

pub mod toml;
