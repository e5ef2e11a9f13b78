//! TOML catalog files
//!
//! - [`parser`] - Read and deserialize compiled catalog files
//! - [`builtin`] - The embedded seamark catalog

pub mod builtin;
pub mod parser;

pub use builtin::SEAMARK_TOML;
pub use parser::{load_catalog, load_definition, parse_catalog, parse_definition};
