//! Domain models for tagcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TagSet`] - The attributes of one feature
//! - [`Feature`] - A tagged feature of a given [`FeatureKind`]
//! - [`Finding`] - One diagnostic produced by a rule
//! - [`Classification`] - Static metadata of a rule class

mod classification;
mod feature;
mod finding;
mod tag_set;

pub use classification::Classification;
pub use feature::{Feature, FeatureKind};
pub use finding::Finding;
pub use tag_set::TagSet;
