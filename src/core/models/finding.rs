//! Finding model
//!
//! A Finding is one diagnostic emitted by the clause that won a rule.

use serde::{Deserialize, Serialize};

/// One diagnostic for one feature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Rule class id (key into the classification registry)
    pub class: u32,
    /// Fingerprint of the clause that fired, stable across runs
    pub subclass: u32,
    /// Rendered message
    pub text: String,
}

impl Finding {
    /// Create a new finding
    #[must_use]
    pub const fn new(class: u32, subclass: u32, text: String) -> Self {
        Self {
            class,
            subclass,
            text,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{}] {}", self.class, self.subclass, self.text)
    }
}
