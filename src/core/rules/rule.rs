//! Compiled rule
//!
//! An ordered list of alternative clauses sharing one guard, one message
//! template and one class id.

use super::clause::Clause;
use super::guard::Guard;
use super::template::Template;
use crate::core::models::FeatureKind;

/// A compiled rule
#[derive(Debug)]
pub struct Rule {
    id: String,
    class: u32,
    kinds: Vec<FeatureKind>,
    guard: Guard,
    clauses: Vec<Clause>,
    template: Template,
}

impl Rule {
    /// Assemble a rule from already validated parts
    ///
    /// Only catalog construction calls this. It checks that the guard
    /// covers every clause, that slots stay within
    /// [`MAX_SLOT`](crate::core::catalog::MAX_SLOT) and that the template
    /// only uses bound slots.
    #[must_use]
    pub(crate) const fn new(
        id: String,
        class: u32,
        kinds: Vec<FeatureKind>,
        guard: Guard,
        clauses: Vec<Clause>,
        template: Template,
    ) -> Self {
        Self {
            id,
            class,
            kinds,
            guard,
            clauses,
            template,
        }
    }

    /// Rule id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Class id reported in findings
    #[must_use]
    pub const fn class(&self) -> u32 {
        self.class
    }

    /// Geometry kinds the rule applies to
    #[must_use]
    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }

    /// Whether the rule applies to `kind`
    #[must_use]
    pub fn applies_to(&self, kind: FeatureKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Key-presence guard
    #[must_use]
    pub const fn guard(&self) -> &Guard {
        &self.guard
    }

    /// Alternatives, in declaration order
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Message template
    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }
}
