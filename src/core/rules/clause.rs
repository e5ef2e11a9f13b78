//! Clause - one alternative of a rule
//!
//! A clause is a short-circuiting conjunction of tests. Every attempt gets
//! a fresh capture scope, so a clause that fails halfway leaves nothing
//! behind for the next alternative to trip over.

use std::collections::BTreeSet;

use super::capture::CaptureSlots;
use super::predicate::{ClauseAbort, Test};
use crate::core::models::TagSet;

/// One alternative conjunction of tests
#[derive(Debug)]
pub struct Clause {
    tests: Vec<Test>,
    subclass: u32,
    selector: Option<String>,
}

impl Clause {
    /// Create a clause with a fixed subclass fingerprint
    #[must_use]
    pub const fn new(tests: Vec<Test>, subclass: u32) -> Self {
        Self {
            tests,
            subclass,
            selector: None,
        }
    }

    /// Attach the selector text the clause was compiled from
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Tests, in evaluation order
    #[must_use]
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// Subclass fingerprint reported when this clause wins
    #[must_use]
    pub const fn subclass(&self) -> u32 {
        self.subclass
    }

    /// Selector text, if the compiler kept it
    #[must_use]
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Keys that must be present for this clause to have any chance
    #[must_use]
    pub fn required_keys(&self) -> BTreeSet<&str> {
        self.tests.iter().filter(|t| t.requires_presence()).map(Test::key).collect()
    }

    /// Slots written by at least one test
    #[must_use]
    pub fn bound_slots(&self) -> BTreeSet<usize> {
        self.tests.iter().filter_map(Test::slot).collect()
    }

    fn slot_capacity(&self) -> usize {
        self.tests.iter().filter_map(Test::slot).max().map_or(0, |s| s + 1)
    }

    /// Attempt the clause against `tags`
    ///
    /// Returns the captures of a successful attempt. A failing test ends
    /// the attempt right there; the abort never escapes this method.
    #[must_use]
    pub fn attempt<'a>(&'a self, tags: &'a TagSet) -> Option<CaptureSlots<'a>> {
        let mut captures = CaptureSlots::with_capacity(self.slot_capacity());
        let outcome: Result<(), ClauseAbort> =
            self.tests.iter().try_for_each(|test| test.evaluate(tags, &mut captures));
        outcome.ok().map(|()| captures)
    }

    /// Whether the clause matches, discarding captures
    #[must_use]
    pub fn matches(&self, tags: &TagSet) -> bool {
        self.attempt(tags).is_some()
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for test in &self.tests {
            write!(f, "{test}")?;
        }
        Ok(())
    }
}
