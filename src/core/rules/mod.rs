//! Compiled rule structures and the primitives they evaluate with
//!
//! - [`capture`] - Positional capture scope of one clause attempt
//! - [`predicate`] - Atomic tag tests and the clause abort signal
//! - [`clause`] - Conjunctions of tests
//! - [`guard`] - Key-presence pre-check
//! - [`template`] - Message templates
//! - [`rule`] - Rules tying the above together

pub mod capture;
pub mod clause;
pub mod guard;
pub mod predicate;
pub mod rule;
pub mod template;

pub use capture::{Capture, CaptureSlots, SlotPart, SlotRef, UnboundSlot};
pub use clause::Clause;
pub use guard::Guard;
pub use predicate::{
    ClauseAbort, CompiledPattern, Predicate, Test, TestOutcome, regex_test, string_contains,
};
pub use rule::Rule;
pub use template::{MalformedPlaceholder, Template, TemplateError, render};
