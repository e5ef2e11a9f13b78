//! Atomic tag tests
//!
//! A [`Test`] checks one key of a tag set and optionally binds what it saw
//! to a capture slot. A failing test yields [`ClauseAbort`], which the
//! enclosing clause turns into "try the next alternative".
//!
//! Missing keys are never errors: absence and inequality tests succeed on
//! them, value tests fail on them.

use std::sync::atomic::{AtomicU64, Ordering};

use regex::Regex;

use super::capture::CaptureSlots;
use crate::core::models::TagSet;

/// Marker for a failed test
///
/// Only ever observed by the clause that ran the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseAbort;

/// Result of running one test
pub type TestOutcome = Result<(), ClauseAbort>;

/// A regex compiled once when the catalog is built
///
/// Keeps its source text so messages can quote it, and counts how often
/// it was actually executed.
#[derive(Debug)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    evaluations: AtomicU64,
}

impl CompiledPattern {
    /// Wrap an already compiled regex
    #[must_use]
    pub fn new(source: impl Into<String>, regex: Regex) -> Self {
        Self {
            source: source.into(),
            regex,
            evaluations: AtomicU64::new(0),
        }
    }

    /// Compile `source` with the default limits
    pub fn compile(source: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(source, Regex::new(source)?))
    }

    /// Pattern source text
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Unanchored search of `value`
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        self.regex.is_match(value)
    }

    /// How many times this pattern was executed
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }
}

/// Regex test that is simply false on an absent value
#[must_use]
pub fn regex_test(pattern: &CompiledPattern, value: Option<&str>) -> bool {
    value.is_some_and(|v| pattern.is_match(v))
}

/// Substring test that is simply false on an absent haystack
#[must_use]
pub fn string_contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.contains(needle))
}

/// What a test checks about its key
#[derive(Debug)]
pub enum Predicate {
    /// `[key]`
    Present,
    /// `[!key]`
    Absent,
    /// `[key=literal]`
    Equals(String),
    /// `[key!=literal]`, holds when the key is absent
    NotEquals(String),
    /// `[key*=substring]`
    Contains(String),
    /// `[key=~/pattern/]`
    Matches(CompiledPattern),
    /// `[key!~/pattern/]`, holds when the key is absent
    NotMatches(CompiledPattern),
}

impl Predicate {
    /// Short operator name, as used in catalog files
    #[must_use]
    pub const fn op_name(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Equals(_) => "eq",
            Self::NotEquals(_) => "ne",
            Self::Contains(_) => "contains",
            Self::Matches(_) => "regex",
            Self::NotMatches(_) => "not_regex",
        }
    }

    /// Whether the predicate can only hold when its key is present
    #[must_use]
    pub const fn requires_presence(&self) -> bool {
        matches!(self, Self::Present | Self::Equals(_) | Self::Contains(_) | Self::Matches(_))
    }

    /// Compiled pattern, for regex predicates
    #[must_use]
    pub const fn pattern(&self) -> Option<&CompiledPattern> {
        match self {
            Self::Matches(p) | Self::NotMatches(p) => Some(p),
            _ => None,
        }
    }
}

/// One atomic test inside a clause
#[derive(Debug)]
pub struct Test {
    key: String,
    predicate: Predicate,
    slot: Option<usize>,
}

impl Test {
    /// Create a test that captures nothing
    #[must_use]
    pub fn new(key: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            key: key.into(),
            predicate,
            slot: None,
        }
    }

    /// Bind the test to capture slot `slot`
    ///
    /// Slot bounds are checked by the catalog builder.
    #[must_use]
    pub(crate) const fn with_slot(mut self, slot: usize) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Tested key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Predicate
    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Capture slot, if bound
    #[must_use]
    pub const fn slot(&self) -> Option<usize> {
        self.slot
    }

    /// Whether the test can only pass when its key is present
    #[must_use]
    pub const fn requires_presence(&self) -> bool {
        self.predicate.requires_presence()
    }

    fn lookup<'a>(&'a self, tags: &'a TagSet, captures: &mut CaptureSlots<'a>) -> Option<&'a str> {
        match self.slot {
            Some(slot) => captures.capture_tag(slot, tags, &self.key),
            None => tags.get(&self.key),
        }
    }

    fn bind_literal<'a>(&self, captures: &mut CaptureSlots<'a>, literal: &'a str) {
        if let Some(slot) = self.slot {
            captures.capture_literal(slot, literal);
        }
    }

    fn bind_const<'a>(&self, captures: &mut CaptureSlots<'a>, pattern: &'a CompiledPattern) {
        if let Some(slot) = self.slot {
            captures.capture_const(slot, pattern.source());
        }
    }

    /// Run the test, recording captures into `captures`
    ///
    /// Value comparisons capture the tag first and the literal second, so
    /// the literal ends up in `{N.value}`. Regex tests capture the pattern
    /// first and the tag second, so the tag value wins.
    pub fn evaluate<'a>(&'a self, tags: &'a TagSet, captures: &mut CaptureSlots<'a>) -> TestOutcome {
        let passed = match &self.predicate {
            Predicate::Present => self.lookup(tags, captures).is_some(),
            Predicate::Absent => self.lookup(tags, captures).is_none(),
            Predicate::Equals(literal) => {
                let value = self.lookup(tags, captures);
                self.bind_literal(captures, literal);
                value == Some(literal.as_str())
            },
            Predicate::NotEquals(literal) => {
                let value = self.lookup(tags, captures);
                self.bind_literal(captures, literal);
                value != Some(literal.as_str())
            },
            Predicate::Contains(needle) => {
                let value = self.lookup(tags, captures);
                self.bind_literal(captures, needle);
                string_contains(value, needle)
            },
            Predicate::Matches(pattern) => {
                self.bind_const(captures, pattern);
                let value = self.lookup(tags, captures);
                regex_test(pattern, value)
            },
            Predicate::NotMatches(pattern) => {
                self.bind_const(captures, pattern);
                let value = self.lookup(tags, captures);
                !regex_test(pattern, value)
            },
        };

        if passed { Ok(()) } else { Err(ClauseAbort) }
    }
}

impl std::fmt::Display for Test {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = &self.key;
        match &self.predicate {
            Predicate::Present => write!(f, "[\"{key}\"]"),
            Predicate::Absent => write!(f, "[!\"{key}\"]"),
            Predicate::Equals(v) => write!(f, "[\"{key}\"=\"{v}\"]"),
            Predicate::NotEquals(v) => write!(f, "[\"{key}\"!=\"{v}\"]"),
            Predicate::Contains(v) => write!(f, "[\"{key}\"*=\"{v}\"]"),
            Predicate::Matches(p) => write!(f, "[\"{key}\"=~/{}/]", p.source()),
            Predicate::NotMatches(p) => write!(f, "[\"{key}\"!~/{}/]", p.source()),
        }
    }
}
