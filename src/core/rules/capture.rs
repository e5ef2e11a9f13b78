//! Positional capture scope of a clause attempt
//!
//! Tests bind `(key, value)` pairs to numbered slots while they run. The
//! message template of the rule later reads those slots back through
//! `{N.key}` / `{N.value}` placeholders.
//!
//! A `CaptureSlots` lives for exactly one clause attempt. It borrows from
//! the tag set and the rule, so nothing captured can outlive the
//! evaluation of the feature it came from.

use crate::core::models::TagSet;

/// Which half of a captured pair a placeholder refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotPart {
    /// `{N.key}`
    Key,
    /// `{N.value}`
    Value,
}

/// A `{N.key}` or `{N.value}` reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    /// Slot index
    pub index: usize,
    /// Key or value
    pub part: SlotPart,
}

impl SlotRef {
    /// Reference to the key captured at `index`
    #[must_use]
    pub const fn key(index: usize) -> Self {
        Self {
            index,
            part: SlotPart::Key,
        }
    }

    /// Reference to the value captured at `index`
    #[must_use]
    pub const fn value(index: usize) -> Self {
        Self {
            index,
            part: SlotPart::Value,
        }
    }
}

impl std::fmt::Display for SlotRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.part {
            SlotPart::Key => write!(f, "{{{}.key}}", self.index),
            SlotPart::Value => write!(f, "{{{}.value}}", self.index),
        }
    }
}

/// One captured binding
///
/// `key` is `None` for purely synthetic bindings (a literal recorded on an
/// empty slot); `value` is `None` when the tested key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capture<'a> {
    /// Tag key
    pub key: Option<&'a str>,
    /// Tag value, literal, or pattern source
    pub value: Option<&'a str>,
}

/// Slot was read but never written during the winning attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnboundSlot(pub usize);

/// Capture scope for one clause attempt
#[derive(Debug, Default)]
pub struct CaptureSlots<'a> {
    slots: Vec<Option<Capture<'a>>>,
}

impl<'a> CaptureSlots<'a> {
    /// Create an empty scope
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty scope with room for `n` slots
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            slots: Vec::with_capacity(n),
        }
    }

    fn entry(&mut self, slot: usize) -> &mut Option<Capture<'a>> {
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }
        &mut self.slots[slot]
    }

    /// Look `key` up in `tags` and record `(key, value)` at `slot`
    ///
    /// An absent key is recorded as `(key, None)` so absence tests can
    /// still name the key in messages. Returns the value, if any.
    pub fn capture_tag(&mut self, slot: usize, tags: &'a TagSet, key: &'a str) -> Option<&'a str> {
        let value = tags.get(key);
        *self.entry(slot) = Some(Capture {
            key: Some(key),
            value,
        });
        value
    }

    /// Record a literal at `slot`, keeping any key already bound there
    pub fn capture_literal(&mut self, slot: usize, literal: &'a str) {
        self.bind_text(slot, literal);
    }

    /// Record the source text of a pattern at `slot`
    ///
    /// Same slot semantics as [`capture_literal`](Self::capture_literal).
    pub fn capture_const(&mut self, slot: usize, source_text: &'a str) {
        self.bind_text(slot, source_text);
    }

    fn bind_text(&mut self, slot: usize, text: &'a str) {
        let entry = self.entry(slot);
        let key = entry.and_then(|c| c.key);
        *entry = Some(Capture {
            key,
            value: Some(text),
        });
    }

    /// Binding at `slot`, if any
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Capture<'a>> {
        self.slots.get(slot).copied().flatten()
    }

    /// Whether `slot` was written during this attempt
    #[must_use]
    pub fn is_bound(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Number of bound slots
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Resolve a placeholder against this scope
    ///
    /// A missing half of a bound pair resolves to the empty string. A slot
    /// that was never written is a defect in the compiled rule.
    pub fn uncapture(&self, slot_ref: SlotRef) -> Result<&'a str, UnboundSlot> {
        let capture = self.get(slot_ref.index).ok_or(UnboundSlot(slot_ref.index))?;
        let text = match slot_ref.part {
            SlotPart::Key => capture.key,
            SlotPart::Value => capture.value,
        };
        Ok(text.unwrap_or(""))
    }
}
