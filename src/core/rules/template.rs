//! Message templates
//!
//! Templates are plain text with `{N.key}` and `{N.value}` placeholders.
//! They are parsed once when the catalog is built and rendered against the
//! captures of the winning clause.
//!
//! Braces around text that does not start with a digit are literal. A brace
//! group starting with a digit must be a well-formed placeholder, otherwise
//! parsing fails. An unresolved placeholder fails the whole render; partial
//! text is never returned.

use super::capture::{CaptureSlots, SlotRef, UnboundSlot};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(SlotRef),
}

/// A parsed message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

/// Brace group that reads like a placeholder but is not one, e.g. `{0}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedPlaceholder(pub String);

/// Why a one-shot [`render`] failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template did not parse
    Malformed(MalformedPlaceholder),
    /// A placeholder names a slot that was never captured
    Unbound(UnboundSlot),
}

impl From<MalformedPlaceholder> for TemplateError {
    fn from(err: MalformedPlaceholder) -> Self {
        Self::Malformed(err)
    }
}

impl From<UnboundSlot> for TemplateError {
    fn from(err: UnboundSlot) -> Self {
        Self::Unbound(err)
    }
}

/// Try to read a placeholder body such as `2.value` (without braces)
fn parse_placeholder(body: &str) -> Option<SlotRef> {
    let (index, part) = body.split_once('.')?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index.parse().ok()?;
    match part {
        "key" => Some(SlotRef::key(index)),
        "value" => Some(SlotRef::value(index)),
        _ => None,
    }
}

/// Whether a brace body was meant as a placeholder
fn looks_like_placeholder(body: &str) -> bool {
    body.trim_start().starts_with(|c: char| c.is_ascii_digit())
}

impl Template {
    /// Parse a template
    pub fn parse(source: &str) -> Result<Self, MalformedPlaceholder> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            let (before, after_open) = rest.split_at(open);
            text.push_str(before);
            let inner = &after_open[1..];

            match inner.find('}') {
                Some(close) => {
                    let body = &inner[..close];
                    if let Some(slot_ref) = parse_placeholder(body) {
                        if !text.is_empty() {
                            segments.push(Segment::Text(std::mem::take(&mut text)));
                        }
                        segments.push(Segment::Slot(slot_ref));
                        rest = &inner[close + 1..];
                        continue;
                    }
                    if looks_like_placeholder(body) {
                        return Err(MalformedPlaceholder(after_open[..close + 2].to_string()));
                    }
                },
                None if looks_like_placeholder(inner) => {
                    return Err(MalformedPlaceholder(after_open.to_string()));
                },
                None => {},
            }

            text.push('{');
            rest = inner;
        }

        text.push_str(rest);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Original template text
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholders, in order of appearance
    pub fn placeholders(&self) -> impl Iterator<Item = SlotRef> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(r) => Some(*r),
            Segment::Text(_) => None,
        })
    }

    /// Distinct slot indices referenced
    #[must_use]
    pub fn slots(&self) -> Vec<usize> {
        let mut slots: Vec<usize> = self.placeholders().map(|r| r.index).collect();
        slots.sort_unstable();
        slots.dedup();
        slots
    }

    /// Substitute captures into the template
    pub fn render(&self, captures: &CaptureSlots<'_>) -> Result<String, UnboundSlot> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(t) => out.push_str(t),
                Segment::Slot(r) => out.push_str(captures.uncapture(*r)?),
            }
        }
        Ok(out)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse and render in one go
pub fn render(template: &str, captures: &CaptureSlots<'_>) -> Result<String, TemplateError> {
    Ok(Template::parse(template)?.render(captures)?)
}
