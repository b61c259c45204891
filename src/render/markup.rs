//! Markup writer: indented open/close tags with escaped attributes.
//!
//! Every element occupies whole lines. An element without children is
//! written on one line with its body inline; an element with children gets
//! its own opening and closing lines and its children one level deeper.

use std::borrow::Cow;

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// A single `name="value"` pair. The value is escaped when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
}

impl Attribute {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Escape `&`, `<`, `>` and `"` for use in a body or attribute value.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// MarkupWriter
// ---------------------------------------------------------------------------

/// Accumulates markup lines.
#[derive(Debug)]
pub struct MarkupWriter {
    out: String,
    indent: usize,
}

impl MarkupWriter {
    /// Create a writer indenting `indent` spaces per depth level.
    pub fn new(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    /// Write `<tag attrs>` on its own line.
    pub fn open(&mut self, depth: usize, tag: &str, attrs: &[Attribute]) {
        self.start_tag(depth, tag, attrs);
        self.out.push('\n');
    }

    /// Write `</tag>` on its own line.
    pub fn close(&mut self, depth: usize, tag: &str) {
        self.pad(depth);
        self.end_tag(tag);
    }

    /// Write `<tag attrs>body</tag>` on one line.
    pub fn element(&mut self, depth: usize, tag: &str, attrs: &[Attribute], body: &str) {
        self.start_tag(depth, tag, attrs);
        self.out.push_str(&escape(body));
        self.end_tag(tag);
    }

    /// The markup written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn start_tag(&mut self, depth: usize, tag: &str, attrs: &[Attribute]) {
        self.pad(depth);
        self.out.push('<');
        self.out.push_str(tag);
        for attr in attrs {
            self.out.push(' ');
            self.out.push_str(attr.name);
            self.out.push_str("=\"");
            self.out.push_str(&escape(&attr.value));
            self.out.push('"');
        }
        self.out.push('>');
    }

    fn end_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn pad(&mut self, depth: usize) {
        self.out.extend(std::iter::repeat(' ').take(depth * self.indent));
    }
}
