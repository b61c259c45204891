//! Node types: NodeId, ViewNode, ViewKind, Modifiers.

use std::fmt;

use slotmap::new_key_type;

use crate::env::{EnvFrame, EnvKey};
use crate::id::Identifier;

new_key_type! {
    /// Arena key for a view node. Copy, lightweight (u64).
    pub struct NodeId;
}

// ---------------------------------------------------------------------------
// Leaf payloads
// ---------------------------------------------------------------------------

/// Name of a piece of host state a control reads and writes (`$username`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding(String);

impl Binding {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Binding {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Binding {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Script source of a captured action, invoked verbatim by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action(String);

impl Action {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn source(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Action {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Action {
    fn from(source: String) -> Self {
        Self(source)
    }
}

/// Which parts of a date a picker shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerComponent {
    HourAndMinute,
    Date,
}

impl DatePickerComponent {
    pub fn name(self) -> &'static str {
        match self {
            DatePickerComponent::HourAndMinute => "hourAndMinute",
            DatePickerComponent::Date => "date",
        }
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Padding amount set by the `padding` modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// `padding()` with no argument: the platform default.
    Default,
    Length(u32),
}

impl From<Option<u32>> for Padding {
    fn from(size: Option<u32>) -> Self {
        size.map_or(Padding::Default, Padding::Length)
    }
}

/// Post-construction presentation state shared by every node kind.
///
/// Each field holds the last value set; setting it again overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub padding: Option<Padding>,
    pub background: Option<String>,
    pub foreground_style: Option<String>,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        self.padding.is_none() && self.background.is_none() && self.foreground_style.is_none()
    }
}

// ---------------------------------------------------------------------------
// ViewKind
// ---------------------------------------------------------------------------

/// Coarse grouping of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Container,
    Text,
    Control,
    ForEach,
}

/// The concrete kind of a view node and its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewKind {
    VStack,
    HStack,
    List,
    Form,
    Section {
        header: Option<String>,
    },
    DisclosureGroup {
        title: String,
        is_expanded: Option<Binding>,
    },
    /// Repeats its children once per element of `data`, naming each `item`.
    ForEach {
        data: Binding,
        item: String,
    },
    Text {
        content: String,
        font: Option<String>,
    },
    /// A button labelled either by `label` or by its captured children.
    Button {
        label: Option<String>,
        action: Option<Action>,
    },
    Toggle {
        title: Option<String>,
        is_on: Binding,
    },
    TextField {
        placeholder: String,
        text: Binding,
        secure: bool,
    },
    DatePicker {
        title: Option<String>,
        selection: Binding,
        components: Vec<DatePickerComponent>,
    },
    ColorPicker {
        title: Option<String>,
        selection: Binding,
        supports_opacity: bool,
    },
}

impl ViewKind {
    /// The builder-facing type name (e.g. "VStack", "Button").
    pub fn type_name(&self) -> &'static str {
        match self {
            ViewKind::VStack => "VStack",
            ViewKind::HStack => "HStack",
            ViewKind::List => "List",
            ViewKind::Form => "Form",
            ViewKind::Section { .. } => "Section",
            ViewKind::DisclosureGroup { .. } => "DisclosureGroup",
            ViewKind::ForEach { .. } => "ForEach",
            ViewKind::Text { .. } => "Text",
            ViewKind::Button { .. } => "Button",
            ViewKind::Toggle { .. } => "Toggle",
            ViewKind::TextField { secure: false, .. } => "TextField",
            ViewKind::TextField { secure: true, .. } => "SecureField",
            ViewKind::DatePicker { .. } => "DatePicker",
            ViewKind::ColorPicker { .. } => "ColorPicker",
        }
    }

    pub fn category(&self) -> NodeCategory {
        match self {
            ViewKind::VStack
            | ViewKind::HStack
            | ViewKind::List
            | ViewKind::Form
            | ViewKind::Section { .. }
            | ViewKind::DisclosureGroup { .. } => NodeCategory::Container,
            ViewKind::ForEach { .. } => NodeCategory::ForEach,
            ViewKind::Text { .. } => NodeCategory::Text,
            ViewKind::Button { .. }
            | ViewKind::Toggle { .. }
            | ViewKind::TextField { .. }
            | ViewKind::DatePicker { .. }
            | ViewKind::ColorPicker { .. } => NodeCategory::Control,
        }
    }

    /// Markup tag name.
    pub fn tag(&self) -> &'static str {
        match self {
            ViewKind::VStack | ViewKind::HStack => "div",
            ViewKind::List => "ul",
            ViewKind::Form => "form",
            ViewKind::Section { .. } => "section",
            ViewKind::DisclosureGroup { .. } => "details",
            ViewKind::ForEach { .. } => "li",
            ViewKind::Text { .. } => "span",
            ViewKind::Button { .. } => "button",
            ViewKind::Toggle { .. }
            | ViewKind::TextField { .. }
            | ViewKind::DatePicker { .. }
            | ViewKind::ColorPicker { .. } => "label",
        }
    }

    /// Base CSS class, before any resolved style name.
    pub fn class(&self) -> &'static str {
        match self {
            ViewKind::VStack => "vstack",
            ViewKind::HStack => "hstack",
            ViewKind::List => "list",
            ViewKind::Form => "form",
            ViewKind::Section { .. } => "section",
            ViewKind::DisclosureGroup { .. } => "disclosure-group",
            ViewKind::ForEach { .. } => "for-each",
            ViewKind::Text { .. } => "text",
            ViewKind::Button { .. } => "button",
            ViewKind::Toggle { .. } => "toggle",
            ViewKind::TextField { secure: false, .. } => "text-field",
            ViewKind::TextField { secure: true, .. } => "text-field secure-field",
            ViewKind::DatePicker { .. } => "date-picker",
            ViewKind::ColorPicker { .. } => "color-picker",
        }
    }

    /// The environment key this kind reads its style from, if any.
    pub fn style_key(&self) -> Option<EnvKey> {
        match self {
            ViewKind::Button { .. } => Some(EnvKey::ButtonStyle),
            ViewKind::DatePicker { .. } => Some(EnvKey::DatePickerStyle),
            _ => None,
        }
    }

    /// Inline body text, used when the node has no children.
    pub fn body_text(&self) -> Option<&str> {
        match self {
            ViewKind::Text { content, .. } => Some(content.as_str()),
            ViewKind::Button { label, .. } => label.as_deref(),
            ViewKind::Toggle { title, .. }
            | ViewKind::DatePicker { title, .. }
            | ViewKind::ColorPicker { title, .. } => title.as_deref(),
            _ => None,
        }
    }

    /// The captured action, for controls that carry one.
    pub fn action(&self) -> Option<&Action> {
        match self {
            ViewKind::Button { action, .. } => action.as_ref(),
            _ => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.category() == NodeCategory::Control
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

// ---------------------------------------------------------------------------
// ViewNode
// ---------------------------------------------------------------------------

/// Data associated with a single view node. Children live in the tree.
#[derive(Debug, Clone)]
pub struct ViewNode {
    pub kind: ViewKind,
    pub identifier: Identifier,
    pub modifiers: Modifiers,
    /// Environment values this node declares for itself and its descendants.
    pub environment: EnvFrame,
}

impl ViewNode {
    pub fn new(kind: ViewKind, identifier: Identifier) -> Self {
        Self {
            kind,
            identifier,
            modifiers: Modifiers::default(),
            environment: EnvFrame::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}
