//! Rendering: walk a finished view tree and emit markup plus behavior script.
//!
//! Rendering is a pure function of the tree. Environment values are resolved
//! on the way down with a frame stack; nothing is written back into nodes, so
//! the same tree renders to byte-identical output every time.

pub mod markup;
pub mod script;

pub use markup::{escape, Attribute, MarkupWriter};
pub use script::{write_script, HandlerBinding, HandlerEvent};

use tracing::debug;

use crate::env::Environment;
use crate::view::node::{DatePickerComponent, NodeId, Padding, ViewKind, ViewNode};
use crate::view::tree::ViewTree;

/// Padding rendered for `padding(None)`.
pub const DEFAULT_PADDING: u32 = 16;

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per nesting level in markup and per body line in script.
    pub indent: usize,
    /// Amount emitted for a default `padding` modifier.
    pub default_padding: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            default_padding: DEFAULT_PADDING,
        }
    }
}

// ---------------------------------------------------------------------------
// RenderOutput
// ---------------------------------------------------------------------------

/// The two artifacts of a render, plus the structured handler list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub markup: String,
    pub script: String,
    /// Handler registrations in document order.
    pub handlers: Vec<HandlerBinding>,
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Depth-first renderer over a [`ViewTree`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render every root of `tree` in construction order.
    pub fn render(&self, tree: &ViewTree) -> RenderOutput {
        let mut pass = Pass {
            tree,
            config: &self.config,
            env: Environment::new(),
            markup: MarkupWriter::new(self.config.indent),
            handlers: Vec::new(),
        };
        for &root in tree.roots() {
            pass.node(root, 0);
        }

        let handlers = pass.handlers;
        let script = write_script(&handlers, self.config.indent);
        debug!(
            nodes = tree.len(),
            handlers = handlers.len(),
            "render finished"
        );
        RenderOutput {
            markup: pass.markup.finish(),
            script,
            handlers,
        }
    }
}

/// State of one render traversal.
struct Pass<'a> {
    tree: &'a ViewTree,
    config: &'a RenderConfig,
    env: Environment<'a>,
    markup: MarkupWriter,
    handlers: Vec<HandlerBinding>,
}

impl<'a> Pass<'a> {
    fn node(&mut self, id: NodeId, depth: usize) {
        let tree = self.tree;
        let Some(node) = tree.get(id) else {
            return;
        };
        self.env.push(&node.environment);

        if let Some(action) = node.kind.action() {
            self.handlers.push(HandlerBinding::new(
                node.identifier.clone(),
                HandlerEvent::Click,
                action.clone(),
            ));
        }

        let attrs = self.attributes(node);
        let tag = node.kind.tag();
        let children = tree.children(id);
        if children.is_empty() {
            let body = node.kind.body_text().unwrap_or("");
            self.markup.element(depth, tag, &attrs, body);
        } else {
            self.markup.open(depth, tag, &attrs);
            for &child in children {
                self.node(child, depth + 1);
            }
            self.markup.close(depth, tag);
        }

        self.env.pop();
    }

    /// Attributes in fixed order: modifiers, class, kind-specific, id.
    fn attributes(&self, node: &ViewNode) -> Vec<Attribute> {
        let mut attrs = Vec::new();
        let modifiers = &node.modifiers;

        if let Some(padding) = modifiers.padding {
            let amount = match padding {
                Padding::Default => self.config.default_padding,
                Padding::Length(n) => n,
            };
            attrs.push(Attribute::new("padding", amount.to_string()));
        }
        if let Some(background) = &modifiers.background {
            attrs.push(Attribute::new("background", background.as_str()));
        }
        if let Some(style) = &modifiers.foreground_style {
            attrs.push(Attribute::new("foregroundStyle", style.as_str()));
        }

        let class = match node.kind.style_key() {
            Some(key) => format!("{} {}", node.kind.class(), self.env.style(key)),
            None => node.kind.class().to_owned(),
        };
        attrs.push(Attribute::new("class", class));

        match &node.kind {
            ViewKind::Text {
                font: Some(font), ..
            } => attrs.push(Attribute::new("font", font.as_str())),
            ViewKind::Section {
                header: Some(header),
            } => attrs.push(Attribute::new("header", header.as_str())),
            ViewKind::DisclosureGroup { title, is_expanded } => {
                attrs.push(Attribute::new("title", title.as_str()));
                if let Some(binding) = is_expanded {
                    attrs.push(Attribute::new("bind", binding.name()));
                }
            }
            ViewKind::ForEach { data, item } => {
                attrs.push(Attribute::new(
                    "for-each",
                    format!("{} in {}", item, data.name()),
                ));
            }
            ViewKind::Toggle { is_on, .. } => attrs.push(Attribute::new("bind", is_on.name())),
            ViewKind::TextField {
                placeholder,
                text,
                secure,
            } => {
                let input = if *secure { "password" } else { "text" };
                attrs.push(Attribute::new("type", input));
                attrs.push(Attribute::new("placeholder", placeholder.as_str()));
                attrs.push(Attribute::new("bind", text.name()));
            }
            ViewKind::DatePicker {
                selection,
                components,
                ..
            } => {
                let input = if components.contains(&DatePickerComponent::HourAndMinute) {
                    "datetime"
                } else {
                    "date"
                };
                attrs.push(Attribute::new("type", input));
                attrs.push(Attribute::new("bind", selection.name()));
            }
            ViewKind::ColorPicker {
                selection,
                supports_opacity,
                ..
            } => {
                attrs.push(Attribute::new("bind", selection.name()));
                attrs.push(Attribute::new(
                    "supports-opacity",
                    supports_opacity.to_string(),
                ));
            }
            _ => {}
        }

        if node.kind.action().is_some() {
            attrs.push(Attribute::new("id", node.identifier.as_str()));
        }
        attrs
    }
}

// ===========================================================================
// Tests
// ===========================================================================
