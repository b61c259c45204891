//! Chained modifier calls on a node reference.
//!
//! Every constructor on [`ViewBuilder`](crate::build::ViewBuilder) returns a
//! [`NodeMut`], so a builder program reads like the source syntax:
//!
//! ```ignore
//! ui.button("Sign in", "signIn")
//!     .foreground_style("red")
//!     .background("yellow");
//! ```
//!
//! Modifiers only touch presentation and environment state; the children of
//! a node are never reachable from here.

use tracing::warn;

use super::node::{NodeId, Padding, ViewKind, ViewNode};
use super::tree::ViewTree;
use crate::env::EnvKey;
use crate::id::Identifier;

/// A mutable reference to one node of a [`ViewTree`].
pub struct NodeMut<'a> {
    tree: &'a mut ViewTree,
    id: NodeId,
}

impl<'a> NodeMut<'a> {
    pub(crate) fn new(tree: &'a mut ViewTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// The arena key of the referenced node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's unique identifier.
    pub fn identifier(&self) -> Option<&Identifier> {
        self.tree.get(self.id).map(|node| &node.identifier)
    }

    /// Set padding; `None` selects the default amount.
    pub fn padding(self, size: Option<u32>) -> Self {
        self.update(|node| node.modifiers.padding = Some(Padding::from(size)))
    }

    pub fn background(self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.update(|node| node.modifiers.background = Some(token))
    }

    pub fn foreground_style(self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.update(|node| node.modifiers.foreground_style = Some(token))
    }

    /// Set the font of a text node. Ignored for other kinds.
    pub fn font(self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.update(|node| match &mut node.kind {
            ViewKind::Text { font, .. } => *font = Some(token),
            other => warn!(kind = other.type_name(), "font applies to Text only"),
        })
    }

    /// Declare the button style for this node and its descendants.
    pub fn button_style(self, token: impl Into<String>) -> Self {
        self.environment(EnvKey::ButtonStyle, token)
    }

    /// Declare the date picker style for this node and its descendants.
    pub fn date_picker_style(self, token: impl Into<String>) -> Self {
        self.environment(EnvKey::DatePickerStyle, token)
    }

    /// Declare any environment value for this node and its descendants.
    pub fn environment(self, key: EnvKey, token: impl Into<String>) -> Self {
        let token = token.into();
        self.update(|node| node.environment.set(key, token))
    }

    fn update(self, f: impl FnOnce(&mut ViewNode)) -> Self {
        if let Some(node) = self.tree.get_mut(self.id) {
            f(node);
        }
        self
    }
}
