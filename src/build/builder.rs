//! The builder context a builder program is evaluated against.
//!
//! A [`ViewBuilder`] owns everything one compilation run mutates: the
//! identifier allocator, the collection stack, and the tree under
//! construction. Nothing is process-global, so independent runs can proceed
//! on different threads without coordination.
//!
//! Containers take a content callback that receives the same builder. Nodes
//! constructed inside the callback become the container's children; nodes
//! constructed at the top level become roots.
//!
//! ```ignore
//! let mut ui = ViewBuilder::new(IdStrategy::Sequential);
//! ui.vstack(|ui| {
//!     ui.text("Button Demo");
//!     ui.hstack(|ui| {
//!         ui.button("Text Button", "() => print('clicked')");
//!         ui.button("Green Button", "() => {}").background("green");
//!     });
//! })
//! .padding(None);
//! let tree = ui.finish()?;
//! ```

use tracing::{debug, error};

use super::collector::{CaptureError, CaptureToken, CollectionStack};
use crate::id::{IdAllocator, IdError, IdStrategy, Identifier};
use crate::view::handle::NodeMut;
use crate::view::node::{Action, Binding, DatePickerComponent, NodeId, ViewKind, ViewNode};
use crate::view::tree::ViewTree;

// ---------------------------------------------------------------------------
// BuildError
// ---------------------------------------------------------------------------

/// Structural failures that abort a compilation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("capture error: {0}")]
    Capture(#[from] CaptureError),
    #[error("identifier error: {0}")]
    Identifier(#[from] IdError),
}

// ---------------------------------------------------------------------------
// ViewBuilder
// ---------------------------------------------------------------------------

/// Construction context for one compilation run.
///
/// The first structural error faults the builder: later content callbacks
/// are skipped and [`finish`](Self::finish) returns that error.
#[derive(Debug)]
pub struct ViewBuilder {
    tree: ViewTree,
    stack: CollectionStack,
    ids: IdAllocator,
    fault: Option<BuildError>,
}

impl ViewBuilder {
    /// Create a builder with a fresh allocator using `strategy`.
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_allocator(IdAllocator::new(strategy))
    }

    /// Create a builder around an existing allocator.
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            tree: ViewTree::new(),
            stack: CollectionStack::new(),
            ids,
            fault: None,
        }
    }

    /// The first structural error hit so far, if any.
    pub fn fault(&self) -> Option<&BuildError> {
        self.fault.as_ref()
    }

    /// Current nesting depth of content callbacks.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The tree built so far.
    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    /// Finish construction and hand over the tree.
    pub fn finish(self) -> Result<ViewTree, BuildError> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        self.stack.finish()?;
        debug!(
            nodes = self.tree.len(),
            roots = self.tree.roots().len(),
            "build finished"
        );
        Ok(self.tree)
    }

    // -----------------------------------------------------------------------
    // Low-level construction
    // -----------------------------------------------------------------------

    /// Open a capture level for a custom container.
    ///
    /// Must be paired with [`end_capture`](Self::end_capture) before the
    /// enclosing content callback returns.
    pub fn begin_capture(&mut self) -> CaptureToken {
        self.stack.begin_capture()
    }

    /// Close the level opened by `token` and attach its direct children to
    /// `parent`.
    ///
    /// `parent` must exist, must not have children yet, and must not be one
    /// of the captured nodes or below one. An unbalanced close or an invalid
    /// parent faults the builder.
    pub fn end_capture(&mut self, token: CaptureToken, parent: NodeId) -> Result<(), BuildError> {
        let closed = self.stack.end_capture(token).map_err(BuildError::from);
        closed
            .and_then(|children| self.adopt(parent, children))
            .map_err(|err| {
                self.record(err.clone());
                err
            })
    }

    /// Construct a node without children.
    pub fn leaf(&mut self, kind: ViewKind) -> NodeMut<'_> {
        let id = self.construct(kind);
        NodeMut::new(&mut self.tree, id)
    }

    /// Construct a node whose children are whatever `content` constructs.
    pub fn container(
        &mut self,
        kind: ViewKind,
        content: impl FnOnce(&mut ViewBuilder),
    ) -> NodeMut<'_> {
        let id = self.construct(kind);
        if self.fault.is_none() {
            let token = self.stack.begin_capture();
            content(self);
            match self.stack.end_capture(token) {
                Ok(children) => self.tree.attach_children(id, children),
                Err(err) => self.record(err.into()),
            }
        }
        NodeMut::new(&mut self.tree, id)
    }

    fn construct(&mut self, kind: ViewKind) -> NodeId {
        let identifier = match self.ids.allocate() {
            Ok(identifier) => identifier,
            Err(err) => {
                self.record(err.into());
                // The tree is discarded once faulted, so the value is never seen.
                Identifier::new(String::new())
            }
        };
        let id = self.tree.insert(ViewNode::new(kind, identifier));
        if !self.stack.collect(id) {
            self.tree.push_root(id);
        }
        id
    }

    fn adopt(&mut self, parent: NodeId, children: Vec<NodeId>) -> Result<(), BuildError> {
        let tree = &self.tree;
        let owns_capture = children.contains(&parent)
            || tree.ancestors(parent).iter().any(|a| children.contains(a));
        if !tree.contains(parent) || !tree.children(parent).is_empty() || owns_capture {
            let owner = tree
                .get(parent)
                .map(|node| node.identifier.to_string())
                .unwrap_or_default();
            return Err(CaptureError::InvalidParent { owner }.into());
        }
        self.tree.attach_children(parent, children);
        Ok(())
    }

    fn record(&mut self, err: BuildError) {
        error!(error = %err, depth = self.stack.depth(), "build aborted");
        if self.fault.is_none() {
            self.fault = Some(err);
        }
    }

    // -----------------------------------------------------------------------
    // Containers
    // -----------------------------------------------------------------------

    pub fn vstack(&mut self, content: impl FnOnce(&mut ViewBuilder)) -> NodeMut<'_> {
        self.container(ViewKind::VStack, content)
    }

    pub fn hstack(&mut self, content: impl FnOnce(&mut ViewBuilder)) -> NodeMut<'_> {
        self.container(ViewKind::HStack, content)
    }

    pub fn list(&mut self, content: impl FnOnce(&mut ViewBuilder)) -> NodeMut<'_> {
        self.container(ViewKind::List, content)
    }

    pub fn form(&mut self, content: impl FnOnce(&mut ViewBuilder)) -> NodeMut<'_> {
        self.container(ViewKind::Form, content)
    }

    pub fn section(&mut self, content: impl FnOnce(&mut ViewBuilder)) -> NodeMut<'_> {
        self.container(ViewKind::Section { header: None }, content)
    }

    pub fn section_with_header(
        &mut self,
        header: impl Into<String>,
        content: impl FnOnce(&mut ViewBuilder),
    ) -> NodeMut<'_> {
        let header = Some(header.into());
        self.container(ViewKind::Section { header }, content)
    }

    pub fn disclosure_group(
        &mut self,
        title: impl Into<String>,
        content: impl FnOnce(&mut ViewBuilder),
    ) -> NodeMut<'_> {
        let kind = ViewKind::DisclosureGroup {
            title: title.into(),
            is_expanded: None,
        };
        self.container(kind, content)
    }

    /// A disclosure group whose expanded state is bound to host state.
    pub fn disclosure_group_bound(
        &mut self,
        title: impl Into<String>,
        is_expanded: impl Into<Binding>,
        content: impl FnOnce(&mut ViewBuilder),
    ) -> NodeMut<'_> {
        let kind = ViewKind::DisclosureGroup {
            title: title.into(),
            is_expanded: Some(is_expanded.into()),
        };
        self.container(kind, content)
    }

    /// Repeat `content` for every element of `data`, naming each one `item`.
    pub fn for_each(
        &mut self,
        data: impl Into<Binding>,
        item: impl Into<String>,
        content: impl FnOnce(&mut ViewBuilder),
    ) -> NodeMut<'_> {
        let kind = ViewKind::ForEach {
            data: data.into(),
            item: item.into(),
        };
        self.container(kind, content)
    }

    // -----------------------------------------------------------------------
    // Leaves and controls
    // -----------------------------------------------------------------------

    pub fn text(&mut self, content: impl Into<String>) -> NodeMut<'_> {
        self.leaf(ViewKind::Text {
            content: content.into(),
            font: None,
        })
    }

    /// A button with a text label that runs `action` when clicked.
    pub fn button(&mut self, label: impl Into<String>, action: impl Into<Action>) -> NodeMut<'_> {
        self.leaf(ViewKind::Button {
            label: Some(label.into()),
            action: Some(action.into()),
        })
    }

    /// A button with a text label and no action.
    pub fn button_without_action(&mut self, label: impl Into<String>) -> NodeMut<'_> {
        self.leaf(ViewKind::Button {
            label: Some(label.into()),
            action: None,
        })
    }

    /// A button whose label is built by `label`.
    pub fn button_with_label(
        &mut self,
        action: impl Into<Action>,
        label: impl FnOnce(&mut ViewBuilder),
    ) -> NodeMut<'_> {
        let kind = ViewKind::Button {
            label: None,
            action: Some(action.into()),
        };
        self.container(kind, label)
    }

    pub fn toggle(&mut self, title: impl Into<String>, is_on: impl Into<Binding>) -> NodeMut<'_> {
        self.leaf(ViewKind::Toggle {
            title: non_empty(title.into()),
            is_on: is_on.into(),
        })
    }

    pub fn text_field(
        &mut self,
        placeholder: impl Into<String>,
        text: impl Into<Binding>,
    ) -> NodeMut<'_> {
        self.leaf(ViewKind::TextField {
            placeholder: placeholder.into(),
            text: text.into(),
            secure: false,
        })
    }

    pub fn secure_field(
        &mut self,
        placeholder: impl Into<String>,
        text: impl Into<Binding>,
    ) -> NodeMut<'_> {
        self.leaf(ViewKind::TextField {
            placeholder: placeholder.into(),
            text: text.into(),
            secure: true,
        })
    }

    /// A date picker. An empty component list shows the date only.
    pub fn date_picker(
        &mut self,
        title: impl Into<String>,
        selection: impl Into<Binding>,
        components: &[DatePickerComponent],
    ) -> NodeMut<'_> {
        let components = if components.is_empty() {
            vec![DatePickerComponent::Date]
        } else {
            components.to_vec()
        };
        self.leaf(ViewKind::DatePicker {
            title: non_empty(title.into()),
            selection: selection.into(),
            components,
        })
    }

    pub fn color_picker(
        &mut self,
        title: impl Into<String>,
        selection: impl Into<Binding>,
        supports_opacity: bool,
    ) -> NodeMut<'_> {
        self.leaf(ViewKind::ColorPicker {
            title: non_empty(title.into()),
            selection: selection.into(),
            supports_opacity,
        })
    }
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
