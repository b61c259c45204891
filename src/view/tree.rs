//! Tree storage: arena of view nodes with fixed parent/child links.

use slotmap::{SecondaryMap, SlotMap};

use super::handle::NodeMut;
use super::node::{NodeId, ViewNode};
use crate::env::{self, EnvKey};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The view tree of one compilation, backed by a slotmap arena.
///
/// Nodes are inserted detached. A container's children are attached exactly
/// once, when its content callback has finished; after that the child list
/// never changes. Nodes constructed outside any container are roots.
#[derive(Debug, Default)]
pub struct ViewTree {
    pub(crate) nodes: SlotMap<NodeId, ViewNode>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    roots: Vec<NodeId>,
}

impl ViewTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a detached node.
    pub(crate) fn insert(&mut self, node: ViewNode) -> NodeId {
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        id
    }

    /// Record `id` as a top-level node.
    pub(crate) fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    /// Attach the finished child list of `parent`.
    ///
    /// Each child must be detached; a node never has two parents.
    pub(crate) fn attach_children(&mut self, parent: NodeId, kids: Vec<NodeId>) {
        debug_assert!(self.nodes.contains_key(parent), "parent node does not exist");
        for &child in &kids {
            debug_assert!(
                !self.parent.contains_key(child),
                "node already attached to a parent"
            );
            self.parent.insert(child, parent);
        }
        if let Some(slot) = self.children.get_mut(parent) {
            debug_assert!(slot.is_empty(), "children already attached");
            *slot = kids;
        }
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no children
    /// or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to its root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&ViewNode> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut ViewNode> {
        self.nodes.get_mut(id)
    }

    /// Chained modifier access to an existing node.
    ///
    /// This is the only way to change a node after construction. Kind and
    /// identifier stay fixed:
    ///
    /// ```compile_fail
    /// let mut tree = swiftweb::ViewTree::new();
    /// let node = tree.get_mut(swiftweb::NodeId::default());
    /// ```
    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_>> {
        if self.nodes.contains_key(id) {
            Some(NodeMut::new(self, id))
        } else {
            None
        }
    }

    /// Top-level nodes in construction order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The first top-level node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Document order over every root.
    pub fn walk_document(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|&root| self.walk_depth_first(root))
            .collect()
    }

    /// Resolve `key` for `id` by walking from the node up to its root.
    ///
    /// The node's own declaration counts as the nearest one.
    pub fn resolve_environment(&self, id: NodeId, key: EnvKey) -> &str {
        let mut path: Vec<NodeId> = self.ancestors(id);
        path.reverse();
        path.push(id);
        env::resolve(
            key,
            path.iter()
                .filter_map(|&node| self.nodes.get(node))
                .map(|node| &node.environment)
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvFrame;
    use crate::id::Identifier;
    use crate::view::node::ViewKind;

    fn node(kind: ViewKind, id: &str) -> ViewNode {
        ViewNode::new(kind, Identifier::new(id))
    }

    fn text(id: &str) -> ViewNode {
        node(
            ViewKind::Text {
                content: id.into(),
                font: None,
            },
            id,
        )
    }

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (ViewTree, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = ViewTree::new();
        let root = tree.insert(node(ViewKind::VStack, "root"));
        let a = tree.insert(node(ViewKind::HStack, "a"));
        let b = tree.insert(text("b"));
        let c = tree.insert(text("c"));
        let d = tree.insert(text("d"));
        tree.attach_children(a, vec![c, d]);
        tree.attach_children(root, vec![a, b]);
        tree.push_root(root);
        (tree, root, a, b, c, d)
    }

    #[test]
    fn parent_relationship() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn children_list() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.children(a), &[c, d]);
        assert!(tree.children(c).is_empty());
    }

    #[test]
    fn ancestors() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.ancestors(c), vec![a, root]);
        assert_eq!(tree.ancestors(a), vec![root]);
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn roots_and_len() {
        let (tree, root, ..) = build_tree();
        assert_eq!(tree.roots(), &[root]);
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
        assert!(ViewTree::new().root().is_none());
    }

    #[test]
    fn get_and_get_mut() {
        let (mut tree, _root, a, ..) = build_tree();
        assert_eq!(tree.get(a).unwrap().type_name(), "HStack");
        tree.get_mut(a).unwrap().modifiers.background = Some("blue".into());
        assert_eq!(
            tree.get(a).unwrap().modifiers.background.as_deref(),
            Some("blue")
        );
    }

    #[test]
    fn walk_depth_first() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(tree.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn walk_document_covers_all_roots() {
        let (mut tree, root, a, b, c, d) = build_tree();
        let extra = tree.insert(text("e"));
        tree.push_root(extra);
        assert_eq!(tree.walk_document(), vec![root, a, c, d, b, extra]);
    }

    #[test]
    fn resolve_environment_walks_ancestors() {
        let (mut tree, root, a, _b, c, d) = build_tree();
        tree.get_mut(root).unwrap().environment =
            EnvFrame::new().with(EnvKey::ButtonStyle, "plain");
        tree.get_mut(d).unwrap().environment =
            EnvFrame::new().with(EnvKey::ButtonStyle, "custom");

        assert_eq!(tree.resolve_environment(a, EnvKey::ButtonStyle), "plain");
        assert_eq!(tree.resolve_environment(c, EnvKey::ButtonStyle), "plain");
        assert_eq!(tree.resolve_environment(d, EnvKey::ButtonStyle), "custom");
        assert_eq!(
            tree.resolve_environment(c, EnvKey::DatePickerStyle),
            "default"
        );
    }

    #[test]
    fn node_mut_missing_node() {
        let (mut tree, _root, _a, _b, c, _d) = build_tree();
        assert!(tree.node_mut(c).is_some());
        assert!(ViewTree::new().node_mut(c).is_none());
    }
}
