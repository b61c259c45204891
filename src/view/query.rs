//! Tree queries: by identifier, type name, or predicate.

use super::node::{NodeCategory, NodeId, ViewNode};
use super::tree::ViewTree;

impl ViewTree {
    /// Find the node carrying the given identifier.
    pub fn query_by_identifier(&self, identifier: &str) -> Option<NodeId> {
        self.iter_document()
            .find(|(_, node)| node.identifier.as_str() == identifier)
            .map(|(id, _)| id)
    }

    /// Find all nodes whose type name matches (e.g. "Button", "SecureField").
    pub fn query_by_type(&self, type_name: &str) -> Vec<NodeId> {
        self.query_all(|node| node.type_name() == type_name)
    }

    /// Find all nodes of a category.
    pub fn query_by_category(&self, category: NodeCategory) -> Vec<NodeId> {
        self.query_all(|node| node.kind.category() == category)
    }

    /// Find all nodes matching an arbitrary predicate, in document order.
    pub fn query_all(&self, predicate: impl Fn(&ViewNode) -> bool) -> Vec<NodeId> {
        self.iter_document()
            .filter(|(_, node)| predicate(node))
            .map(|(id, _)| id)
            .collect()
    }

    /// Iterate `(NodeId, &ViewNode)` pairs in document order.
    fn iter_document(&self) -> impl Iterator<Item = (NodeId, &ViewNode)> {
        self.walk_document()
            .into_iter()
            .filter_map(move |id| self.get(id).map(|node| (id, node)))
    }
}
