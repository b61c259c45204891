//! View tree: node model, slotmap-backed arena, chained modifiers, queries.

pub mod handle;
pub mod node;
pub mod query;
pub mod tree;

pub use handle::NodeMut;
pub use node::{
    Action, Binding, DatePickerComponent, Modifiers, NodeCategory, NodeId, Padding, ViewKind,
    ViewNode,
};
pub use tree::ViewTree;
