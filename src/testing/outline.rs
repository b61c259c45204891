//! Outline rendering helpers.
//!
//! Converts a [`ViewTree`] into an indented plain-text listing suitable for
//! snapshot testing and shape assertions.

use crate::build::{BuildError, ViewBuilder};
use crate::compile::{CompileConfig, Compilation, Compiler};
use crate::view::node::NodeId;
use crate::view::tree::ViewTree;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the shape of `tree` as one line per node.
///
/// Each line holds the node's type name, followed by its body text in quotes
/// when it has one. Children are indented two spaces below their parent.
/// Lines are separated by `'\n'`; the final line has no trailing newline.
///
/// # Examples
///
/// ```ignore
/// let tree = Compiler::default().build(|ui| {
///     ui.vstack(|ui| {
///         ui.text("Hello");
///     });
/// })?;
/// assert_eq!(outline(&tree), "VStack\n  Text \"Hello\"");
/// ```
pub fn outline(tree: &ViewTree) -> String {
    let mut lines = Vec::with_capacity(tree.len());
    for &root in tree.roots() {
        outline_node(tree, root, 0, &mut lines);
    }
    lines.join("\n")
}

/// Compile `program` with sequential identifiers (`a0`, `a1`, ...).
pub fn compile_sequential(
    program: impl FnOnce(&mut ViewBuilder),
) -> Result<Compilation, BuildError> {
    Compiler::new(CompileConfig::new().sequential_ids()).compile(program)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn outline_node(tree: &ViewTree, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let mut line = format!("{:width$}{}", "", node.type_name(), width = depth * 2);
    if let Some(body) = node.kind.body_text() {
        line.push_str(&format!(" {body:?}"));
    }
    lines.push(line);
    for &child in tree.children(id) {
        outline_node(tree, child, depth + 1, lines);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_of_empty_tree() {
        assert_eq!(outline(&ViewTree::new()), "");
    }

    #[test]
    fn outline_indents_children() {
        let compiled = compile_sequential(|ui| {
            ui.vstack(|ui| {
                ui.text("Title");
                ui.hstack(|ui| {
                    ui.button("Go", "go");
                    ui.secure_field("Password", "password");
                });
            });
        })
        .unwrap();
        assert_eq!(
            outline(&compiled.tree),
            "VStack\n  Text \"Title\"\n  HStack\n    Button \"Go\"\n    SecureField"
        );
    }

    #[test]
    fn outline_lists_every_root() {
        let compiled = compile_sequential(|ui| {
            ui.text("one");
            ui.toggle("two", "flag");
        })
        .unwrap();
        assert_eq!(outline(&compiled.tree), "Text \"one\"\nToggle \"two\"");
    }

    #[test]
    fn compile_sequential_starts_at_zero() {
        let compiled = compile_sequential(|ui| {
            ui.button("x", "run");
        })
        .unwrap();
        assert_eq!(compiled.output.handlers[0].handler_name(), "a0OnClick");
    }
}
