//! Pre-order traversal over a [`SyntaxTree`].

use super::{NodeCategory, NodeId, SyntaxTree};

/// Visitor over the typed tree
///
/// `visit_node` routes each node to the hook for its category; every hook
/// defaults to walking the node's children.
pub trait Visitor {
    fn visit_node(&mut self, tree: &SyntaxTree, id: NodeId) {
        let Some(node) = tree.get(id) else {
            return;
        };
        match node.kind.category() {
            NodeCategory::Statement => self.visit_statement(tree, id),
            NodeCategory::Expression => self.visit_expression(tree, id),
            NodeCategory::Other => walk_node(self, tree, id),
        }
    }

    fn visit_statement(&mut self, tree: &SyntaxTree, id: NodeId) {
        walk_node(self, tree, id);
    }

    fn visit_expression(&mut self, tree: &SyntaxTree, id: NodeId) {
        walk_node(self, tree, id);
    }
}

/// Visit every child of `id` in source order
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, id: NodeId) {
    let Some(node) = tree.get(id) else {
        return;
    };
    for child in node.kind.children() {
        visitor.visit_node(tree, child);
    }
}
