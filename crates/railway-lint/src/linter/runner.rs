//! Lint runner: single-pass tree visitor that dispatches to all enabled rules.

use crate::syntax::{walk_node, NodeId, SyntaxTree, Visitor};

use super::rule::{LintContext, LintDiagnostic, LintRule};

/// Runs all enabled lint rules over a tree in a single pre-order traversal.
pub struct LintRunner<'a> {
    rules: &'a [&'a dyn LintRule],
    ctx: LintContext<'a>,
    diagnostics: Vec<LintDiagnostic>,
}

impl<'a> LintRunner<'a> {
    /// Create a new runner with the given rules and context.
    pub fn new(rules: &'a [&'a dyn LintRule], ctx: LintContext<'a>) -> Self {
        Self {
            rules,
            ctx,
            diagnostics: Vec::new(),
        }
    }

    /// Run all rules over the tree and return collected diagnostics.
    pub fn run(mut self) -> Vec<LintDiagnostic> {
        let tree = self.ctx.tree;
        let root = tree.root();

        // First, let rules inspect the program as a whole.
        for rule in self.rules {
            self.diagnostics.extend(rule.check_program(root, &self.ctx));
        }

        // Then walk the tree, dispatching statement/expression/class_member checks.
        self.visit_node(tree, root);

        self.diagnostics
    }
}

impl<'a> Visitor for LintRunner<'a> {
    fn visit_statement(&mut self, tree: &SyntaxTree, id: NodeId) {
        for rule in self.rules {
            self.diagnostics.extend(rule.check_statement(id, &self.ctx));
        }

        // Dispatch class members to rules before walking into them.
        if let Some((_, members)) = tree.kind(id).and_then(|k| k.class_like()) {
            for &member in members {
                for rule in self.rules {
                    self.diagnostics
                        .extend(rule.check_class_member(id, member, &self.ctx));
                }
            }
        }

        walk_node(self, tree, id);
    }

    fn visit_expression(&mut self, tree: &SyntaxTree, id: NodeId) {
        for rule in self.rules {
            self.diagnostics.extend(rule.check_expression(id, &self.ctx));
        }
        walk_node(self, tree, id);
    }
}
