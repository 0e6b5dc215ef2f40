//! Rule: no-floating-railways (L1001)
//!
//! Flags expression statements that produce a Result nobody looks at:
//! `Result.success(1);`, `maybe ? a() : b();`, `void fetchUser();`, or an
//! array literal holding Results.
//!
//! **Excluded:** assignments (`x = compute()`) hand the Result to the
//! assignee. Expressions whose Result may be consumed internally (binary
//! operators, literals, functions) are not flagged.

use tracing::trace;

use crate::linter::rule::*;
use crate::syntax::{NodeId, NodeKind, UnaryOp};

pub struct NoFloatingRailways;

static META: RuleMeta = RuleMeta {
    name: "no-floating-railways",
    code: "L1001",
    description: "Require Result-like statements to be handled appropriately",
    category: Category::Correctness,
    default_severity: Severity::Error,
};

/// Why an expression statement leaves a Result unhandled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unhandled {
    Result,
    ResultArray,
}

impl LintRule for NoFloatingRailways {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn check_statement(&self, stmt: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let expression = match ctx.tree.kind(stmt) {
            Some(NodeKind::ExpressionStatement { expression }) => *expression,
            _ => return vec![],
        };

        let kind = match is_unhandled(expression, ctx) {
            Some(Unhandled::Result) => DiagnosticKind::Floating,
            Some(Unhandled::ResultArray) => DiagnosticKind::FloatingResultArray,
            None => return vec![],
        };
        trace!(file = ctx.file_path, node = %stmt, %kind, "floating result");

        let diagnostic = LintDiagnostic::new(&META, kind, stmt, ctx);
        let diagnostic = match diagnostic.kind {
            DiagnosticKind::FloatingResultArray => {
                diagnostic.with_note("Combine the Results into one before handling it")
            }
            _ => diagnostic.with_note("Assign the Result or branch on its tag"),
        };
        vec![diagnostic]
    }
}

fn is_unhandled(node: NodeId, ctx: &LintContext<'_>) -> Option<Unhandled> {
    let node = ctx.tree.skip_chain(node);
    let kind = ctx.tree.kind(node)?;

    // Checked before the type: these may discard a Result without being one.
    match kind {
        NodeKind::Assignment { .. } => return None,
        NodeKind::Sequence { expressions } => {
            return expressions.iter().find_map(|&e| is_unhandled(e, ctx));
        }
        NodeKind::Unary {
            operator: UnaryOp::Void,
            argument,
        } => return is_unhandled(*argument, ctx),
        _ => {}
    }

    let results = ctx.results();
    let ty = ctx.checker.type_at(node);
    if results.is_result_array_or_tuple(ty) {
        return Some(Unhandled::ResultArray);
    }
    if !results.is_sometimes_result(ty) {
        return None;
    }

    match kind {
        NodeKind::Call { .. } | NodeKind::New { .. } => Some(Unhandled::Result),
        NodeKind::Conditional {
            consequent,
            alternate,
            ..
        } => is_unhandled(*alternate, ctx).or_else(|| is_unhandled(*consequent, ctx)),
        NodeKind::Logical { left, right, .. } => {
            is_unhandled(*left, ctx).or_else(|| is_unhandled(*right, ctx))
        }
        NodeKind::Member { .. } | NodeKind::Identifier { .. } => Some(Unhandled::Result),
        _ => None,
    }
}
