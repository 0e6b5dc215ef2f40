//! Results used as boolean conditions

use crate::linter::rule::{DiagnosticKind, LintContext, LintDiagnostic};
use crate::syntax::{LogicalOp, NodeId, NodeKind};

const VISITED: &str = "conditional";

/// Check `node` as a condition. `in_test` is set below an `if`/loop/ternary
/// test or a `!`, where both operands of a logical expression decide the
/// outcome.
pub(super) fn check(node: NodeId, in_test: bool, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
    let mut diagnostics = vec![];
    check_into(node, in_test, ctx, &mut diagnostics);
    diagnostics
}

fn check_into(node: NodeId, in_test: bool, ctx: &LintContext<'_>, out: &mut Vec<LintDiagnostic>) {
    if !ctx.first_visit(VISITED, node) {
        return;
    }

    if let Some(NodeKind::Logical {
        operator,
        left,
        right,
    }) = ctx.tree.kind(node)
    {
        // Outside a test, `a ?? b` only reads `a` for nullishness.
        if *operator != LogicalOp::NullishCoalescing || in_test {
            check_into(*left, in_test, ctx, out);
        }
        // Outside a test the right operand is a value, not a condition.
        if in_test {
            check_into(*right, in_test, ctx, out);
        }
        return;
    }

    if ctx.results().is_always_result(ctx.checker.type_at(node)) {
        out.push(super::report(DiagnosticKind::Conditional, node, ctx));
    }
}
