//! Results spread into object or array literals

use crate::linter::rule::{DiagnosticKind, LintContext, LintDiagnostic};
use crate::syntax::{NodeId, NodeKind};

/// Check the spread entries among `entries` of an object or array literal
pub(super) fn check(entries: &[NodeId], ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
    let results = ctx.results();
    entries
        .iter()
        .filter_map(|&entry| match ctx.tree.kind(entry) {
            Some(NodeKind::Spread { argument }) => Some(*argument),
            _ => None,
        })
        .filter(|&argument| results.is_sometimes_result(ctx.checker.type_at(argument)))
        .map(|argument| super::report(DiagnosticKind::Spread, argument, ctx))
        .collect()
}
