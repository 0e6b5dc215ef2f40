//! Result-returning methods overriding `void` methods of a parent type

use rustc_hash::FxHashSet;

use crate::linter::rule::{DiagnosticKind, LintContext, LintDiagnostic};
use crate::syntax::{NodeId, NodeKind, PropertyKey};

/// Check `member` of the class or interface `decl` against every distinct
/// type in its extends/implements clauses.
pub(super) fn check(decl: NodeId, member: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
    let Some((heritage, _)) = ctx.tree.kind(decl).and_then(|k| k.class_like()) else {
        return vec![];
    };
    if heritage.is_empty() {
        return vec![];
    }
    let Some(NodeKind::ClassMember {
        key: PropertyKey::Name(name),
        is_static: false,
        ..
    }) = ctx.tree.kind(member)
    else {
        return vec![];
    };

    let callables = ctx.callables();
    if !callables.returns_result(member) {
        return vec![];
    }

    let mut seen = FxHashSet::default();
    let mut diagnostics = vec![];
    for &clause in heritage {
        let parent = ctx.checker.type_at(clause);
        if !seen.insert(parent) {
            continue;
        }
        let inherited = ctx
            .results()
            .apparent_members(parent)
            .into_iter()
            .find_map(|m| ctx.checker.property(m, name));
        if inherited.is_some_and(|ty| callables.is_void_returning(ty)) {
            let kind = DiagnosticKind::VoidReturnInheritedMethod {
                heritage_type_name: ctx.checker.type_to_string(parent),
            };
            diagnostics.push(super::report(kind, member, ctx));
        }
    }
    diagnostics
}
