//! Result-returning predicates passed to array methods

use crate::linter::rule::{DiagnosticKind, LintContext, LintDiagnostic};
use crate::syntax::{LiteralValue, NodeId, NodeKind, PropertyKey};

/// Array methods whose callback is read as a boolean
const PREDICATE_METHODS: &[&str] = &[
    "filter",
    "find",
    "findIndex",
    "findLast",
    "findLastIndex",
    "some",
    "every",
];

pub(super) fn check(call: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
    let Some(NodeKind::Call {
        callee, arguments, ..
    }) = ctx.tree.kind(call)
    else {
        return vec![];
    };
    let Some(&predicate) = arguments.first() else {
        return vec![];
    };
    if !is_array_predicate_call(*callee, ctx) {
        return vec![];
    }
    if ctx.callables().returns_result(predicate) {
        vec![super::report(DiagnosticKind::Predicate, predicate, ctx)]
    } else {
        vec![]
    }
}

fn is_array_predicate_call(callee: NodeId, ctx: &LintContext<'_>) -> bool {
    let callee = ctx.tree.skip_chain(callee);
    let Some(NodeKind::Member {
        object, property, ..
    }) = ctx.tree.kind(callee)
    else {
        return false;
    };
    let Some(name) = static_member_name(property, ctx) else {
        return false;
    };
    if !PREDICATE_METHODS.contains(&name) {
        return false;
    }

    ctx.results()
        .apparent_members(ctx.checker.type_at(*object))
        .into_iter()
        .any(|member| ctx.checker.is_array(member) || ctx.checker.is_tuple(member))
}

/// `a.name`, or `a["name"]` when the key is a string literal
fn static_member_name<'a>(property: &'a PropertyKey, ctx: &LintContext<'a>) -> Option<&'a str> {
    match property {
        PropertyKey::Name(name) => Some(name),
        PropertyKey::Computed(key) => match ctx.tree.kind(*key)? {
            NodeKind::Literal {
                value: LiteralValue::String(value),
            } => Some(value),
            _ => ctx.checker.string_literal_value(ctx.checker.type_at(*key)),
        },
    }
}
