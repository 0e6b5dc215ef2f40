//! Result-returning callables passed where a `void` return is expected

use crate::analysis::SignatureKind;
use crate::linter::rule::{DiagnosticKind, LintContext, LintDiagnostic};
use crate::syntax::{NodeId, NodeKind, PropertyKey, PropertyKind};
use crate::types::TypeId;

/// `value` returns a Result and `expected` only allows `void`
fn is_misplaced(expected: TypeId, value: NodeId, ctx: &LintContext<'_>) -> bool {
    let callables = ctx.callables();
    callables.is_void_returning(expected) && callables.returns_result(value)
}

/// Same test against the contextual type of `value`
fn is_misplaced_in_context(value: NodeId, ctx: &LintContext<'_>) -> bool {
    ctx.checker
        .contextual_type(value)
        .is_some_and(|expected| is_misplaced(expected, value, ctx))
}

/// Call and `new` arguments in positions that only accept `void` callbacks
pub(super) fn check_arguments(call: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
    let (callee, arguments, kind) = match ctx.tree.kind(call) {
        Some(NodeKind::Call {
            callee, arguments, ..
        }) => (*callee, Some(arguments.as_slice()), SignatureKind::Call),
        Some(NodeKind::New { callee, arguments }) => {
            (*callee, arguments.as_deref(), SignatureKind::Construct)
        }
        _ => return vec![],
    };

    let callables = ctx.callables();
    let callee_ty = ctx.checker.type_at(callee);
    let arg_count = arguments.map(<[NodeId]>::len);
    let positions = callables.void_function_arguments(callee_ty, kind, arg_count);
    if positions.is_empty() {
        return vec![];
    }

    arguments
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter(|(index, _)| positions.contains(index))
        .filter(|&(_, &argument)| callables.returns_result(argument))
        .map(|(_, &argument)| super::report(DiagnosticKind::VoidReturnArgument, argument, ctx))
        .collect()
}

/// `handler = loadUser` where `handler` is `() => void`
pub(super) fn check_assignment(
    left: NodeId,
    right: NodeId,
    ctx: &LintContext<'_>,
) -> Vec<LintDiagnostic> {
    if is_misplaced(ctx.checker.type_at(left), right, ctx) {
        vec![super::report(DiagnosticKind::VoidReturnVariable, right, ctx)]
    } else {
        vec![]
    }
}

/// `const handler: () => void = loadUser`
pub(super) fn check_declarator(declarator: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
    let Some(NodeKind::VariableDeclarator {
        id,
        init: Some(init),
    }) = ctx.tree.kind(declarator)
    else {
        return vec![];
    };
    check_assignment(*id, *init, ctx)
}

/// Property values, shorthand properties and methods of an object literal
pub(super) fn check_properties(
    object: NodeId,
    properties: &[NodeId],
    ctx: &LintContext<'_>,
) -> Vec<LintDiagnostic> {
    let mut diagnostics = vec![];
    for &property in properties {
        let Some(NodeKind::Property {
            key,
            value,
            property: kind,
        }) = ctx.tree.kind(property)
        else {
            continue;
        };
        let misplaced = match kind {
            PropertyKind::Init | PropertyKind::Shorthand => is_misplaced_in_context(*value, ctx),
            PropertyKind::Method => match key {
                PropertyKey::Name(name) => is_misplaced_method(object, name, *value, ctx),
                PropertyKey::Computed(_) => false,
            },
        };
        if misplaced {
            diagnostics.push(super::report(DiagnosticKind::VoidReturnProperty, *value, ctx));
        }
    }
    diagnostics
}

/// A method has no contextual type of its own; resolve it through the
/// object literal's contextual type.
fn is_misplaced_method(object: NodeId, name: &str, method: NodeId, ctx: &LintContext<'_>) -> bool {
    let callables = ctx.callables();
    if !callables.returns_result(method) {
        return false;
    }
    let Some(object_ty) = ctx.checker.contextual_type(object) else {
        return false;
    };
    let expected = ctx
        .results()
        .apparent_members(object_ty)
        .into_iter()
        .find_map(|member| ctx.checker.property(member, name));
    expected.is_some_and(|expected| callables.is_void_returning(expected))
}

/// `return loadUser` where the enclosing function's return is `() => void`
pub(super) fn check_return(argument: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
    if is_misplaced_in_context(argument, ctx) {
        vec![super::report(DiagnosticKind::VoidReturnReturnValue, argument, ctx)]
    } else {
        vec![]
    }
}

/// `<Button onClick={submit} />`; plain literal values are never callables
pub(super) fn check_attribute(attribute: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
    let Some(NodeKind::Attribute {
        value: Some(value), ..
    }) = ctx.tree.kind(attribute)
    else {
        return vec![];
    };
    if matches!(ctx.tree.kind(*value), Some(NodeKind::Literal { .. })) {
        return vec![];
    }
    if is_misplaced_in_context(*value, ctx) {
        vec![super::report(DiagnosticKind::VoidReturnAttribute, *value, ctx)]
    } else {
        vec![]
    }
}
