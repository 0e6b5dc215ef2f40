//! Integration tests for `no-floating-railways`

mod common;

use common::{lint, message_ids, Fixture};
use railway_lint::syntax::LogicalOp;
use railway_lint::{DiagnosticKind, Severity, TypeId};

// ============================================================================
// Flagged statements
// ============================================================================

#[test]
fn test_bare_result_call() {
    let mut fx = Fixture::new();
    let call = fx.success_call(1.0);
    let stmt = fx.b.expr_stmt(call);
    let stmt = fx.b.at_line(stmt, 3);
    let diags = lint(&fx.finish(vec![stmt]));

    assert_eq!(message_ids(&diags), vec!["floating"]);
    assert_eq!(diags[0].rule, "no-floating-railways");
    assert_eq!(diags[0].node, stmt);
    assert_eq!(diags[0].span.line, 3);
    assert_eq!(diags[0].severity, Severity::Error);
    assert_eq!(diags[0].message, "Results must be handled.");
}

#[test]
fn test_void_result_call_anchored_on_statement() {
    let mut fx = Fixture::new();
    let call = fx.success_call(1.0);
    let void = fx.b.void_expr(call);
    let stmt = fx.b.expr_stmt(void);
    let diags = lint(&fx.finish(vec![stmt]));

    assert_eq!(message_ids(&diags), vec!["floating"]);
    assert_eq!(diags[0].node, stmt);
}

#[test]
fn test_sequence_reports_once() {
    // (Result.success(1), Result.failure(2), 3);
    let mut fx = Fixture::new();
    let first = fx.success_call(1.0);
    let second = fx.failure_call(2.0);
    let three = fx.b.number(3.0);
    let seq = fx.b.sequence(vec![first, second, three]);
    let stmt = fx.b.expr_stmt(seq);
    let diags = lint(&fx.finish(vec![stmt]));

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::Floating);
}

#[test]
fn test_array_of_results() {
    // [1, 2, Result.success(1), 3];
    let mut fx = Fixture::new();
    let one = fx.b.number(1.0);
    let two = fx.b.number(2.0);
    let call = fx.success_call(1.0);
    let three = fx.b.number(3.0);
    let element = fx.b.types_mut().union(vec![TypeId::NUMBER, fx.result]);
    let array_ty = fx.b.types_mut().array(element);
    let array = fx.b.array(vec![one, two, call, three], array_ty);
    let stmt = fx.b.expr_stmt(array);
    let diags = lint(&fx.finish(vec![stmt]));

    assert_eq!(message_ids(&diags), vec!["floatingResultArray"]);
    assert_eq!(diags[0].node, stmt);
}

#[test]
fn test_tuple_of_results() {
    let mut fx = Fixture::new();
    let call = fx.success_call(1.0);
    let tuple_ty = fx.b.types_mut().tuple(vec![fx.result]);
    let tuple = fx.b.array(vec![call], tuple_ty);
    let stmt = fx.b.expr_stmt(tuple);

    assert_eq!(message_ids(&lint(&fx.finish(vec![stmt]))), vec!["floatingResultArray"]);
}

#[test]
fn test_identifier_and_member() {
    let mut fx = Fixture::new();
    let r = fx.b.ident("r", fx.result);
    let first = fx.b.expr_stmt(r);

    let holder = fx.b.ident("holder", TypeId::UNKNOWN);
    let member = fx.b.member(holder, "latest", fx.result);
    let second = fx.b.expr_stmt(member);

    let diags = lint(&fx.finish(vec![first, second]));
    assert_eq!(message_ids(&diags), vec!["floating", "floating"]);
}

#[test]
fn test_new_result() {
    let mut fx = Fixture::new();
    let ctor = fx.b.ident("Outcome", TypeId::UNKNOWN);
    let new = fx.b.new_expr(ctor, Some(vec![]), fx.result);
    let stmt = fx.b.expr_stmt(new);

    assert_eq!(message_ids(&lint(&fx.finish(vec![stmt]))), vec!["floating"]);
}

#[test]
fn test_ternary_branch() {
    // ready ? Result.success(1) : 0;
    let mut fx = Fixture::new();
    let ready = fx.b.ident("ready", TypeId::BOOLEAN);
    let call = fx.success_call(1.0);
    let zero = fx.b.number(0.0);
    let ty = fx.b.types_mut().union(vec![fx.result, TypeId::NUMBER]);
    let ternary = fx.b.conditional(ready, call, zero, ty);
    let stmt = fx.b.expr_stmt(ternary);

    assert_eq!(message_ids(&lint(&fx.finish(vec![stmt]))), vec!["floating"]);
}

#[test]
fn test_nullish_fallback() {
    // cached ?? Result.failure(0);
    let mut fx = Fixture::new();
    let maybe = fx.b.types_mut().union(vec![fx.result, TypeId::UNDEFINED]);
    let cached = fx.b.ident("cached", maybe);
    let call = fx.failure_call(0.0);
    let nullish = fx.b.logical(LogicalOp::NullishCoalescing, cached, call, fx.result);
    let stmt = fx.b.expr_stmt(nullish);

    assert_eq!(message_ids(&lint(&fx.finish(vec![stmt]))), vec!["floating"]);
}

#[test]
fn test_generic_optional_result_call() {
    // declare function get<T extends Result<number, string>>(): T | undefined;
    // get();
    let mut fx = Fixture::new();
    let t = fx.b.types_mut().type_parameter("T", Some(fx.result));
    let maybe = fx.b.types_mut().union(vec![t, TypeId::UNDEFINED]);
    let get_ty = fx.b.types_mut().function(vec![], maybe);
    let get = fx.b.ident("get", get_ty);
    let call = fx.b.call(get, vec![], maybe);
    let stmt = fx.b.expr_stmt(call);

    assert_eq!(message_ids(&lint(&fx.finish(vec![stmt]))), vec!["floating"]);
}

#[test]
fn test_generic_result_array() {
    // items; where items: (T | null)[] and T extends Result
    let mut fx = Fixture::new();
    let t = fx.b.types_mut().type_parameter("T", Some(fx.result));
    let maybe = fx.b.types_mut().union(vec![t, TypeId::NULL]);
    let array_ty = fx.b.types_mut().array(maybe);
    let items = fx.b.ident("items", array_ty);
    let stmt = fx.b.expr_stmt(items);

    assert_eq!(message_ids(&lint(&fx.finish(vec![stmt]))), vec!["floatingResultArray"]);
}

// ============================================================================
// Handled statements
// ============================================================================

#[test]
fn test_assignment_is_handled() {
    // x = Result.success(1);
    let mut fx = Fixture::new();
    let x = fx.b.ident("x", fx.result);
    let call = fx.success_call(1.0);
    let assign = fx.b.assign(x, call);
    let stmt = fx.b.expr_stmt(assign);

    assert!(lint(&fx.finish(vec![stmt])).is_empty());
}

#[test]
fn test_declaration_is_handled() {
    let mut fx = Fixture::new();
    let x = fx.b.ident("x", fx.result);
    let call = fx.success_call(1.0);
    let declarator = fx.b.declarator(x, Some(call));
    let decl = fx.b.var_decl(vec![declarator]);

    assert!(lint(&fx.finish(vec![decl])).is_empty());
}

#[test]
fn test_tag_comparison_is_handled() {
    // r.tag === 'success';
    let mut fx = Fixture::new();
    let r = fx.b.ident("r", fx.result);
    let tag_ty = fx.b.types_mut().string_literal("success");
    let tag = fx.b.member(r, "tag", tag_ty);
    let literal = fx.b.string("success");
    let cmp = fx.b.binary("===", tag, literal, TypeId::BOOLEAN);
    let stmt = fx.b.expr_stmt(cmp);

    assert!(lint(&fx.finish(vec![stmt])).is_empty());
}

#[test]
fn test_non_result_array_is_handled() {
    let mut fx = Fixture::new();
    let one = fx.b.number(1.0);
    let array_ty = fx.b.types_mut().array(TypeId::NUMBER);
    let array = fx.b.array(vec![one], array_ty);
    let stmt = fx.b.expr_stmt(array);

    assert!(lint(&fx.finish(vec![stmt])).is_empty());
}

#[test]
fn test_result_from_opaque_expression_is_not_flagged() {
    // Binary expressions are assumed to consume their operands.
    let mut fx = Fixture::new();
    let a = fx.b.ident("a", fx.result);
    let c = fx.b.ident("c", fx.result);
    let combined = fx.b.binary("+", a, c, fx.result);
    let stmt = fx.b.expr_stmt(combined);

    assert!(lint(&fx.finish(vec![stmt])).is_empty());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_repeated_runs_are_identical() {
    let mut fx = Fixture::new();
    let first = fx.success_call(1.0);
    let s1 = fx.b.expr_stmt(first);
    let r = fx.b.ident("r", fx.result);
    let body = fx.b.block(vec![]);
    let s2 = fx.b.if_stmt(r, body, None);
    let program = fx.finish(vec![s1, s2]);

    let linter = railway_lint::Linter::new();
    let run = || -> Vec<(DiagnosticKind, railway_lint::NodeId)> {
        linter
            .lint_program(&program, "test.ts")
            .diagnostics
            .into_iter()
            .map(|d| (d.kind, d.node))
            .collect()
    };
    let first_run = run();
    assert_eq!(first_run.len(), 2);
    assert_eq!(first_run, run());
}
