//! Integration tests for `no-misused-railways`

mod common;

use common::{lint, message_ids, Fixture};
use railway_lint::syntax::LogicalOp;
use railway_lint::types::{ObjectType, Parameter};
use railway_lint::{DiagnosticKind, LintConfig, Linter, Program, TypeId};

fn lint_with(config: &str, program: &Program) -> Vec<&'static str> {
    let config = LintConfig::from_toml_str(config).unwrap();
    let diags = Linter::with_config(config)
        .lint_program(program, "test.ts")
        .diagnostics;
    diags.iter().map(|d| d.kind.message_id()).collect()
}

// ============================================================================
// Conditionals
// ============================================================================

#[test]
fn test_if_on_result_call() {
    // if (Result.success(1)) {}
    let mut fx = Fixture::new();
    let call = fx.success_call(1.0);
    let body = fx.b.block(vec![]);
    let stmt = fx.b.if_stmt(call, body, None);
    let diags = lint(&fx.finish(vec![stmt]));

    assert_eq!(message_ids(&diags), vec!["conditional"]);
    assert_eq!(diags[0].rule, "no-misused-railways");
    assert_eq!(diags[0].code, "L1002");
    assert_eq!(diags[0].node, call);
}

#[test]
fn test_if_on_result_object_literal() {
    // if ({ tag: 'success', success: 1 }) {}
    let mut fx = Fixture::new();
    let tag_ty = fx.b.types_mut().string_literal("success");
    let one_ty = fx.b.types_mut().number_literal(1.0);
    let obj_ty = fx.b.types_mut().object(
        ObjectType::new()
            .with_property("tag", tag_ty)
            .with_property("success", one_ty),
    );
    let tag = fx.b.string("success");
    let tag_prop = fx.b.property("tag", tag);
    let one = fx.b.number(1.0);
    let success_prop = fx.b.property("success", one);
    let obj = fx.b.object(vec![tag_prop, success_prop], obj_ty);
    let body = fx.b.block(vec![]);
    let stmt = fx.b.if_stmt(obj, body, None);

    assert_eq!(message_ids(&lint(&fx.finish(vec![stmt]))), vec!["conditional"]);
}

#[test]
fn test_loops_and_ternary() {
    let mut fx = Fixture::new();
    let a = fx.b.ident("a", fx.result);
    let body = fx.b.block(vec![]);
    let while_stmt = fx.b.while_stmt(a, body);

    let c = fx.b.ident("c", fx.result);
    let body = fx.b.block(vec![]);
    let do_while = fx.b.do_while(body, c);

    let d = fx.b.ident("d", fx.result);
    let body = fx.b.block(vec![]);
    let for_stmt = fx.b.for_stmt(None, Some(d), None, body);

    let e = fx.b.ident("e", fx.result);
    let one = fx.b.number(1.0);
    let two = fx.b.number(2.0);
    let ternary = fx.b.conditional(e, one, two, TypeId::NUMBER);
    let x = fx.b.ident("x", TypeId::NUMBER);
    let assign = fx.b.assign(x, ternary);
    let ternary_stmt = fx.b.expr_stmt(assign);

    let diags = lint(&fx.finish(vec![while_stmt, do_while, for_stmt, ternary_stmt]));
    let nodes: Vec<_> = diags.iter().map(|d| d.node).collect();
    assert_eq!(nodes, vec![a, c, d, e]);
}

#[test]
fn test_for_without_test_is_ignored() {
    let mut fx = Fixture::new();
    let body = fx.b.block(vec![]);
    let for_stmt = fx.b.for_stmt(None, None, None, body);
    assert!(lint(&fx.finish(vec![for_stmt])).is_empty());
}

#[test]
fn test_nested_logical_in_test() {
    // if (ok && (a || b)) {}
    let mut fx = Fixture::new();
    let ok = fx.b.ident("ok", TypeId::BOOLEAN);
    let a = fx.b.ident("a", fx.result);
    let c = fx.b.ident("c", fx.result);
    let or = fx.b.logical(LogicalOp::Or, a, c, fx.result);
    let and_ty = fx.b.types_mut().union(vec![TypeId::BOOLEAN, fx.result]);
    let and = fx.b.logical(LogicalOp::And, ok, or, and_ty);
    let body = fx.b.block(vec![]);
    let stmt = fx.b.if_stmt(and, body, None);

    let diags = lint(&fx.finish(vec![stmt]));
    let nodes: Vec<_> = diags.iter().map(|d| d.node).collect();
    assert_eq!(nodes, vec![a, c]);
}

#[test]
fn test_conditionals_disabled() {
    let mut fx = Fixture::new();
    let r = fx.b.ident("r", fx.result);
    let body = fx.b.block(vec![]);
    let stmt = fx.b.if_stmt(r, body, None);
    let program = fx.finish(vec![stmt]);

    assert!(
        lint_with("[lint.no-misused-railways]\nchecksConditionals = false\n", &program).is_empty()
    );
}

// ============================================================================
// Predicates
// ============================================================================

fn filter_call(
    fx: &mut Fixture,
    receiver_ty: TypeId,
) -> (railway_lint::NodeId, railway_lint::NodeId) {
    // [0, 1, 2].filter(validate)
    let zero = fx.b.number(0.0);
    let one = fx.b.number(1.0);
    let two = fx.b.number(2.0);
    let array = fx.b.array(vec![zero, one, two], receiver_ty);
    let filter = fx.b.member(array, "filter", TypeId::UNKNOWN);
    let validate = fx.b.ident("validate", fx.result_fn);
    let call = fx.b.call(filter, vec![validate], receiver_ty);
    (fx.b.expr_stmt(call), validate)
}

#[test]
fn test_filter_with_result_predicate() {
    let mut fx = Fixture::new();
    let numbers = fx.b.types_mut().array(TypeId::NUMBER);
    let (stmt, validate) = filter_call(&mut fx, numbers);
    let diags = lint(&fx.finish(vec![stmt]));

    assert_eq!(message_ids(&diags), vec!["predicate"]);
    assert_eq!(diags[0].node, validate);
}

#[test]
fn test_predicates_disabled() {
    let mut fx = Fixture::new();
    let numbers = fx.b.types_mut().array(TypeId::NUMBER);
    let (stmt, _) = filter_call(&mut fx, numbers);
    let program = fx.finish(vec![stmt]);

    assert!(
        lint_with("[lint.no-misused-railways]\nchecksPredicates = false\n", &program).is_empty()
    );
}

// ============================================================================
// Spreads
// ============================================================================

#[test]
fn test_spread_and_toggle() {
    let mut fx = Fixture::new();
    let r = fx.b.ident("r", fx.result);
    let spread = fx.b.spread(r);
    let obj_ty = fx.b.types_mut().object(ObjectType::new());
    let obj = fx.b.object(vec![spread], obj_ty);
    let x = fx.b.ident("x", obj_ty);
    let declarator = fx.b.declarator(x, Some(obj));
    let decl = fx.b.var_decl(vec![declarator]);
    let program = fx.finish(vec![decl]);

    let diags = lint(&program);
    assert_eq!(message_ids(&diags), vec!["spread"]);
    assert_eq!(diags[0].node, r);
    assert!(lint_with("[lint.no-misused-railways]\nchecksSpreads = false\n", &program).is_empty());
}

// ============================================================================
// Void returns
// ============================================================================

#[test]
fn test_rest_callbacks_flagged_per_argument() {
    // subscribe(name, ...listeners: (() => void)[])
    let mut fx = Fixture::new();
    let listeners = fx.b.types_mut().array(fx.void_fn);
    let subscribe_ty = fx.b.types_mut().function(
        vec![
            Parameter::new("name", TypeId::STRING),
            Parameter::rest("listeners", listeners),
        ],
        TypeId::VOID,
    );
    let subscribe = fx.b.ident("subscribe", subscribe_ty);
    let name = fx.b.string("save");
    let first = fx.b.ident("load", fx.result_fn);
    let second = fx.b.ident("log", fx.void_fn);
    let third = fx.b.ident("store", fx.result_fn);
    let call = fx
        .b
        .call(subscribe, vec![name, first, second, third], TypeId::VOID);
    let stmt = fx.b.expr_stmt(call);

    let diags = lint(&fx.finish(vec![stmt]));
    let nodes: Vec<_> = diags.iter().map(|d| d.node).collect();
    assert_eq!(message_ids(&diags), vec!["voidReturnArgument", "voidReturnArgument"]);
    assert_eq!(nodes, vec![first, third]);
}

#[test]
fn test_void_return_disabled_entirely() {
    let mut fx = Fixture::new();
    let listener = fx
        .b
        .types_mut()
        .function(vec![Parameter::new("cb", fx.void_fn)], TypeId::VOID);
    let on = fx.b.ident("on", listener);
    let load = fx.b.ident("load", fx.result_fn);
    let call = fx.b.call(on, vec![load], TypeId::VOID);
    let stmt = fx.b.expr_stmt(call);
    let program = fx.finish(vec![stmt]);

    assert_eq!(lint_with("", &program), vec!["voidReturnArgument"]);
    assert!(
        lint_with("[lint.no-misused-railways]\nchecksVoidReturn = false\n", &program).is_empty()
    );
    assert!(lint_with(
        "[lint.no-misused-railways]\nchecksVoidReturn = { arguments = false }\n",
        &program
    )
    .is_empty());
}

#[test]
fn test_generic_callback_parameter() {
    // declare function on<T extends () => void>(cb: T): void;
    // on(load);
    let mut fx = Fixture::new();
    let t = fx.b.types_mut().type_parameter("T", Some(fx.void_fn));
    let on_ty = fx
        .b
        .types_mut()
        .function(vec![Parameter::new("cb", t)], TypeId::VOID);
    let on = fx.b.ident("on", on_ty);
    let load = fx.b.ident("load", fx.result_fn);
    let call = fx.b.call(on, vec![load], TypeId::VOID);
    let stmt = fx.b.expr_stmt(call);

    let diags = lint(&fx.finish(vec![stmt]));
    assert_eq!(message_ids(&diags), vec!["voidReturnArgument"]);
    assert_eq!(diags[0].node, load);
}

#[test]
fn test_generic_callback_variable() {
    // let handler: T; handler = load;   (T extends () => void)
    let mut fx = Fixture::new();
    let t = fx.b.types_mut().type_parameter("T", Some(fx.void_fn));
    let handler = fx.b.ident("handler", t);
    let load = fx.b.ident("load", fx.result_fn);
    let assign = fx.b.assign(handler, load);
    let stmt = fx.b.expr_stmt(assign);

    let diags = lint(&fx.finish(vec![stmt]));
    assert_eq!(message_ids(&diags), vec!["voidReturnVariable"]);
    assert_eq!(diags[0].node, load);
}

#[test]
fn test_generic_result_spread_and_condition() {
    // T extends Result: ({ ...maybe }); if (r) {}
    let mut fx = Fixture::new();
    let t = fx.b.types_mut().type_parameter("T", Some(fx.result));
    let maybe_ty = fx.b.types_mut().union(vec![t, TypeId::UNDEFINED]);
    let maybe = fx.b.ident("maybe", maybe_ty);
    let spread = fx.b.spread(maybe);
    let obj_ty = fx.b.types_mut().object(ObjectType::new());
    let obj = fx.b.object(vec![spread], obj_ty);
    let spread_stmt = fx.b.expr_stmt(obj);

    let r = fx.b.ident("r", t);
    let body = fx.b.block(vec![]);
    let if_stmt = fx.b.if_stmt(r, body, None);

    let diags = lint(&fx.finish(vec![spread_stmt, if_stmt]));
    let nodes: Vec<_> = diags.iter().map(|d| d.node).collect();
    assert_eq!(message_ids(&diags), vec!["spread", "conditional"]);
    assert_eq!(nodes, vec![maybe, r]);
}

// ============================================================================
// Inherited methods
// ============================================================================

fn implementing_class(fx: &mut Fixture) -> railway_lint::NodeId {
    // interface Listener { handle(): void }
    // class Handler implements Listener { handle() { return Result.success(1) } }
    let listener = fx
        .b
        .types_mut()
        .object(ObjectType::named("Listener").with_property("handle", fx.void_fn));
    let clause = fx.b.ident("Listener", listener);
    let call = fx.success_call(1.0);
    let ret = fx.b.ret(Some(call));
    let body = fx.b.block(vec![ret]);
    let method = fx.b.function_expr(vec![], body, fx.result_fn);
    let member = fx.b.method_member("handle", method);
    fx.b.class_decl("Handler", vec![clause], vec![member], TypeId::UNKNOWN)
}

#[test]
fn test_inherited_method_names_interface() {
    let mut fx = Fixture::new();
    let class = implementing_class(&mut fx);
    let diags = lint(&fx.finish(vec![class]));

    assert_eq!(message_ids(&diags), vec!["voidReturnInheritedMethod"]);
    assert_eq!(
        diags[0].kind,
        DiagnosticKind::VoidReturnInheritedMethod {
            heritage_type_name: "Listener".to_string()
        }
    );
    assert_eq!(
        diags[0].message,
        "Result-returning method provided where a void return was expected \
         by extended/implemented type 'Listener'."
    );
}

#[test]
fn test_inherited_methods_disabled() {
    let mut fx = Fixture::new();
    let class = implementing_class(&mut fx);
    let program = fx.finish(vec![class]);

    assert!(lint_with(
        "[lint.no-misused-railways]\nchecksVoidReturn = { inheritedMethods = false }\n",
        &program
    )
    .is_empty());
}

// ============================================================================
// Rule selection
// ============================================================================

#[test]
fn test_rule_off_runs_nothing() {
    let mut fx = Fixture::new();
    let call = fx.success_call(1.0);
    let body = fx.b.block(vec![]);
    let if_stmt = fx.b.if_stmt(call, body, None);
    let stray = fx.failure_call(2.0);
    let stray_stmt = fx.b.expr_stmt(stray);
    let program = fx.finish(vec![if_stmt, stray_stmt]);

    assert_eq!(lint_with("", &program), vec!["conditional", "floating"]);
    assert_eq!(
        lint_with("[lint.rules]\nno-misused-railways = \"off\"\n", &program),
        vec!["floating"]
    );
}
