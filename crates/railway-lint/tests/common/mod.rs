//! Shared fixtures for integration tests
#![allow(dead_code)]

use railway_lint::syntax::ProgramBuilder;
use railway_lint::types::{ObjectType, Parameter};
use railway_lint::{LintDiagnostic, Linter, NodeId, Program, TypeId};

/// Builder pre-loaded with a `Result` namespace:
///
/// ```text
/// declare const Result: {
///     success(value: number): Result<number, string>;
///     failure(error: string): Result<number, string>;
/// }
/// ```
pub struct Fixture {
    pub b: ProgramBuilder,
    pub result: TypeId,
    pub namespace: TypeId,
    pub void_fn: TypeId,
    pub result_fn: TypeId,
}

impl Fixture {
    pub fn new() -> Self {
        let mut b = ProgramBuilder::new();
        let result = b.result_type(TypeId::NUMBER, TypeId::STRING);
        let success = b
            .types_mut()
            .function(vec![Parameter::new("value", TypeId::NUMBER)], result);
        let failure = b
            .types_mut()
            .function(vec![Parameter::new("error", TypeId::STRING)], result);
        let namespace = b.types_mut().object(
            ObjectType::named("ResultNamespace")
                .with_property("success", success)
                .with_property("failure", failure),
        );
        let void_fn = b.types_mut().function(vec![], TypeId::VOID);
        let result_fn = b.types_mut().function(vec![], result);
        Self {
            b,
            result,
            namespace,
            void_fn,
            result_fn,
        }
    }

    /// `Result.success(value)`
    pub fn success_call(&mut self, value: f64) -> NodeId {
        self.factory_call("success", value)
    }

    /// `Result.failure(value)`
    pub fn failure_call(&mut self, value: f64) -> NodeId {
        self.factory_call("failure", value)
    }

    fn factory_call(&mut self, method: &str, value: f64) -> NodeId {
        let namespace = self.b.ident("Result", self.namespace);
        let method_ty = self
            .b
            .types()
            .property(self.namespace, method)
            .unwrap_or(TypeId::UNKNOWN);
        let callee = self.b.member(namespace, method, method_ty);
        let arg = self.b.number(value);
        self.b.call(callee, vec![arg], self.result)
    }

    pub fn finish(self, body: Vec<NodeId>) -> Program {
        self.b.finish(body)
    }
}

pub fn lint(program: &Program) -> Vec<LintDiagnostic> {
    Linter::new().lint_program(program, "test.ts").diagnostics
}

pub fn message_ids(diags: &[LintDiagnostic]) -> Vec<&'static str> {
    diags.iter().map(|d| d.kind.message_id()).collect()
}
