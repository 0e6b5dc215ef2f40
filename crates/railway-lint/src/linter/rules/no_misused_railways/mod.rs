//! Rule: no-misused-railways (L1002)
//!
//! Flags Results used where they are easily mistaken for something else:
//!
//! - as a boolean condition (`if (parse(input)) { ... }`),
//! - as a callback where the receiver expects a `void` return
//!   (arguments, variables, properties, return values, attributes and
//!   methods overriding a `void` parent method),
//! - spread into an object or array literal,
//! - as the return value of an array predicate (`items.filter(validate)`).
//!
//! Each family is toggled through [`MisusedRailwaysOptions`].

mod conditional;
mod heritage;
mod predicate;
mod spread;
mod void_return;

use crate::linter::config::MisusedRailwaysOptions;
use crate::linter::rule::*;
use crate::syntax::{NodeId, NodeKind, UnaryOp};

pub struct NoMisusedRailways {
    options: MisusedRailwaysOptions,
}

static META: RuleMeta = RuleMeta {
    name: "no-misused-railways",
    code: "L1002",
    description: "Disallow Results in places not designed to handle them",
    category: Category::Correctness,
    default_severity: Severity::Error,
};

impl NoMisusedRailways {
    pub fn new(options: MisusedRailwaysOptions) -> Self {
        Self { options }
    }
}

impl Default for NoMisusedRailways {
    fn default() -> Self {
        Self::new(MisusedRailwaysOptions::default())
    }
}

impl LintRule for NoMisusedRailways {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn check_statement(&self, stmt: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let Some(kind) = ctx.tree.kind(stmt) else {
            return vec![];
        };
        let void_return = self.options.checks_void_return;
        let mut diagnostics = vec![];

        match kind {
            NodeKind::If { test, .. }
            | NodeKind::While { test, .. }
            | NodeKind::DoWhile { test, .. }
            | NodeKind::For {
                test: Some(test), ..
            } if self.options.checks_conditionals => {
                diagnostics.extend(conditional::check(*test, true, ctx));
            }
            NodeKind::Return {
                argument: Some(argument),
            } if void_return.returns => {
                diagnostics.extend(void_return::check_return(*argument, ctx));
            }
            NodeKind::VariableDeclaration { declarators } if void_return.variables => {
                for &declarator in declarators {
                    diagnostics.extend(void_return::check_declarator(declarator, ctx));
                }
            }
            _ => {}
        }

        diagnostics
    }

    fn check_expression(&self, expr: NodeId, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let Some(kind) = ctx.tree.kind(expr) else {
            return vec![];
        };
        let void_return = self.options.checks_void_return;
        let mut diagnostics = vec![];

        if self.options.checks_conditionals {
            match kind {
                NodeKind::Conditional { test, .. } => {
                    diagnostics.extend(conditional::check(*test, true, ctx));
                }
                NodeKind::Logical { .. } => {
                    diagnostics.extend(conditional::check(expr, false, ctx));
                }
                NodeKind::Unary {
                    operator: UnaryOp::Not,
                    argument,
                } => {
                    diagnostics.extend(conditional::check(*argument, true, ctx));
                }
                _ => {}
            }
        }

        match kind {
            NodeKind::Call { .. } | NodeKind::New { .. } => {
                if void_return.arguments {
                    diagnostics.extend(void_return::check_arguments(expr, ctx));
                }
                if self.options.checks_predicates {
                    diagnostics.extend(predicate::check(expr, ctx));
                }
            }
            NodeKind::Assignment { left, right, .. } if void_return.variables => {
                diagnostics.extend(void_return::check_assignment(*left, *right, ctx));
            }
            NodeKind::ObjectLiteral { properties } => {
                if void_return.properties {
                    diagnostics.extend(void_return::check_properties(expr, properties, ctx));
                }
                if self.options.checks_spreads {
                    diagnostics.extend(spread::check(properties, ctx));
                }
            }
            NodeKind::ArrayLiteral { elements } if self.options.checks_spreads => {
                diagnostics.extend(spread::check(elements, ctx));
            }
            NodeKind::Element { attributes, .. } if void_return.attributes => {
                for &attribute in attributes {
                    diagnostics.extend(void_return::check_attribute(attribute, ctx));
                }
            }
            _ => {}
        }

        diagnostics
    }

    fn check_class_member(
        &self,
        decl: NodeId,
        member: NodeId,
        ctx: &LintContext<'_>,
    ) -> Vec<LintDiagnostic> {
        if !self.options.checks_void_return.inherited_methods {
            return vec![];
        }
        heritage::check(decl, member, ctx)
    }
}

fn report(kind: DiagnosticKind, node: NodeId, ctx: &LintContext<'_>) -> LintDiagnostic {
    tracing::trace!(file = ctx.file_path, node = %node, %kind, "misused result");
    LintDiagnostic::new(&META, kind, node, ctx)
}
