//! Lint rule trait and supporting types.
//!
//! Each lint rule implements `LintRule` and provides metadata (`RuleMeta`),
//! and one or more `check_*` methods that inspect tree nodes.

use std::cell::RefCell;
use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::{CallableClassifier, ResultClassifier, ResultShape};
use crate::syntax::{NodeId, Span, SyntaxTree};
use crate::types::TypeChecker;

/// Severity level for a lint diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Reports as a warning (does not affect exit code).
    Warn,
    /// Reports as an error (causes non-zero exit code).
    Error,
}

/// Category of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Likely bugs or logic errors.
    Correctness,
    /// Naming and formatting conventions.
    Style,
    /// Language idioms and recommended patterns.
    BestPractice,
}

/// Static metadata for a lint rule.
pub struct RuleMeta {
    /// Rule name, e.g. "no-floating-railways".
    pub name: &'static str,
    /// Lint code, e.g. "L1001".
    pub code: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Category.
    pub category: Category,
    /// Default severity when no config override is set.
    pub default_severity: Severity,
}

/// Context passed to each rule during lint checking.
pub struct LintContext<'a> {
    /// The typed tree being linted.
    pub tree: &'a SyntaxTree,
    /// Type queries for nodes of `tree`.
    pub checker: &'a dyn TypeChecker,
    /// Path of the file being linted.
    pub file_path: &'a str,
    /// Property names that identify a Result.
    pub shape: &'a ResultShape,
    checked: RefCell<FxHashSet<(&'static str, NodeId)>>,
}

impl<'a> LintContext<'a> {
    pub fn new(
        tree: &'a SyntaxTree,
        checker: &'a dyn TypeChecker,
        file_path: &'a str,
        shape: &'a ResultShape,
    ) -> Self {
        Self {
            tree,
            checker,
            file_path,
            shape,
            checked: RefCell::new(FxHashSet::default()),
        }
    }

    pub fn results(&self) -> ResultClassifier<'a> {
        ResultClassifier::new(self.checker, self.shape)
    }

    pub fn callables(&self) -> CallableClassifier<'a> {
        CallableClassifier::new(self.results())
    }

    /// Record that `key` looked at `node`; false if it already had.
    pub fn first_visit(&self, key: &'static str, node: NodeId) -> bool {
        self.checked.borrow_mut().insert((key, node))
    }
}

/// What a diagnostic reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "id", rename_all = "camelCase")]
pub enum DiagnosticKind {
    Floating,
    FloatingResultArray,
    Conditional,
    VoidReturnArgument,
    VoidReturnVariable,
    VoidReturnProperty,
    VoidReturnReturnValue,
    VoidReturnAttribute,
    Spread,
    Predicate,
    VoidReturnInheritedMethod {
        /// Display name of the extended or implemented type.
        #[serde(rename = "heritageTypeName")]
        heritage_type_name: String,
    },
}

impl DiagnosticKind {
    /// Stable camelCase message id.
    pub fn message_id(&self) -> &'static str {
        match self {
            DiagnosticKind::Floating => "floating",
            DiagnosticKind::FloatingResultArray => "floatingResultArray",
            DiagnosticKind::Conditional => "conditional",
            DiagnosticKind::VoidReturnArgument => "voidReturnArgument",
            DiagnosticKind::VoidReturnVariable => "voidReturnVariable",
            DiagnosticKind::VoidReturnProperty => "voidReturnProperty",
            DiagnosticKind::VoidReturnReturnValue => "voidReturnReturnValue",
            DiagnosticKind::VoidReturnAttribute => "voidReturnAttribute",
            DiagnosticKind::Spread => "spread",
            DiagnosticKind::Predicate => "predicate",
            DiagnosticKind::VoidReturnInheritedMethod { .. } => "voidReturnInheritedMethod",
        }
    }

    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::Floating => "Results must be handled.".to_string(),
            DiagnosticKind::FloatingResultArray => {
                "An array of Results must be handled. Combine them into a single Result first."
                    .to_string()
            }
            DiagnosticKind::Conditional => {
                "Expected non-Result value in a boolean conditional.".to_string()
            }
            DiagnosticKind::VoidReturnArgument => {
                "Result returned in function argument where a void return was expected."
                    .to_string()
            }
            DiagnosticKind::VoidReturnVariable => {
                "Result-returning function provided to variable where a void return was expected."
                    .to_string()
            }
            DiagnosticKind::VoidReturnProperty => {
                "Result-returning function provided to property where a void return was expected."
                    .to_string()
            }
            DiagnosticKind::VoidReturnReturnValue => {
                "Result-returning function provided to return value \
                 where a void return was expected."
                    .to_string()
            }
            DiagnosticKind::VoidReturnAttribute => {
                "Result-returning function provided to attribute where a void return was expected."
                    .to_string()
            }
            DiagnosticKind::Spread => "Expected a non-Result value to be spread.".to_string(),
            DiagnosticKind::Predicate => {
                "Expected a non-Result value to be returned from an array predicate.".to_string()
            }
            DiagnosticKind::VoidReturnInheritedMethod { heritage_type_name } => format!(
                "Result-returning method provided where a void return was expected \
                 by extended/implemented type '{heritage_type_name}'."
            ),
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message_id())
    }
}

/// A single lint diagnostic emitted by a rule.
#[derive(Debug, Clone, Serialize)]
pub struct LintDiagnostic {
    /// Rule name (e.g. "no-floating-railways").
    pub rule: &'static str,
    /// Lint code (e.g. "L1001").
    pub code: &'static str,
    pub kind: DiagnosticKind,
    /// Human-readable message.
    pub message: String,
    /// Node the diagnostic is anchored on.
    pub node: NodeId,
    /// Source location.
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// Additional notes.
    pub notes: Vec<String>,
}

impl LintDiagnostic {
    /// Diagnostic for `meta` at `node`, with the rule's default severity.
    pub fn new(meta: &RuleMeta, kind: DiagnosticKind, node: NodeId, ctx: &LintContext<'_>) -> Self {
        Self {
            rule: meta.name,
            code: meta.code,
            message: kind.message(),
            kind,
            node,
            span: ctx.tree.span(node),
            severity: meta.default_severity,
            notes: vec![],
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Trait that every lint rule must implement.
///
/// Rules receive individual tree nodes and return diagnostics.
/// Default implementations return no diagnostics, so rules only
/// need to override the methods relevant to them.
pub trait LintRule: Send + Sync {
    /// Static metadata for this rule.
    fn meta(&self) -> &RuleMeta;

    /// Check the program root.
    fn check_program(&self, _root: NodeId, _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        vec![]
    }

    /// Check a statement node.
    fn check_statement(&self, _stmt: NodeId, _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        vec![]
    }

    /// Check an expression node.
    fn check_expression(&self, _expr: NodeId, _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        vec![]
    }

    /// Check a member of a class or interface declaration.
    fn check_class_member(
        &self,
        _decl: NodeId,
        _member: NodeId,
        _ctx: &LintContext<'_>,
    ) -> Vec<LintDiagnostic> {
        vec![]
    }
}
