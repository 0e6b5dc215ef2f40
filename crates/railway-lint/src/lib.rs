//! railway-lint
//!
//! Type-aware lint rules for Result-like values (`{ tag: 'success', success }`
//! / `{ tag: 'failure', failure }`) over an already-typed syntax tree:
//!
//! - `no-floating-railways` flags Results produced by a statement and dropped.
//! - `no-misused-railways` flags Results used as conditions, spread into
//!   literals, passed as array predicates, or passed where a `void`-returning
//!   callback is expected.
//!
//! Parsing and type resolution happen upstream. The engine reads types through
//! the [`TypeChecker`] trait; [`Program`] is a self-contained implementation
//! that can be built with [`ProgramBuilder`] or loaded from JSON.

pub mod analysis;
pub mod error;
pub mod linter;
pub mod program;
pub mod syntax;
pub mod types;

pub use analysis::{CallableClassifier, ResultClassifier, ResultShape, SignatureKind};
pub use error::{ConfigError, ProgramError};
pub use linter::{
    DiagnosticKind, LintConfig, LintDiagnostic, LintResult, Linter, MisusedRailwaysOptions,
    Severity, VoidReturnChecks,
};
pub use program::Program;
pub use syntax::{NodeId, NodeKind, ProgramBuilder, Span, SyntaxTree};
pub use types::{TypeChecker, TypeId, TypeTable};
