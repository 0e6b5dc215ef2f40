//! Railway linter
//!
//! Type-aware lint analysis over typed syntax trees. Finds Result values that
//! are dropped on the floor or used where a Result makes no sense.
//!
//! # Architecture
//!
//! - Each rule implements [`LintRule`] and checks individual tree nodes.
//! - The [`LintRunner`](runner::LintRunner) walks the tree once and dispatches
//!   to all enabled rules (single-pass visitor).
//! - [`Linter`] is the public entry point: create one, then call
//!   [`lint_program`](Linter::lint_program) or [`lint`](Linter::lint).
//!
//! # Example
//!
//! ```ignore
//! use railway_lint::{Linter, Program};
//!
//! let program = Program::from_json_str(&json)?;
//! let result = Linter::new().lint_program(&program, "src/app.ts");
//! for d in &result.diagnostics {
//!     println!("[{}] {}: {}", d.code, d.rule, d.message);
//! }
//! ```

pub mod config;
pub mod rule;
pub mod rules;
mod runner;

pub use config::{LintConfig, MisusedRailwaysOptions, VoidReturnChecks};
pub use rule::{
    Category, DiagnosticKind, LintContext, LintDiagnostic, LintRule, RuleMeta, Severity,
};

use tracing::debug;

use crate::program::Program;
use crate::syntax::SyntaxTree;
use crate::types::TypeChecker;
use runner::LintRunner;

/// Result of linting a single file.
#[derive(Debug)]
pub struct LintResult {
    /// All diagnostics emitted for this file.
    pub diagnostics: Vec<LintDiagnostic>,
    /// File path that was linted.
    pub file_path: String,
}

impl LintResult {
    /// Whether any diagnostic is reported as an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}

/// The railway linter. Holds a set of enabled rules and configuration.
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Linter {
    /// Create a linter with all default rules and default severities.
    pub fn new() -> Self {
        Self::with_config(LintConfig::new())
    }

    /// Create a linter with configuration overrides.
    pub fn with_config(config: LintConfig) -> Self {
        Self {
            rules: rules::all_rules(&config),
            config,
        }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lint a typed tree.
    ///
    /// `checker` answers type queries for the nodes of `tree`.
    pub fn lint(
        &self,
        tree: &SyntaxTree,
        checker: &dyn TypeChecker,
        file_path: &str,
    ) -> LintResult {
        // Rules set to `off` are not run at all.
        let active_rules: Vec<&dyn LintRule> = self
            .rules
            .iter()
            .map(|r| &**r)
            .filter(|r| !self.config.is_disabled(r.meta().name))
            .collect();

        let ctx = LintContext::new(tree, checker, file_path, &self.config.result_shape);
        let runner = LintRunner::new(&active_rules, ctx);
        let mut diagnostics = runner.run();

        // Apply severity overrides.
        for d in &mut diagnostics {
            d.severity = self.config.effective_severity(d.rule, d.severity);
        }

        debug!(
            file = file_path,
            rules = active_rules.len(),
            nodes = tree.len(),
            diagnostics = diagnostics.len(),
            "linted file"
        );

        LintResult {
            diagnostics,
            file_path: file_path.to_string(),
        }
    }

    /// Convenience: lint a [`Program`] using its own type table.
    pub fn lint_program(&self, program: &Program, file_path: &str) -> LintResult {
        self.lint(program.tree(), program, file_path)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
