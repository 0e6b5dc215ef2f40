//! Lint configuration: per-rule severity overrides and rule options.
//!
//! ```toml
//! [lint.rules]
//! no-floating-railways = "warn"
//!
//! [lint.result-shape]
//! discriminant = "kind"
//!
//! [lint.no-misused-railways]
//! checksSpreads = false
//! checksVoidReturn = { arguments = false }
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use super::rule::Severity;
use crate::analysis::ResultShape;
use crate::error::ConfigError;

/// Configuration for the linter, usually the `[lint]` table of a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LintConfig {
    /// Per-rule severity overrides. Key = rule name (e.g. "no-floating-railways").
    #[serde(rename = "rules")]
    overrides: HashMap<String, Severity>,
    /// Shape used to recognise Result values.
    pub result_shape: ResultShape,
    /// Options of `no-misused-railways`.
    pub no_misused_railways: MisusedRailwaysOptions,
}

impl LintConfig {
    /// Create a new empty config (all rules use their default severity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document, reading its `[lint]` table when present.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut document: toml::Table = toml::from_str(source)?;
        let config: LintConfig = match document.remove("lint") {
            Some(lint) => lint.try_into()?,
            None => toml::Value::Table(document).try_into()?,
        };
        Ok(config)
    }

    /// Set the severity for a specific rule.
    pub fn set_severity(&mut self, rule_name: &str, severity: Severity) {
        self.overrides.insert(rule_name.to_string(), severity);
    }

    /// Get the effective severity for a rule, falling back to its default.
    pub fn effective_severity(&self, rule_name: &str, default: Severity) -> Severity {
        self.overrides.get(rule_name).copied().unwrap_or(default)
    }

    /// Check if a rule is explicitly disabled.
    pub fn is_disabled(&self, rule_name: &str) -> bool {
        self.overrides.get(rule_name) == Some(&Severity::Off)
    }
}

/// Which checks `no-misused-railways` runs. Everything defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MisusedRailwaysOptions {
    pub checks_conditionals: bool,
    pub checks_void_return: VoidReturnChecks,
    pub checks_spreads: bool,
    pub checks_predicates: bool,
}

impl Default for MisusedRailwaysOptions {
    fn default() -> Self {
        Self {
            checks_conditionals: true,
            checks_void_return: VoidReturnChecks::all(),
            checks_spreads: true,
            checks_predicates: true,
        }
    }
}

/// Positions where a Result-returning callable may not stand in for a
/// void-returning one.
///
/// Deserializes from `true`/`false` (every position) or from a table of
/// per-position flags, where omitted positions stay enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "VoidReturnSetting")]
pub struct VoidReturnChecks {
    pub arguments: bool,
    pub attributes: bool,
    pub properties: bool,
    pub returns: bool,
    pub variables: bool,
    pub inherited_methods: bool,
}

impl VoidReturnChecks {
    pub fn all() -> Self {
        Self::uniform(true)
    }

    pub fn none() -> Self {
        Self::uniform(false)
    }

    fn uniform(enabled: bool) -> Self {
        Self {
            arguments: enabled,
            attributes: enabled,
            properties: enabled,
            returns: enabled,
            variables: enabled,
            inherited_methods: enabled,
        }
    }

    pub fn any(&self) -> bool {
        self.arguments
            || self.attributes
            || self.properties
            || self.returns
            || self.variables
            || self.inherited_methods
    }
}

impl Default for VoidReturnChecks {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VoidReturnSetting {
    Enabled(bool),
    Positions(VoidReturnPositions),
}

#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct VoidReturnPositions {
    arguments: bool,
    attributes: bool,
    properties: bool,
    returns: bool,
    variables: bool,
    inherited_methods: bool,
}

impl Default for VoidReturnPositions {
    fn default() -> Self {
        Self {
            arguments: true,
            attributes: true,
            properties: true,
            returns: true,
            variables: true,
            inherited_methods: true,
        }
    }
}

impl From<VoidReturnSetting> for VoidReturnChecks {
    fn from(setting: VoidReturnSetting) -> Self {
        match setting {
            VoidReturnSetting::Enabled(enabled) => VoidReturnChecks::uniform(enabled),
            VoidReturnSetting::Positions(p) => VoidReturnChecks {
                arguments: p.arguments,
                attributes: p.attributes,
                properties: p.properties,
                returns: p.returns,
                variables: p.variables,
                inherited_methods: p.inherited_methods,
            },
        }
    }
}
