//! Rule registry: all available lint rules.

pub mod no_floating_railways;
pub mod no_misused_railways;

use super::config::LintConfig;
use super::rule::LintRule;

/// Returns all available lint rules, configured from `config`.
pub fn all_rules(config: &LintConfig) -> Vec<Box<dyn LintRule>> {
    vec![
        // Correctness
        Box::new(no_floating_railways::NoFloatingRailways),
        Box::new(no_misused_railways::NoMisusedRailways::new(
            config.no_misused_railways,
        )),
    ]
}
