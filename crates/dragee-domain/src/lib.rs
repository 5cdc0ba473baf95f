//! Pure rule evaluation (no IO).
//!
//! Input: declared rules and a dragee collection constructed elsewhere.
//! Output: a report with per-rule, per-dragee failures.

#![forbid(unsafe_code)]

pub mod dependencies;
pub mod error;
pub mod expect;
pub mod graph;
pub mod policy;
pub mod profile;
pub mod rule;

mod engine;
mod registry;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use dependencies::{DrageeDependency, direct_dependencies};
pub use engine::{
    Asserter, build_asserter, evaluate, evaluate_single_rule, generate_report_for_rule,
};
pub use error::{ProfileError, RegistryError};
pub use expect::{expect_dragee, expect_dragees, multiple_expect_dragees};
pub use graph::{DeclaredGraph, Graph, Grapher, build_grapher};
pub use policy::{RulePolicy, RulesPolicy};
pub use profile::{ProfileMatcher, ProfileTable, Profiler, generate_profiler_with};
pub use rule::{DeclaredRule, Rule, RuleHandler, RuleOutcome};
