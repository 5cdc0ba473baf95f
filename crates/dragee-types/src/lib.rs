//! Stable DTOs and IDs shared across the dragee workspace.
//!
//! Contents:
//! - the dragee input model
//! - generated rule/graph identifiers
//! - the assertion report contract

#![forbid(unsafe_code)]

mod dragee;
pub mod ids;
mod report;

pub use dragee::{DependencyKind, DependsOn, Dragee};
pub use ids::generate_id;
pub use report::{Report, ReportStats, RuleError, SCHEMA_REPORT_V1, Severity};
