use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for serialized assertion reports.
pub const SCHEMA_REPORT_V1: &str = "dragee.report.v1";

/// How loudly a rule should complain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        }
    }
}

/// One failed expectation, blamed on a single dragee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleError {
    /// Set by the engine when the failure is aggregated into a report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    pub message: String,
    #[serde(rename = "entityName", alias = "drageeName")]
    pub dragee_name: String,
}

impl RuleError {
    pub fn new(message: impl Into<String>, dragee_name: impl Into<String>) -> Self {
        Self {
            rule_id: None,
            message: message.into(),
            dragee_name: dragee_name.into(),
        }
    }

    /// Attribute this error to `rule_id`.
    pub fn for_rule(self, rule_id: &str) -> Self {
        Self {
            rule_id: Some(rule_id.to_string()),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub rules_count: usize,
    /// `rules_count - errors_count`. Goes negative when rules report several
    /// failures each.
    pub pass_count: i64,
    pub errors_count: usize,
}

impl ReportStats {
    pub fn new(rules_count: usize, errors_count: usize) -> Self {
        Self {
            rules_count,
            pass_count: rules_count as i64 - errors_count as i64,
            errors_count,
        }
    }
}

/// Result of one asserter evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    pub pass: bool,
    pub namespace: String,
    pub errors: Vec<RuleError>,
    pub stats: ReportStats,
}

impl Report {
    /// Build a report from the aggregated failures. `pass` and `stats` are
    /// always derived from `errors`, so they never disagree.
    pub fn new(namespace: impl Into<String>, rules_count: usize, errors: Vec<RuleError>) -> Self {
        let stats = ReportStats::new(rules_count, errors.len());
        Self {
            pass: errors.is_empty(),
            namespace: namespace.into(),
            errors,
            stats,
        }
    }

    pub fn errors_for_rule<'a>(&'a self, rule_id: &'a str) -> impl Iterator<Item = &'a RuleError> {
        self.errors
            .iter()
            .filter(move |e| e.rule_id.as_deref() == Some(rule_id))
    }
}
