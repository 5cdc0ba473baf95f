//! Shared test utilities for dragee rule packages.
//!
//! A rule package ships JSON fixtures (a dragee collection plus the expected
//! outcome) and checks each of its rules against them through
//! [`AsserterHarness`]. This lives in its own crate because rule packages
//! depend on it from their own `tests/`, not behind `#[cfg(test)]`.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use dragee_domain::{Asserter, evaluate_single_rule};
use dragee_types::{Dragee, Report};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dragee collection and what a rule is expected to say about it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleFixture {
    pub dragees: Vec<Dragee>,
    pub result: ExpectedResult,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectedResult {
    pub pass: bool,

    /// Either plain messages or partial error objects, e.g.
    /// `{"entityName": "Order", "message": "..."}`.
    #[serde(default)]
    pub errors: Vec<Value>,
}

pub fn parse_fixture(text: &str) -> anyhow::Result<RuleFixture> {
    serde_json::from_str(text).context("parse rule fixture json")
}

pub fn load_fixture(path: impl AsRef<Utf8Path>) -> anyhow::Result<RuleFixture> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).with_context(|| format!("read fixture {path}"))?;
    parse_fixture(&text).with_context(|| format!("load fixture {path}"))
}

/// Loader resolving fixture names against `base`. Panics on unreadable
/// fixtures: a broken fixture is a broken test.
pub fn fixture_loader(base: impl Into<Utf8PathBuf>) -> impl Fn(&str) -> RuleFixture {
    let base = base.into();
    move |name| match load_fixture(base.join(name)) {
        Ok(fixture) => fixture,
        Err(err) => panic!("{err:#}"),
    }
}

/// Whether `report` holds an error matching `expected`.
///
/// A string matches an error with that exact message. An object matches an
/// error whose serialized form contains every key/value of the object.
pub fn report_contains_error(report: &Report, expected: &Value) -> bool {
    match expected {
        Value::String(message) => report.errors.iter().any(|e| &e.message == message),
        Value::Object(fields) => report.errors.iter().any(|e| {
            let Ok(Value::Object(actual)) = serde_json::to_value(e) else {
                return false;
            };
            fields.iter().all(|(k, v)| actual.get(k) == Some(v))
        }),
        _ => false,
    }
}

/// Evaluate `rule_id` on the fixture and expect no errors.
pub fn check_rule_passed(
    asserter: &Asserter,
    fixture: &RuleFixture,
    rule_id: &str,
) -> anyhow::Result<Report> {
    let report = evaluate_single_rule(asserter, &fixture.dragees, rule_id)?;

    if report.pass != fixture.result.pass {
        anyhow::bail!(
            "rule {rule_id}: expected pass={}, got pass={}",
            fixture.result.pass,
            report.pass
        );
    }
    if !report.errors.is_empty() {
        anyhow::bail!(
            "rule {rule_id}: expected no errors, got {}",
            serde_json::to_string(&report.errors)?
        );
    }
    Ok(report)
}

/// Evaluate `rule_id` on the fixture and expect every listed error to show up.
pub fn check_rule_failed(
    asserter: &Asserter,
    fixture: &RuleFixture,
    rule_id: &str,
) -> anyhow::Result<Report> {
    let report = evaluate_single_rule(asserter, &fixture.dragees, rule_id)?;

    if report.pass != fixture.result.pass {
        anyhow::bail!(
            "rule {rule_id}: expected pass={}, got pass={}",
            fixture.result.pass,
            report.pass
        );
    }

    let missing: Vec<&Value> = fixture
        .result
        .errors
        .iter()
        .filter(|expected| !report_contains_error(&report, expected))
        .collect();
    if !missing.is_empty() {
        anyhow::bail!(
            "rule {rule_id}: missing expected errors {} in {}",
            serde_json::to_string(&missing)?,
            serde_json::to_string(&report.errors)?
        );
    }
    Ok(report)
}

/// Binds an asserter to a fixture source so rule tests read as one-liners.
pub struct AsserterHarness<'a, F> {
    asserter: &'a Asserter,
    retrieve: F,
}

impl<'a, F> AsserterHarness<'a, F>
where
    F: Fn(&str) -> RuleFixture,
{
    pub fn new(asserter: &'a Asserter, retrieve: F) -> Self {
        Self { asserter, retrieve }
    }

    /// Panics unless `rule_id` passes on the named fixture.
    pub fn rule_passed(&self, fixture: &str, rule_id: &str) -> Report {
        let data = (self.retrieve)(fixture);
        match check_rule_passed(self.asserter, &data, rule_id) {
            Ok(report) => report,
            Err(err) => panic!("{fixture}: {err:#}"),
        }
    }

    /// Panics unless `rule_id` reports the fixture's expected errors.
    pub fn rule_failed(&self, fixture: &str, rule_id: &str) -> Report {
        let data = (self.retrieve)(fixture);
        match check_rule_failed(self.asserter, &data, rule_id) {
            Ok(report) => report,
            Err(err) => panic!("{fixture}: {err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragee_types::RuleError;
    use serde_json::json;

    fn report() -> Report {
        Report::new(
            "ddd",
            1,
            vec![RuleError::new("must not depend on repositories", "Order").for_rule("ddd/agg")],
        )
    }

    #[test]
    fn string_expectation_matches_message() {
        let report = report();
        assert!(report_contains_error(&report, &json!("must not depend on repositories")));
        assert!(!report_contains_error(&report, &json!("must not")));
    }

    #[test]
    fn object_expectation_matches_subset() {
        let report = report();
        assert!(report_contains_error(&report, &json!({ "entityName": "Order" })));
        assert!(report_contains_error(
            &report,
            &json!({ "ruleId": "ddd/agg", "message": "must not depend on repositories" })
        ));
        assert!(!report_contains_error(&report, &json!({ "entityName": "Money" })));
        assert!(!report_contains_error(&report, &json!(42)));
    }

    #[test]
    fn fixture_errors_default_to_empty() {
        let fixture = parse_fixture(r#"{ "dragees": [], "result": { "pass": true } }"#).unwrap();
        assert!(fixture.dragees.is_empty());
        assert!(fixture.result.errors.is_empty());
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        let err = parse_fixture(r#"{ "dragees": {} }"#).unwrap_err();
        assert!(format!("{err:#}").contains("parse rule fixture json"));
    }
}
