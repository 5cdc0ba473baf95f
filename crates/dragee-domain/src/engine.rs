use crate::error::RegistryError;
use crate::policy::RulesPolicy;
use crate::registry::ensure_unique_ids;
use crate::rule::{DeclaredRule, Rule, RuleOutcome};
use dragee_types::{Dragee, Report, RuleError};
use tracing::{debug, trace};

/// A namespace and its ordered, immutable rule set.
#[derive(Clone, Debug)]
pub struct Asserter {
    namespace: String,
    rules: Vec<Rule>,
}

impl Asserter {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, rule_id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id() == rule_id)
    }

    pub fn evaluate(&self, dragees: &[Dragee]) -> Report {
        evaluate(self, dragees)
    }

    /// Derive a new asserter with `policy` applied: disabled rules are left
    /// out and severity overrides are baked into the remaining rules.
    pub fn with_policy(&self, policy: &RulesPolicy) -> Result<Asserter, RegistryError> {
        if let Some(unknown) = policy.rules.keys().find(|id| self.rule(id).is_none()) {
            return Err(RegistryError::UnknownId {
                namespace: self.namespace.clone(),
                id: unknown.clone(),
            });
        }

        let rules: Vec<Rule> = self
            .rules
            .iter()
            .filter_map(|rule| match policy.rule_policy(rule.id()) {
                None => Some(rule.clone()),
                Some(p) if !p.enabled => None,
                Some(p) => Some(match p.severity {
                    Some(severity) => rule.with_severity(severity),
                    None => rule.clone(),
                }),
            })
            .collect();

        debug!(
            namespace = %self.namespace,
            rules = rules.len(),
            disabled = self.rules.len() - rules.len(),
            "policy applied"
        );

        Ok(Asserter {
            namespace: self.namespace.clone(),
            rules,
        })
    }
}

/// Register `declared` under `namespace`, generating one id per rule.
pub fn build_asserter(
    namespace: impl Into<String>,
    declared: impl IntoIterator<Item = DeclaredRule>,
) -> Result<Asserter, RegistryError> {
    let namespace = namespace.into();
    let rules: Vec<Rule> = declared
        .into_iter()
        .map(|rule| rule.register(&namespace))
        .collect();

    ensure_unique_ids(&namespace, rules.iter().map(Rule::id))?;

    debug!(namespace = %namespace, rules = rules.len(), "asserter built");
    Ok(Asserter { namespace, rules })
}

/// Run every rule against `dragees` and aggregate the outcomes.
pub fn evaluate(asserter: &Asserter, dragees: &[Dragee]) -> Report {
    aggregate(&asserter.namespace, &asserter.rules, dragees)
}

/// Same aggregation as [`evaluate`], restricted to the rule with `rule_id`.
pub fn evaluate_single_rule(
    asserter: &Asserter,
    dragees: &[Dragee],
    rule_id: &str,
) -> Result<Report, RegistryError> {
    let rule = asserter
        .rule(rule_id)
        .ok_or_else(|| RegistryError::UnknownId {
            namespace: asserter.namespace.clone(),
            id: rule_id.to_string(),
        })?;

    Ok(aggregate(
        &asserter.namespace,
        std::slice::from_ref(rule),
        dragees,
    ))
}

/// Name kept for rule-package test suites.
pub fn generate_report_for_rule(
    asserter: &Asserter,
    dragees: &[Dragee],
    rule_id: &str,
) -> Result<Report, RegistryError> {
    evaluate_single_rule(asserter, dragees, rule_id)
}

fn aggregate(namespace: &str, rules: &[Rule], dragees: &[Dragee]) -> Report {
    let errors: Vec<RuleError> = rules
        .iter()
        .flat_map(|rule| {
            let outcomes = rule.evaluate(dragees);
            trace!(rule_id = rule.id(), outcomes = outcomes.len(), "rule evaluated");
            outcomes.into_iter().filter_map(move |outcome| match outcome {
                RuleOutcome::Success => None,
                RuleOutcome::Failure(err) => Some(err.for_rule(rule.id())),
            })
        })
        .collect();

    let report = Report::new(namespace, rules.len(), errors);
    debug!(
        namespace,
        pass = report.pass,
        rules = report.stats.rules_count,
        errors = report.stats.errors_count,
        "asserter evaluated"
    );
    report
}
