use dragee_types::Severity;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub enabled: bool,
    /// Replaces the severity the rule was declared with.
    pub severity: Option<Severity>,
}

impl RulePolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self::enabled()
    }
}

/// Per-rule overrides keyed by generated rule id. Rules without an entry run
/// as declared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulesPolicy {
    pub rules: BTreeMap<String, RulePolicy>,
}

impl RulesPolicy {
    pub fn rule_policy(&self, rule_id: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_id)
    }

    pub fn insert(&mut self, rule_id: impl Into<String>, policy: RulePolicy) {
        self.rules.insert(rule_id.into(), policy);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
