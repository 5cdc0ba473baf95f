use dragee_types::{Dragee, RuleError, Severity, generate_id};
use std::fmt;
use std::sync::Arc;

/// Evaluation function of a rule: pure, and shared across threads.
pub type RuleHandler = Arc<dyn Fn(&[Dragee]) -> Vec<RuleOutcome> + Send + Sync>;

/// Result of checking one expectation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    Success,
    Failure(RuleError),
}

impl RuleOutcome {
    pub fn success() -> Self {
        RuleOutcome::Success
    }

    pub fn failure(message: impl Into<String>, dragee_name: impl Into<String>) -> Self {
        RuleOutcome::Failure(RuleError::new(message, dragee_name))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RuleOutcome::Success)
    }
}

/// A rule as written by its author, before it gets an id.
#[derive(Clone)]
pub struct DeclaredRule {
    pub label: String,
    pub severity: Severity,
    handler: RuleHandler,
}

impl DeclaredRule {
    pub fn new<F>(label: impl Into<String>, severity: Severity, handler: F) -> Self
    where
        F: Fn(&[Dragee]) -> Vec<RuleOutcome> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            severity,
            handler: Arc::new(handler),
        }
    }

    pub(crate) fn register(self, namespace: &str) -> Rule {
        Rule {
            id: generate_id(namespace, &self.label),
            label: self.label,
            severity: self.severity,
            handler: self.handler,
        }
    }
}

impl fmt::Debug for DeclaredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaredRule")
            .field("label", &self.label)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// A registered rule. Never mutated after registration.
#[derive(Clone)]
pub struct Rule {
    id: String,
    label: String,
    severity: Severity,
    handler: RuleHandler,
}

impl Rule {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Run the handler. A panicking handler takes the whole evaluation down.
    pub fn evaluate(&self, dragees: &[Dragee]) -> Vec<RuleOutcome> {
        (self.handler)(dragees)
    }

    pub(crate) fn with_severity(&self, severity: Severity) -> Rule {
        Rule {
            severity,
            ..self.clone()
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}
