use crate::model::{DrageeConfigV1, SCHEMA_CONFIG_V1};
use anyhow::Context;
use dragee_domain::policy::{RulePolicy, RulesPolicy};
use dragee_types::Severity;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub policy: RulesPolicy,
}

pub fn resolve_config(cfg: DrageeConfigV1) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut policy = RulesPolicy::default();
    for (rule_id, rc) in cfg.rules.iter() {
        validate_rule_id(rule_id)?;

        let mut entry = RulePolicy::enabled();
        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                Some(parse_severity(sev).with_context(|| format!("invalid severity for {rule_id}"))?);
        }
        policy.insert(rule_id.clone(), entry);
    }

    Ok(ResolvedConfig { policy })
}

/// Rule ids are generated as `namespace/slug`; anything else can never match.
fn validate_rule_id(rule_id: &str) -> anyhow::Result<()> {
    match rule_id.split_once('/') {
        Some((_, slug)) if !slug.is_empty() && !slug.contains(char::is_whitespace) => Ok(()),
        _ => anyhow::bail!("invalid rule id: {rule_id} (expected namespace/slug)"),
    }
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warn),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warn|error)"),
    }
}
