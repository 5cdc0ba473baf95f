//! Config parsing and rule policy resolution.
//!
//! No IO here: configuration arrives as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{DrageeConfigV1, RuleConfig, SCHEMA_CONFIG_V1};
pub use resolve::ResolvedConfig;

/// Parse `dragee.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DrageeConfigV1> {
    let cfg: DrageeConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the rule policy applied on top of declared rules.
pub fn resolve_config(cfg: DrageeConfigV1) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg)
}
