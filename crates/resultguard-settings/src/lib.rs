//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

#[cfg(test)]
mod proptest;

pub use model::{PatternEntry, PatternEntryV1, ResultguardConfigV1, SCHEMA_CONFIG_V1};
pub use presets::known_profiles;
pub use resolve::{ConfigurationError, Overrides, ResolvedConfig};

/// Parse `resultguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ResultguardConfigV1> {
    let cfg: ResultguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

pub fn serialize_config_toml(cfg: &ResultguardConfigV1) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Resolve the effective config used by the engine (profile + overrides + user patterns).
pub fn resolve_config(
    cfg: ResultguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON Schema for `resultguard.toml`.
pub fn config_schema_json() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(ResultguardConfigV1)).unwrap_or_default()
}
