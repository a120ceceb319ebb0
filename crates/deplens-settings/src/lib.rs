//! Config parsing and profile resolution.
//!
//! Splits cleanly in two: the permissive user-facing TOML model
//! (`DeplensConfigV1`) and the strict resolved form the engine consumes
//! (`EffectiveConfig` from `deplens-domain`). Resolution order is preset,
//! then file, then CLI overrides.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{DeplensConfigV1, RuleConfig, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `deplens.toml` contents into the typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DeplensConfigV1> {
    let cfg: DeplensConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config the engine runs with.
pub fn resolve_config(
    cfg: DeplensConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
