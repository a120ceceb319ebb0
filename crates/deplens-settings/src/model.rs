//! The `deplens.toml` schema, version 1.
//!
//! Deliberately permissive: every field optional, unknown severity strings
//! rejected only at resolve time. Strictness lives in `resolve`, stability
//! lives here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable schema identifier for the config shape.
pub const SCHEMA_CONFIG_V1: &str = "deplens.config.v1";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeplensConfigV1 {
    /// Optional schema marker for editor tooling (`deplens.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `strict` (default) or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When findings fail the analysis: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// License identifiers the forbidden-license rule reports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forbidden_licenses: Vec<String>,

    /// Per-rule overrides, keyed by rule_id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override the preset's enable switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override the preset's severity: `info`, `warning`, or `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
