//! Merge presets, file config, and CLI overrides into the effective config.

use crate::model::DeplensConfigV1;
use crate::presets;
use anyhow::Context;
use deplens_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use deplens_types::Severity;

/// CLI-level overrides. These win over everything in the file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: DeplensConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or_else(|| cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // Forbidden licenses come only from the file; there is no preset list.
    if !cfg.forbidden_licenses.is_empty() {
        effective.forbidden_licenses = cfg.forbidden_licenses.iter().cloned().collect();
    }

    for (rule_id, rule_cfg) in &cfg.rules {
        // Unknown rule_ids start disabled: a typo must not silently enable
        // default behavior under the wrong name.
        let policy = effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rule_cfg.enabled {
            policy.enabled = enabled;
        }
        if let Some(severity) = rule_cfg.severity.as_deref() {
            policy.severity = parse_severity(severity)
                .with_context(|| format!("invalid severity for rule {rule_id}"))?;
        }
    }

    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on)?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_severity(value: &str) -> anyhow::Result<Severity> {
    match value {
        "info" => Ok(Severity::Info),
        "warning" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity {other:?} (expected info|warning|error)"),
    }
}

fn parse_fail_on(value: &str) -> anyhow::Result<FailOn> {
    match value {
        "error" => Ok(FailOn::Error),
        "warning" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on {other:?} (expected error|warning)"),
    }
}
