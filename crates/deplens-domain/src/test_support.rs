//! Builders shared by rule, pipeline, and engine tests.

use crate::model::{DependencyContext, ManifestField};
use crate::policy::{EffectiveConfig, FailOn, RulePolicy};
use crate::rules::RuleKind;
use deplens_types::{Position, Range, Severity};
use std::collections::{BTreeMap, BTreeSet};

/// A context with plausible manifest positions: `name = "version"` on line 0.
pub fn ctx(name: &str, version: &str) -> DependencyContext {
    let name_len = name.len() as u32;
    let version_start = name_len + 4;
    DependencyContext::new(
        ManifestField::new(
            name,
            Range::new(Position::new(0, 0), Position::new(0, name_len)),
        ),
        ManifestField::new(
            version,
            Range::new(
                Position::new(0, version_start),
                Position::new(0, version_start + version.len() as u32),
            ),
        ),
    )
}

/// Config with a single enabled rule.
pub fn config_with_rule(rule_id: &str, severity: Severity) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(rule_id.to_string(), RulePolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        forbidden_licenses: BTreeSet::new(),
        rules,
    }
}

/// Config with a single enabled rule plus a forbidden-license list.
pub fn config_with_forbidden(
    rule_id: &str,
    severity: Severity,
    forbidden: &[&str],
) -> EffectiveConfig {
    let mut cfg = config_with_rule(rule_id, severity);
    cfg.forbidden_licenses = forbidden.iter().map(|license| license.to_string()).collect();
    cfg
}

/// Config with all rules enabled: pending at info, the rest at error.
pub fn config_all_rules(forbidden: &[&str]) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    for kind in RuleKind::ALL {
        let severity = match kind {
            RuleKind::Pending => Severity::Info,
            _ => Severity::Error,
        };
        rules.insert(kind.rule_id().to_string(), RulePolicy::enabled(severity));
    }
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        forbidden_licenses: forbidden.iter().map(|license| license.to_string()).collect(),
        rules,
    }
}
