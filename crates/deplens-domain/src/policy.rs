//! Effective configuration the engine runs with.
//!
//! This is the resolved form: presets, config file, and overrides have already
//! been merged by `deplens-settings`. The domain only reads it.

use deplens_types::Severity;
use std::collections::{BTreeMap, BTreeSet};

/// Threshold at which warnings flip the verdict to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// Per-rule switch and severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl RulePolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    /// Name of the preset this config started from.
    pub profile: String,
    pub fail_on: FailOn,
    /// License identifiers the forbidden-license rule reports when present.
    pub forbidden_licenses: BTreeSet<String>,
    /// Keyed by rule_id.
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    /// Policy for `rule_id`, filtered to enabled rules.
    pub fn rule_policy(&self, rule_id: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_id).filter(|policy| policy.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deplens_types::ids;

    #[test]
    fn rule_policy_filters_disabled_rules() {
        let mut rules = BTreeMap::new();
        rules.insert(
            ids::RULE_SECURITY_ISSUES.to_string(),
            RulePolicy::enabled(Severity::Error),
        );
        rules.insert(
            ids::RULE_CRYPTO_ALGORITHMS.to_string(),
            RulePolicy::disabled(),
        );
        let cfg = EffectiveConfig {
            profile: "test".to_string(),
            fail_on: FailOn::Error,
            forbidden_licenses: BTreeSet::new(),
            rules,
        };

        assert!(cfg.rule_policy(ids::RULE_SECURITY_ISSUES).is_some());
        assert!(cfg.rule_policy(ids::RULE_CRYPTO_ALGORITHMS).is_none());
        assert!(cfg.rule_policy("analysis.unknown").is_none());
    }
}
