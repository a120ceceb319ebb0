//! Preset profiles.
//!
//! Keep these small and readable; anything finer-grained belongs in
//! `deplens.toml`.

use deplens_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use deplens_types::Severity;
use std::collections::{BTreeMap, BTreeSet};

pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "advisory" => advisory_profile(),
        _ => strict_profile(),
    }
}

/// Default profile: findings block.
fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        forbidden_licenses: BTreeSet::new(),
        rules: default_rules(Severity::Error),
    }
}

/// Findings surface as warnings; nothing blocks by default.
fn advisory_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "advisory".to_string(),
        fail_on: FailOn::Error,
        forbidden_licenses: BTreeSet::new(),
        rules: default_rules(Severity::Warning),
    }
}

fn default_rules(finding_severity: Severity) -> BTreeMap<String, RulePolicy> {
    use deplens_types::ids::*;

    let mut rules = BTreeMap::new();

    // Pending is progress reporting, never a failure signal.
    rules.insert(
        RULE_ANALYSIS_PENDING.to_string(),
        RulePolicy::enabled(Severity::Info),
    );
    rules.insert(
        RULE_SECURITY_ISSUES.to_string(),
        RulePolicy::enabled(finding_severity),
    );
    rules.insert(
        RULE_FORBIDDEN_LICENSE.to_string(),
        RulePolicy::enabled(finding_severity),
    );
    rules.insert(
        RULE_CRYPTO_ALGORITHMS.to_string(),
        RulePolicy::enabled(finding_severity),
    );

    rules
}
