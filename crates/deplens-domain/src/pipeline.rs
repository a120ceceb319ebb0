//! Ordered rule execution over one report.

use crate::model::DependencyContext;
use crate::policy::EffectiveConfig;
use crate::rules::{Rule, RuleKind};
use deplens_types::Diagnostic;
use serde_json::Value;

/// Runs an ordered set of rules against one report.
///
/// Built fresh per analysis request; borrows the package context and the
/// effective configuration from the caller for the duration of the run.
#[derive(Clone, Debug)]
pub struct Pipeline<'a> {
    rules: Vec<Rule>,
    context: &'a DependencyContext,
    config: &'a EffectiveConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        kinds: impl IntoIterator<Item = RuleKind>,
        context: &'a DependencyContext,
        config: &'a EffectiveConfig,
    ) -> Self {
        Self {
            rules: kinds.into_iter().map(Rule::new).collect(),
            context,
            config,
        }
    }

    /// Every rule, in canonical order.
    pub fn with_default_rules(context: &'a DependencyContext, config: &'a EffectiveConfig) -> Self {
        Self::new(RuleKind::ALL, context, config)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule in order and return this invocation's diagnostics.
    ///
    /// Always a fresh list; callers accumulating across reports concatenate.
    /// Output order is rule order, then within-rule emission order. Nothing is
    /// sorted or truncated afterwards.
    pub fn run(&self, report: &Value) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for rule in &self.rules {
            let Some(policy) = self.config.rule_policy(rule.kind().rule_id()) else {
                continue;
            };
            let Some(item) = rule.consume(report) else {
                continue;
            };
            rule.produce(item, self.context, policy.severity, self.config, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{config_all_rules, ctx};
    use deplens_types::ids;
    use serde_json::json;

    fn busy_report() -> Value {
        // No finished_at, so pending fires alongside the findings.
        json!({
            "analyses": {
                "security_issues": {"summary": ["CVE-1"]},
                "source_licenses": {"summary": {"sure_licenses": ["GPL-3.0"]}},
                "crypto_algorithms": {"summary": {"content": [{"name": "MD5"}]}},
            }
        })
    }

    #[test]
    fn diagnostics_come_out_in_rule_order() {
        let context = ctx("flask", "1.0");
        let cfg = config_all_rules(&["GPL-3.0"]);
        let out = Pipeline::with_default_rules(&context, &cfg).run(&busy_report());

        let rule_ids: Vec<&str> = out.iter().map(|d| d.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                ids::RULE_ANALYSIS_PENDING,
                ids::RULE_SECURITY_ISSUES,
                ids::RULE_FORBIDDEN_LICENSE,
                ids::RULE_CRYPTO_ALGORITHMS,
            ]
        );
    }

    #[test]
    fn disabled_rules_are_skipped() {
        let context = ctx("flask", "1.0");
        let mut cfg = config_all_rules(&["GPL-3.0"]);
        cfg.rules
            .get_mut(ids::RULE_SECURITY_ISSUES)
            .unwrap()
            .enabled = false;

        let out = Pipeline::with_default_rules(&context, &cfg).run(&busy_report());
        assert!(out.iter().all(|d| d.rule_id != ids::RULE_SECURITY_ISSUES));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn each_run_returns_a_fresh_list() {
        let context = ctx("flask", "1.0");
        let cfg = config_all_rules(&[]);
        let pipeline = Pipeline::with_default_rules(&context, &cfg);

        let first = pipeline.run(&json!({}));
        let second = pipeline.run(&json!({"finished_at": "2025-06-01T12:00:00Z"}));

        // Pending only in the first run; the second starts empty.
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn accumulating_across_reports_is_plain_concatenation() {
        let context = ctx("flask", "1.0");
        let cfg = config_all_rules(&[]);
        let pipeline = Pipeline::with_default_rules(&context, &cfg);

        let reports = [
            json!({}),
            json!({
                "finished_at": "2025-06-01T12:00:00Z",
                "analyses": {"security_issues": {"summary": ["CVE-1"]}},
            }),
        ];

        let mut all = Vec::new();
        for report in &reports {
            all.extend(pipeline.run(report));
        }

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].rule_id, ids::RULE_ANALYSIS_PENDING);
        assert_eq!(all[1].rule_id, ids::RULE_SECURITY_ISSUES);
    }

    #[test]
    fn unconsumable_rules_contribute_nothing() {
        let context = ctx("flask", "1.0");
        let cfg = config_all_rules(&["GPL-3.0"]);
        // Finished report with none of the bound paths present.
        let report = json!({"finished_at": "2025-06-01T12:00:00Z"});
        assert!(Pipeline::with_default_rules(&context, &cfg).run(&report).is_empty());
    }

    #[test]
    fn custom_rule_selection_is_respected() {
        let context = ctx("flask", "1.0");
        let cfg = config_all_rules(&[]);
        let pipeline = Pipeline::new([RuleKind::SecurityIssues], &context, &cfg);

        assert_eq!(pipeline.rules().len(), 1);
        let out = pipeline.run(&json!({}));
        assert!(out.is_empty());
    }
}
