//! Property tests for the binder and the pipeline.

use crate::bind::bind;
use crate::pipeline::Pipeline;
use crate::rules::RuleKind;
use crate::test_support::{config_all_rules, ctx};
use deplens_types::{FieldPath, ids};
use proptest::prelude::*;
use serde_json::Value;

/// Arbitrary JSON with bounded depth and width, shaped like real reports:
/// objects of objects with scalar or list leaves.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9_.-]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_path() -> impl Strategy<Value = FieldPath> {
    prop::collection::vec("[a-z_]{1,8}", 0..5)
        .prop_map(|segments| segments.into_iter().collect())
}

/// Nest `leaf` under `segments`, innermost last.
fn report_containing(segments: &[String], leaf: &Value) -> Value {
    let mut value = leaf.clone();
    for segment in segments.iter().rev() {
        let mut object = serde_json::Map::new();
        object.insert(segment.clone(), value);
        value = Value::Object(object);
    }
    value
}

proptest! {
    #[test]
    fn bind_never_panics(root in arb_json(), path in arb_path()) {
        let _ = bind(&root, &path);
    }

    #[test]
    fn empty_path_always_binds_the_root(root in arb_json()) {
        prop_assert_eq!(bind(&root, &FieldPath::root()), Some(&root));
    }

    #[test]
    fn constructed_paths_always_bind(path in arb_path(), leaf in arb_json()) {
        let report = report_containing(path.segments(), &leaf);
        prop_assert_eq!(bind(&report, &path), Some(&leaf));
    }

    #[test]
    fn scalar_roots_bind_only_the_empty_path(path in arb_path(), n in any::<i64>()) {
        let root = Value::Number(n.into());
        let expected = if path.is_empty() { Some(&root) } else { None };
        prop_assert_eq!(bind(&root, &path), expected);
    }

    #[test]
    fn pipeline_runs_are_deterministic(report in arb_json()) {
        let context = ctx("flask", "1.0");
        let cfg = config_all_rules(&["GPL-3.0"]);
        let pipeline = Pipeline::with_default_rules(&context, &cfg);
        prop_assert_eq!(pipeline.run(&report), pipeline.run(&report));
    }

    #[test]
    fn output_is_bounded_by_rules_and_config(report in arb_json()) {
        let context = ctx("flask", "1.0");
        let cfg = config_all_rules(&["GPL-3.0", "AGPL-3.0"]);
        let out = Pipeline::with_default_rules(&context, &cfg).run(&report);
        // Three single-shot rules plus at most one per forbidden license.
        prop_assert!(out.len() <= 3 + cfg.forbidden_licenses.len());
    }

    #[test]
    fn pending_fires_whenever_finished_at_is_absent(report in arb_json()) {
        prop_assume!(report.get("finished_at").is_none());
        let context = ctx("flask", "1.0");
        let cfg = config_all_rules(&[]);
        let pipeline = Pipeline::new([RuleKind::Pending], &context, &cfg);
        prop_assert_eq!(pipeline.run(&report).len(), 1);
    }

    #[test]
    fn disabling_a_rule_never_adds_diagnostics(report in arb_json()) {
        let context = ctx("flask", "1.0");
        let all = config_all_rules(&["GPL-3.0"]);
        let mut fewer = all.clone();
        fewer
            .rules
            .get_mut(ids::RULE_SECURITY_ISSUES)
            .unwrap()
            .enabled = false;

        let full = Pipeline::with_default_rules(&context, &all).run(&report);
        let partial = Pipeline::with_default_rules(&context, &fewer).run(&report);
        prop_assert!(partial.len() <= full.len());
    }
}
