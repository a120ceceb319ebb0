use crate::fingerprint::fingerprint_for_diagnostic;
use crate::model::DependencyContext;
use deplens_types::{Diagnostic, Severity, ids};
use serde_json::{Value, json};

/// One diagnostic naming every known issue reported for this version.
///
/// Consumes `analyses.security_issues.summary`, a list of issue identifiers.
/// Non-string entries are skipped; an unusable summary stays silent.
pub(crate) fn produce(
    item: &Value,
    ctx: &DependencyContext,
    severity: Severity,
    out: &mut Vec<Diagnostic>,
) {
    let Some(summary) = item.as_array() else {
        return;
    };
    let issues: Vec<&str> = summary.iter().filter_map(Value::as_str).collect();
    if issues.is_empty() {
        return;
    }

    let label = ctx.label();
    let listed = issues.join(", ");
    out.push(Diagnostic {
        severity,
        rule_id: ids::RULE_SECURITY_ISSUES.to_string(),
        code: ids::CODE_KNOWN_VULNERABILITY.to_string(),
        message: format!("{label} is vulnerable: {listed}"),
        range: ctx.version_range(),
        source: ids::SOURCE_LABEL.to_string(),
        fingerprint: Some(fingerprint_for_diagnostic(
            ids::RULE_SECURITY_ISSUES,
            ids::CODE_KNOWN_VULNERABILITY,
            &label,
            Some(&listed),
        )),
        data: json!({ "issues": issues }),
    });
}
