use crate::fingerprint::fingerprint_for_diagnostic;
use crate::model::DependencyContext;
use deplens_types::{Diagnostic, Severity, ids};
use serde_json::{Value, json};

/// Fires while the backend has not finished analyzing this package.
///
/// Consumes the whole report. A structurally empty report counts as pending;
/// only a populated (non-null) `finished_at` field suppresses the note.
pub(crate) fn produce(
    item: &Value,
    ctx: &DependencyContext,
    severity: Severity,
    out: &mut Vec<Diagnostic>,
) {
    let finished = match item.get("finished_at") {
        None | Some(Value::Null) => false,
        Some(_) => true,
    };
    if finished {
        return;
    }

    let label = ctx.label();
    out.push(Diagnostic {
        severity,
        rule_id: ids::RULE_ANALYSIS_PENDING.to_string(),
        code: ids::CODE_ANALYSIS_PENDING.to_string(),
        message: format!("{label}: analysis is pending"),
        range: ctx.version_range(),
        source: ids::SOURCE_LABEL.to_string(),
        fingerprint: Some(fingerprint_for_diagnostic(
            ids::RULE_ANALYSIS_PENDING,
            ids::CODE_ANALYSIS_PENDING,
            &label,
            None,
        )),
        data: json!({
            "package": ctx.name.value,
            "version": ctx.version.value,
        }),
    });
}
