use crate::fingerprint::fingerprint_for_diagnostic;
use crate::model::DependencyContext;
use crate::policy::EffectiveConfig;
use deplens_types::{Diagnostic, Severity, ids};
use serde_json::{Value, json};

/// One diagnostic per configured forbidden license found in the report.
///
/// Consumes `analyses.source_licenses.summary.sure_licenses`, a list of
/// detected license identifiers. Iteration runs over the configured set, so
/// emission order is the set's lexicographic order regardless of how the
/// report orders its findings.
pub(crate) fn produce(
    item: &Value,
    ctx: &DependencyContext,
    severity: Severity,
    cfg: &EffectiveConfig,
    out: &mut Vec<Diagnostic>,
) {
    let Some(found) = item.as_array() else {
        return;
    };
    if found.is_empty() {
        return;
    }

    let label = ctx.label();
    for license in &cfg.forbidden_licenses {
        let present = found
            .iter()
            .any(|value| value.as_str() == Some(license.as_str()));
        if !present {
            continue;
        }

        out.push(Diagnostic {
            severity,
            rule_id: ids::RULE_FORBIDDEN_LICENSE.to_string(),
            code: ids::CODE_FORBIDDEN_LICENSE.to_string(),
            message: format!("{label} uses a forbidden license: {license}"),
            range: ctx.version_range(),
            source: ids::SOURCE_LABEL.to_string(),
            fingerprint: Some(fingerprint_for_diagnostic(
                ids::RULE_FORBIDDEN_LICENSE,
                ids::CODE_FORBIDDEN_LICENSE,
                &label,
                Some(license),
            )),
            data: json!({ "license": license }),
        });
    }
}
