use crate::fingerprint::fingerprint_for_diagnostic;
use crate::model::DependencyContext;
use deplens_types::{Diagnostic, Severity, ids};
use serde_json::{Value, json};

/// One diagnostic listing every cryptographic algorithm found in the package.
///
/// Consumes `analyses.crypto_algorithms.summary.content`, a list of objects
/// carrying at least a `name`. Entries without a usable name are skipped.
pub(crate) fn produce(
    item: &Value,
    ctx: &DependencyContext,
    severity: Severity,
    out: &mut Vec<Diagnostic>,
) {
    let Some(content) = item.as_array() else {
        return;
    };
    let algorithms: Vec<&str> = content
        .iter()
        .filter_map(|entry| entry.get("name").and_then(Value::as_str))
        .collect();
    if algorithms.is_empty() {
        return;
    }

    let label = ctx.label();
    let listed = algorithms.join(", ");
    out.push(Diagnostic {
        severity,
        rule_id: ids::RULE_CRYPTO_ALGORITHMS.to_string(),
        code: ids::CODE_KNOWN_CRYPTO_ALGORITHM.to_string(),
        message: format!("{label} uses known cryptography: {listed}"),
        range: ctx.version_range(),
        source: ids::SOURCE_LABEL.to_string(),
        fingerprint: Some(fingerprint_for_diagnostic(
            ids::RULE_CRYPTO_ALGORITHMS,
            ids::CODE_KNOWN_CRYPTO_ALGORITHM,
            &label,
            Some(&listed),
        )),
        data: json!({ "algorithms": algorithms }),
    });
}
