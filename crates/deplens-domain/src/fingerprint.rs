//! Stable fingerprints for emitted diagnostics.

use sha2::{Digest, Sha256};

/// SHA-256 over the fields that identify a diagnostic across runs.
///
/// The canonical form is `rule_id|code|package_label[|detail]`, where `detail`
/// is the rule-specific discriminator (a license name, the joined issue list).
/// Source ranges are deliberately excluded so editing unrelated lines does not
/// churn fingerprints.
pub fn fingerprint_for_diagnostic(
    rule_id: &str,
    code: &str,
    package_label: &str,
    detail: Option<&str>,
) -> String {
    let mut parts = vec![rule_id, code, package_label];
    if let Some(detail) = detail {
        parts.push(detail);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
