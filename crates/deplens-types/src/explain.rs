//! Explanation registry backing `deplens explain`.
//!
//! Every rule_id and code the pipeline can emit has an entry here; a coverage
//! test keeps the registry honest when rules are added.

use crate::ids;

/// Human-oriented explanation for a rule or diagnostic code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    pub title: String,
    pub description: String,
    pub remediation: String,
}

/// Every rule_id with an explanation entry.
pub fn all_rule_ids() -> Vec<&'static str> {
    vec![
        ids::RULE_ANALYSIS_PENDING,
        ids::RULE_SECURITY_ISSUES,
        ids::RULE_FORBIDDEN_LICENSE,
        ids::RULE_CRYPTO_ALGORITHMS,
    ]
}

/// Every diagnostic code with an explanation entry.
pub fn all_codes() -> Vec<&'static str> {
    vec![
        ids::CODE_ANALYSIS_PENDING,
        ids::CODE_KNOWN_VULNERABILITY,
        ids::CODE_FORBIDDEN_LICENSE,
        ids::CODE_KNOWN_CRYPTO_ALGORITHM,
    ]
}

/// Look up the explanation for a rule_id or a diagnostic code.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_ANALYSIS_PENDING | ids::CODE_ANALYSIS_PENDING => Some(explain_pending()),
        ids::RULE_SECURITY_ISSUES | ids::CODE_KNOWN_VULNERABILITY => Some(explain_security()),
        ids::RULE_FORBIDDEN_LICENSE | ids::CODE_FORBIDDEN_LICENSE => Some(explain_license()),
        ids::RULE_CRYPTO_ALGORITHMS | ids::CODE_KNOWN_CRYPTO_ALGORITHM => Some(explain_crypto()),
        _ => None,
    }
}

fn explain_pending() -> Explanation {
    Explanation {
        title: "Analysis is still pending".to_string(),
        description: "The analysis backend has not finished processing this package yet.\n\
                      Until a report carries a populated `finished_at` field, deplens treats\n\
                      the package as pending and emits an informational note so editors can\n\
                      show progress instead of silence."
            .to_string(),
        remediation: "No action needed. Re-run once the backend has finished; the note\n\
                      disappears when the report is complete."
            .to_string(),
    }
}

fn explain_security() -> Explanation {
    Explanation {
        title: "Known security issues reported".to_string(),
        description: "The report lists known vulnerabilities (CVE identifiers or advisory\n\
                      names) for this exact package version. The diagnostic names every\n\
                      issue the backend attributed to the version in use."
            .to_string(),
        remediation: "Upgrade to a version without known issues, or pin an alternative\n\
                      package. If the advisory does not apply to your usage, lower the rule\n\
                      severity for this repository in deplens.toml."
            .to_string(),
    }
}

fn explain_license() -> Explanation {
    Explanation {
        title: "Forbidden license detected".to_string(),
        description: "A license the repository configuration forbids appears among the\n\
                      licenses detected in the package sources. Only licenses listed under\n\
                      `forbidden_licenses` are reported; everything else passes silently."
            .to_string(),
        remediation: "Replace the dependency, or remove the license from\n\
                      `forbidden_licenses` in deplens.toml if it is acceptable after review."
            .to_string(),
    }
}

fn explain_crypto() -> Explanation {
    Explanation {
        title: "Known cryptography detected".to_string(),
        description: "The package sources contain recognizable cryptographic algorithms.\n\
                      This matters for export-control review and for spotting weak\n\
                      primitives; the diagnostic lists every algorithm name the backend\n\
                      identified."
            .to_string(),
        remediation: "Review the listed algorithms. If the usage is acceptable, disable\n\
                      this rule or lower its severity in deplens.toml."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_id_has_an_explanation() {
        for rule_id in all_rule_ids() {
            assert!(
                lookup_explanation(rule_id).is_some(),
                "missing explanation for rule_id {rule_id}"
            );
        }
    }

    #[test]
    fn every_code_has_an_explanation() {
        for code in all_codes() {
            assert!(
                lookup_explanation(code).is_some(),
                "missing explanation for code {code}"
            );
        }
    }

    #[test]
    fn unknown_identifier_has_no_explanation() {
        assert!(lookup_explanation("analysis.nonsense").is_none());
        assert!(lookup_explanation("").is_none());
    }

    #[test]
    fn rule_and_code_share_an_entry() {
        let by_rule = lookup_explanation(ids::RULE_SECURITY_ISSUES).unwrap();
        let by_code = lookup_explanation(ids::CODE_KNOWN_VULNERABILITY).unwrap();
        assert_eq!(by_rule, by_code);
    }
}
