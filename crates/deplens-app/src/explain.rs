//! The explain use case: remediation guidance for a rule_id or code.

use deplens_types::explain::{Explanation, all_codes, all_rule_ids, lookup_explanation};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplainOutput {
    Found(Explanation),
    NotFound {
        identifier: String,
        available_rule_ids: Vec<&'static str>,
        available_codes: Vec<&'static str>,
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match lookup_explanation(identifier) {
        Some(explanation) => ExplainOutput::Found(explanation),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: all_rule_ids(),
            available_codes: all_codes(),
        },
    }
}

/// Render a found explanation for the terminal.
pub fn format_explanation(explanation: &Explanation) -> String {
    let mut out = String::new();
    out.push_str(&explanation.title);
    out.push('\n');
    out.push_str(&"=".repeat(explanation.title.len()));
    out.push_str("\n\n");
    out.push_str(&explanation.description);
    out.push_str("\n\nRemediation\n-----------\n");
    out.push_str(&explanation.remediation);
    out.push('\n');
    out
}

/// Render the not-found message, listing everything that can be explained.
pub fn format_not_found(
    identifier: &str,
    rule_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Unknown rule_id or code: {identifier}\n\n"));
    out.push_str("Available rule_ids:\n");
    for rule_id in rule_ids {
        out.push_str(&format!("  {rule_id}\n"));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  {code}\n"));
    }
    out
}
