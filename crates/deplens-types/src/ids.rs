//! Stable identifiers for rules and diagnostic codes.
//!
//! `rule_id` is a dotted namespace (what area of analysis fired), `code` is a
//! short snake_case discriminator within the rule. Both are load-bearing for
//! downstream consumers; renaming one is a breaking change.

/// Fixed `source` label attached to every emitted diagnostic.
pub const SOURCE_LABEL: &str = "deplens";

// Rules, in canonical pipeline order.
pub const RULE_ANALYSIS_PENDING: &str = "analysis.pending";
pub const RULE_SECURITY_ISSUES: &str = "analysis.security_issues";
pub const RULE_FORBIDDEN_LICENSE: &str = "analysis.forbidden_license";
pub const RULE_CRYPTO_ALGORITHMS: &str = "analysis.crypto_algorithms";

// Codes: analysis.pending
pub const CODE_ANALYSIS_PENDING: &str = "analysis_pending";

// Codes: analysis.security_issues
pub const CODE_KNOWN_VULNERABILITY: &str = "known_vulnerability";

// Codes: analysis.forbidden_license
pub const CODE_FORBIDDEN_LICENSE: &str = "forbidden_license";

// Codes: analysis.crypto_algorithms
pub const CODE_KNOWN_CRYPTO_ALGORITHM: &str = "known_crypto_algorithm";

// Tool-level failures (the run itself broke, not the package).
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
