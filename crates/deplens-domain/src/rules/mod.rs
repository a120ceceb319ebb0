//! Analysis rules.
//!
//! Each rule follows the same two-step contract:
//!
//! 1. `consume`: extract this rule's slice of the report. Bound rules walk
//!    their field path; unbound rules see the whole report. Shared by every
//!    rule, never overridden.
//! 2. `produce`: turn the consumed value into zero or more diagnostics.
//!    Per-rule, and the only place rules differ.
//!
//! Consume failing means "nothing to look at", which is silence, not an error.

use crate::bind;
use crate::model::DependencyContext;
use crate::policy::EffectiveConfig;
use deplens_types::{Diagnostic, FieldPath, Severity, ids};
use serde_json::Value;

mod crypto;
mod licenses;
mod pending;
mod security;


/// The rule variants, in canonical pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    Pending,
    SecurityIssues,
    ForbiddenLicense,
    CryptoAlgorithms,
}

impl RuleKind {
    /// Canonical pipeline order. Diagnostics are reported in this order.
    pub const ALL: [RuleKind; 4] = [
        RuleKind::Pending,
        RuleKind::SecurityIssues,
        RuleKind::ForbiddenLicense,
        RuleKind::CryptoAlgorithms,
    ];

    pub fn rule_id(self) -> &'static str {
        match self {
            RuleKind::Pending => ids::RULE_ANALYSIS_PENDING,
            RuleKind::SecurityIssues => ids::RULE_SECURITY_ISSUES,
            RuleKind::ForbiddenLicense => ids::RULE_FORBIDDEN_LICENSE,
            RuleKind::CryptoAlgorithms => ids::RULE_CRYPTO_ALGORITHMS,
        }
    }

    /// Where in the report this rule reads; `None` consumes the whole report.
    pub fn binding(self) -> Option<FieldPath> {
        match self {
            RuleKind::Pending => None,
            RuleKind::SecurityIssues => {
                Some(FieldPath::parse("analyses.security_issues.summary"))
            }
            RuleKind::ForbiddenLicense => {
                Some(FieldPath::parse("analyses.source_licenses.summary.sure_licenses"))
            }
            RuleKind::CryptoAlgorithms => {
                Some(FieldPath::parse("analyses.crypto_algorithms.summary.content"))
            }
        }
    }
}

/// One rule wired for execution: a kind plus its binding descriptor.
#[derive(Clone, Debug)]
pub struct Rule {
    kind: RuleKind,
    binding: Option<FieldPath>,
}

impl Rule {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            binding: kind.binding(),
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Extract this rule's slice of `report`; `None` means not consumable.
    pub fn consume<'r>(&self, report: &'r Value) -> Option<&'r Value> {
        consume(report, self.binding.as_ref())
    }

    /// Emit diagnostics for a consumed `item` into `out`.
    ///
    /// `item` is known present; its shape is still this rule's problem.
    pub fn produce(
        &self,
        item: &Value,
        ctx: &DependencyContext,
        severity: Severity,
        cfg: &EffectiveConfig,
        out: &mut Vec<Diagnostic>,
    ) {
        match self.kind {
            RuleKind::Pending => pending::produce(item, ctx, severity, out),
            RuleKind::SecurityIssues => security::produce(item, ctx, severity, out),
            RuleKind::ForbiddenLicense => licenses::produce(item, ctx, severity, cfg, out),
            RuleKind::CryptoAlgorithms => crypto::produce(item, ctx, severity, out),
        }
    }
}

/// Shared consumption contract for every rule.
pub fn consume<'r>(report: &'r Value, binding: Option<&FieldPath>) -> Option<&'r Value> {
    match binding {
        Some(path) => bind::bind(report, path),
        None => Some(report),
    }
}
