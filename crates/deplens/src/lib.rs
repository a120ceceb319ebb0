//! Facade for embedding deplens.
//!
//! Re-exports the diagnostics pipeline and the stable DTOs so hosts (editor
//! integrations, CI wrappers) depend on one crate.

#![forbid(unsafe_code)]

pub use deplens_domain::{Pipeline, bind, evaluate, model, policy, report, rules};
pub use deplens_types::{
    Diagnostic, DiagnosticCounts, FieldPath, PackageRef, Position, Range, ReportEnvelope,
    SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, explain, ids,
};
