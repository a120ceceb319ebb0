//! Stable DTOs and identifiers shared across the deplens workspace.
//!
//! Everything in this crate is serialization-facing: diagnostics, the report
//! envelope, rule IDs, and the explanation registry. Business logic lives in
//! `deplens-domain`; this crate must stay boring and dependency-light.

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod envelope;
pub mod explain;
pub mod ids;
pub mod path;

pub use diagnostic::{Diagnostic, Position, Range, Severity, Verdict};
pub use envelope::{
    DiagnosticCounts, PackageRef, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta,
};
pub use explain::{Explanation, lookup_explanation};
pub use path::FieldPath;
