use crate::diagnostic::{Diagnostic, Verdict};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the report envelope.
pub const SCHEMA_REPORT_V1: &str = "deplens.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The package whose analysis report was evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PackageRef {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

/// Versioned outer shape around one analysis pass.
///
/// Consumers should check `schema` before reading anything else; additive
/// changes keep the `v1` identifier, breaking changes bump it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub package: PackageRef,
    pub verdict: Verdict,
    pub counts: DiagnosticCounts,
    pub diagnostics: Vec<Diagnostic>,
}
