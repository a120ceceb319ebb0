//! The analyze use case: one report in, one report envelope out.

use anyhow::Context;
use deplens_domain::model::{DependencyContext, ManifestField};
use deplens_domain::report::AnalysisReport;
use deplens_settings::{DeplensConfigV1, Overrides, ResolvedConfig};
use deplens_types::{
    Diagnostic, DiagnosticCounts, PackageRef, Position, Range, ReportEnvelope,
    SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

/// Package identity and version position as supplied by the host.
#[derive(Clone, Debug)]
pub struct PackageInput {
    pub name: String,
    pub version: String,
    /// Zero-based manifest line of the version token, when known.
    pub version_line: Option<u32>,
    /// Zero-based manifest column of the version token, when known.
    pub version_col: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct AnalyzeInput<'a> {
    /// Raw report JSON for one dependency.
    pub report_text: &'a str,
    /// `deplens.toml` contents; empty string when no config exists.
    pub config_text: &'a str,
    pub overrides: Overrides,
    pub package: PackageInput,
}

#[derive(Clone, Debug)]
pub struct AnalyzeOutput {
    pub report: ReportEnvelope,
    pub resolved_config: ResolvedConfig,
}

/// Parse config and report, run the pipeline, and wrap the result.
pub fn run_analyze(input: AnalyzeInput<'_>) -> anyhow::Result<AnalyzeOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        DeplensConfigV1::default()
    } else {
        deplens_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        deplens_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    let report: serde_json::Value =
        serde_json::from_str(input.report_text).context("parse report json")?;

    let ctx = dependency_context(&input.package);
    let AnalysisReport {
        verdict,
        diagnostics,
        counts,
    } = deplens_domain::evaluate(&report, &ctx, &resolved.effective);

    let finished_at = OffsetDateTime::now_utc();

    let envelope = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        package: PackageRef {
            name: input.package.name.clone(),
            version: input.package.version.clone(),
        },
        verdict,
        counts: DiagnosticCounts {
            info: counts.info,
            warning: counts.warning,
            error: counts.error,
        },
        diagnostics,
    };

    Ok(AnalyzeOutput {
        report: envelope,
        resolved_config: resolved,
    })
}

/// Build the context the rules see from host-supplied package input.
///
/// The version range covers the version token when a position is known and
/// collapses to the document start otherwise.
fn dependency_context(pkg: &PackageInput) -> DependencyContext {
    let version_range = match (pkg.version_line, pkg.version_col) {
        (None, None) => Range::default(),
        (line, col) => {
            let line = line.unwrap_or(0);
            let col = col.unwrap_or(0);
            Range::new(
                Position::new(line, col),
                Position::new(line, col + pkg.version.len() as u32),
            )
        }
    };
    let name_range = Range::new(
        Position::new(version_range.start.line, 0),
        Position::new(version_range.start.line, pkg.name.len() as u32),
    );

    DependencyContext::new(
        ManifestField::new(pkg.name.as_str(), name_range),
        ManifestField::new(pkg.version.as_str(), version_range),
    )
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "deplens".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Envelope emitted when the analyze use case itself fails.
///
/// Keeps the output contract intact for consumers that always read the report
/// file, whatever happened to the run.
pub fn runtime_error_report(package: Option<PackageRef>, message: &str) -> ReportEnvelope {
    let now = OffsetDateTime::now_utc();
    let diagnostic = Diagnostic {
        severity: Severity::Error,
        rule_id: ids::RULE_TOOL_RUNTIME.to_string(),
        code: ids::CODE_RUNTIME_ERROR.to_string(),
        message: message.to_string(),
        range: Range::default(),
        source: ids::SOURCE_LABEL.to_string(),
        fingerprint: None,
        data: serde_json::Value::Null,
    };

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        package: package.unwrap_or_else(|| PackageRef {
            name: "unknown".to_string(),
            version: "unknown".to_string(),
        }),
        verdict: Verdict::Fail,
        counts: DiagnosticCounts {
            info: 0,
            warning: 0,
            error: 1,
        },
        diagnostics: vec![diagnostic],
    }
}

/// Process exit code for a verdict: pass and warn exit 0, fail exits 2.
///
/// Exit 1 is reserved for runtime errors and handled by the caller.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass | Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
