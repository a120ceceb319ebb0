//! Rendering: JSON serialization, terminal text, Markdown, and file writers.

use anyhow::Context;
use camino::Utf8Path;
use deplens_types::{ReportEnvelope, Severity, Verdict};

/// Pretty JSON with a trailing newline, ready to write to a file.
pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "INFO",
        Severity::Warning => "WARN",
        Severity::Error => "ERROR",
    }
}

fn verdict_tag(verdict: &Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    }
}

/// Compact report for the terminal: one header line, one line per diagnostic.
pub fn render_text(report: &ReportEnvelope) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}-{}: {} ({} diagnostics)\n",
        report.package.name,
        report.package.version,
        verdict_tag(&report.verdict),
        report.diagnostics.len()
    ));
    for diagnostic in &report.diagnostics {
        out.push_str(&format!(
            "{:>5} {} [{}]\n",
            severity_tag(diagnostic.severity),
            diagnostic.message,
            diagnostic.code
        ));
    }
    out
}

/// Markdown report for review artifacts and PR comments.
pub fn render_markdown(report: &ReportEnvelope) -> String {
    let mut out = String::new();

    out.push_str("# Deplens report\n\n");
    out.push_str(&format!(
        "- Package: **{}-{}**\n- Verdict: **{}**\n- Diagnostics: {} ({} error, {} warning, {} info)\n\n",
        report.package.name,
        report.package.version,
        verdict_tag(&report.verdict),
        report.diagnostics.len(),
        report.counts.error,
        report.counts.warning,
        report.counts.info
    ));

    if report.diagnostics.is_empty() {
        out.push_str("No diagnostics.\n");
        return out;
    }

    out.push_str("## Diagnostics\n\n");
    for diagnostic in &report.diagnostics {
        out.push_str(&format!(
            "- [{}] `{}` {} (line {}, col {})\n",
            severity_tag(diagnostic.severity),
            diagnostic.code,
            diagnostic.message,
            diagnostic.range.start.line,
            diagnostic.range.start.character
        ));
    }

    out
}

/// Write the JSON envelope, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_text(path, &data)
}

/// Write any rendered text, creating parent directories as needed.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory: {parent}"))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("write file: {path}"))?;
    Ok(())
}
