//! Entry point: one report in, verdict and diagnostics out.

use crate::model::DependencyContext;
use crate::pipeline::Pipeline;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{AnalysisReport, SeverityCounts};
use deplens_types::{Diagnostic, Severity, Verdict};
use serde_json::Value;

/// Evaluate one report: run the default pipeline, then derive verdict and counts.
pub fn evaluate(report: &Value, ctx: &DependencyContext, cfg: &EffectiveConfig) -> AnalysisReport {
    let diagnostics = Pipeline::with_default_rules(ctx, cfg).run(report);

    let verdict = compute_verdict(&diagnostics, cfg.fail_on);
    let counts = SeverityCounts::from_diagnostics(&diagnostics);

    AnalysisReport {
        verdict,
        diagnostics,
        counts,
    }
}

fn compute_verdict(diagnostics: &[Diagnostic], fail_on: FailOn) -> Verdict {
    let has_error = diagnostics.iter().any(|d| d.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warning = diagnostics.iter().any(|d| d.severity == Severity::Warning);
    if has_warning {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}
