//! Aggregated outcome of one analysis pass.

use deplens_types::{Diagnostic, Severity, Verdict};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut counts = SeverityCounts::default();
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.info + self.warning + self.error
    }
}

/// What `evaluate` hands back to the application layer.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub verdict: Verdict,
    pub diagnostics: Vec<Diagnostic>,
    pub counts: SeverityCounts,
}
