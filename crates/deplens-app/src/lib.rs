//! Use-case orchestration for deplens.
//!
//! The application layer wires settings, domain, and rendering together. It is
//! intentionally thin; the CLI on top only parses arguments and maps results
//! to process exit codes.

#![forbid(unsafe_code)]

mod analyze;
mod explain;
mod render;

pub use analyze::{
    AnalyzeInput, AnalyzeOutput, PackageInput, run_analyze, runtime_error_report,
    verdict_exit_code,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_text, serialize_report, write_report, write_text};
