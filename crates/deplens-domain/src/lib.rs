//! Pure diagnostics extraction over dependency-analysis reports.
//!
//! Input: one loosely structured report (JSON), the identity of the package
//! being edited, and an effective configuration. Output: ordered diagnostics,
//! a verdict, and severity counts. No IO happens in this crate.

#![forbid(unsafe_code)]

pub mod bind;
pub mod model;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;
mod fingerprint;
mod pipeline;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub mod test_support;

pub use bind::bind;
pub use engine::evaluate;
pub use pipeline::Pipeline;
