//! Use case orchestration for forgeaudit.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! probe, and render layers. It stays thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod render;
mod report;

pub use audit::{
    AuditOutput, AuditRunInput, parse_input_json, run_audit, run_audit_with_probe,
    verdict_exit_code,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, write_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
