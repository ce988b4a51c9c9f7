//! Stable DTOs and IDs used across the forgeaudit workspace.
//!
//! This crate is intentionally boring:
//! - input records as delivered by the registry/platform collectors
//! - stable string IDs for violation categories and skip codes
//! - the emitted report envelope
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod category;
pub mod explain;
pub mod ids;
pub mod inputs;
pub mod receipt;

pub use category::ViolationCategory;
pub use explain::{Explanation, all_category_ids, all_skip_codes, lookup_explanation};
pub use inputs::{AuditInput, Endorsement, Module, ModuleMetadata, Repository};
pub use receipt::{
    AuditData, AuditReport, CategorySets, ModuleRef, RepositoryRef, SCHEMA_REPORT_V1,
    SkippedModule, ToolMeta, Verdict,
};
