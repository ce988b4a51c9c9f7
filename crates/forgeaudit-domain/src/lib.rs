//! Pure reconciliation and classification (no IO).
//!
//! Input: modules, repositories, and the precomputed identifier lists.
//! Output: category collections + skipped modules + run statistics.
//!
//! The single network interaction, the fallback redirect probe, is reached through the
//! [`fallback::RedirectProbe`] trait so this crate stays free of IO.

#![forbid(unsafe_code)]

pub mod error;
pub mod fallback;
pub mod policy;
pub mod report;
pub mod resolve;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::classify;
pub use error::{ProbeError, ProcessingError, ResolveError};
pub use fallback::{FallbackOutcome, OfflineProbe, PremiumList, RedirectProbe};
pub use report::{Classification, ClassificationStats};
pub use resolve::{RepositoryIndex, SourceRef, SourceResolver};
