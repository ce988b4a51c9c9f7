use forgeaudit_types::ids;
use thiserror::Error;

/// Why a module's source reference did not resolve to a repository.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("source reference does not name a repository in the organization")]
    NoMatch,
    #[error("no repository named '{name}'")]
    UnknownRepository { name: String },
}

impl ResolveError {
    /// The repository name extracted before resolution failed, if the pattern matched at all.
    pub fn extracted_name(&self) -> Option<&str> {
        match self {
            ResolveError::NoMatch => None,
            ResolveError::UnknownRepository { name } => Some(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid probe url '{0}'")]
    InvalidUrl(String),
}

/// A failure that drops one module from the pass. Never aborts the run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("module has no metadata")]
    MissingMetadata,
    #[error("could not probe '{name}': {source}")]
    InvalidProbeTarget {
        name: String,
        #[source]
        source: ProbeError,
    },
}

impl ProcessingError {
    pub fn code(&self) -> &'static str {
        match self {
            ProcessingError::MissingMetadata => ids::SKIP_MISSING_METADATA,
            ProcessingError::InvalidProbeTarget { .. } => ids::SKIP_INVALID_PROBE_TARGET,
        }
    }
}
