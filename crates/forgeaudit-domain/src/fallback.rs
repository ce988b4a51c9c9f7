//! Fallback for modules whose source reference did not resolve.
//!
//! Decision order for one module:
//! 1. premium content (slug, name, or the name extracted for *this* module) -> skipped silently
//! 2. nothing extracted -> source field problem, no network
//! 3. probing disabled -> source field problem, no network
//! 4. one redirect probe -> adoptable if the final URL path is in the retirement namespace,
//!    source field problem otherwise (including any request failure)

use crate::error::{ProbeError, ProcessingError};
use crate::policy::EffectiveConfig;
use forgeaudit_types::Module;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Network seam for the fallback probe.
///
/// Implementations issue a single request for `<base>/<org>/<name>`, follow redirects, and
/// return the path of the final URL as parsed by the client. Non-success terminal statuses must
/// be reported as errors.
pub trait RedirectProbe: Sync {
    fn final_path(&self, org: &str, name: &str) -> Result<String, ProbeError>;
}

/// Probe that never touches the network; every lookup fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineProbe;

impl RedirectProbe for OfflineProbe {
    fn final_path(&self, _org: &str, _name: &str) -> Result<String, ProbeError> {
        Err(ProbeError::Request("probing is disabled".to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackOutcome {
    Adoptable,
    SourceProblem,
    /// Premium content: no category, no probe.
    Premium,
}

/// What to do with an unresolved module before any network access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackPlan {
    Decided(FallbackOutcome),
    Probe(String),
}

/// Compiled premium-content allow-list.
#[derive(Clone, Debug, Default)]
pub struct PremiumList {
    set: Option<GlobSet>,
}

impl PremiumList {
    /// Patterns are validated by the settings layer; anything that still fails to compile is
    /// logged and ignored.
    pub fn new(patterns: &[String]) -> Self {
        if patterns.is_empty() {
            return Self::default();
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => tracing::warn!(%pattern, %err, "ignoring invalid premium pattern"),
            }
        }
        match builder.build() {
            Ok(set) => Self { set: Some(set) },
            Err(err) => {
                tracing::warn!(%err, "premium allow-list disabled");
                Self::default()
            }
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.set.as_ref().is_some_and(|set| set.is_match(value))
    }

    /// Premium check for one module. Only the name extracted for this module is consulted.
    pub fn covers(&self, module: &Module, extracted: Option<&str>) -> bool {
        self.is_match(&module.slug)
            || self.is_match(&module.name)
            || extracted.is_some_and(|name| self.is_match(name))
    }
}

pub fn plan(
    module: &Module,
    extracted: Option<String>,
    premium: &PremiumList,
    cfg: &EffectiveConfig,
) -> FallbackPlan {
    if premium.covers(module, extracted.as_deref()) {
        return FallbackPlan::Decided(FallbackOutcome::Premium);
    }
    match extracted {
        None => FallbackPlan::Decided(FallbackOutcome::SourceProblem),
        Some(_) if !cfg.probe.enabled => FallbackPlan::Decided(FallbackOutcome::SourceProblem),
        Some(name) => FallbackPlan::Probe(name),
    }
}

/// Run the probe for `name` and classify the result.
pub fn probe(
    name: &str,
    cfg: &EffectiveConfig,
    probe: &dyn RedirectProbe,
) -> Result<FallbackOutcome, ProcessingError> {
    match probe.final_path(&cfg.org, name) {
        Ok(final_path) => {
            let retired = in_retirement_namespace(&final_path, &cfg.probe.retirement_marker);
            tracing::debug!(%name, %final_path, retired, "probe resolved");
            if retired {
                Ok(FallbackOutcome::Adoptable)
            } else {
                Ok(FallbackOutcome::SourceProblem)
            }
        }
        Err(ProbeError::InvalidUrl(url)) => Err(ProcessingError::InvalidProbeTarget {
            name: name.to_string(),
            source: ProbeError::InvalidUrl(url),
        }),
        Err(err) => {
            tracing::debug!(%name, %err, "probe failed");
            Ok(FallbackOutcome::SourceProblem)
        }
    }
}

/// Whether the final URL path contains `marker`.
pub fn in_retirement_namespace(path: &str, marker: &str) -> bool {
    !marker.is_empty() && path.contains(marker)
}
