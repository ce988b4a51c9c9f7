use crate::error::ProbeError;
use crate::fallback::RedirectProbe;
use crate::policy::{EffectiveConfig, FailOn, ProbePolicy};
use forgeaudit_types::{AuditInput, Endorsement, Module, ModuleMetadata, Repository};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn config() -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        org: "puppetlabs".to_string(),
        host: "github.com".to_string(),
        forge_url: "https://forge.puppet.com".to_string(),
        exclude_deprecated: true,
        dedupe_repositories: false,
        fail_on: FailOn::Never,
        probe: ProbePolicy {
            enabled: true,
            base_url: "https://github.com".to_string(),
            timeout_ms: 1_000,
            retirement_marker: "puppetlabs-toy-chest".to_string(),
            parallel: false,
            premium: Vec::new(),
        },
    }
}

pub fn module(slug: &str, name: &str, endorsement: Option<Endorsement>) -> Module {
    Module {
        slug: slug.to_string(),
        name: name.to_string(),
        endorsement,
        deprecated_at: None,
        metadata: Some(ModuleMetadata { source: None }),
    }
}

/// Module whose source points at `puppetlabs/<repo>` on github.com.
pub fn sourced(slug: &str, repo: &str, endorsement: Option<Endorsement>) -> Module {
    with_source(
        slug,
        &format!("https://github.com/puppetlabs/{repo}"),
        endorsement,
    )
}

pub fn with_source(slug: &str, source: &str, endorsement: Option<Endorsement>) -> Module {
    Module {
        metadata: Some(ModuleMetadata {
            source: Some(source.to_string()),
        }),
        ..module(slug, slug, endorsement)
    }
}

pub fn repo(name: &str, topics: &[&str]) -> Repository {
    Repository {
        name: name.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn input(modules: Vec<Module>, repositories: Vec<Repository>) -> AuditInput {
    AuditInput {
        modules,
        repositories,
        ..AuditInput::default()
    }
}

/// Canned final paths keyed by repository name; records every name it is asked about.
/// Names without a canned answer fail like an unreachable host.
#[derive(Debug, Default)]
pub struct StaticProbe {
    answers: HashMap<String, Result<String, ProbeError>>,
    calls: Mutex<Vec<String>>,
}

impl StaticProbe {
    pub fn redirect(mut self, name: &str, final_path: &str) -> Self {
        self.answers
            .insert(name.to_string(), Ok(final_path.to_string()));
        self
    }

    pub fn fail(mut self, name: &str, err: ProbeError) -> Self {
        self.answers.insert(name.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl RedirectProbe for StaticProbe {
    fn final_path(&self, _org: &str, name: &str) -> Result<String, ProbeError> {
        self.calls.lock().expect("calls lock").push(name.to_string());
        self.answers
            .get(name)
            .cloned()
            .unwrap_or_else(|| Err(ProbeError::Request("connection refused".to_string())))
    }
}
