//! Reference resolution: module source field -> repository record.

use crate::error::ResolveError;
use forgeaudit_types::Repository;
use regex::Regex;
use std::collections::HashMap;

/// Result of parsing a free-text source reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceRef {
    Matched(String),
    NoMatch,
}

impl SourceRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            SourceRef::Matched(name) => Some(name),
            SourceRef::NoMatch => None,
        }
    }
}

/// Extracts `<host>[/:]<org>/<name>` from source references.
///
/// The pattern is compiled once per resolver; build one per run and reuse it for every module.
#[derive(Clone, Debug)]
pub struct SourceResolver {
    pattern: Regex,
}

impl SourceResolver {
    pub fn new(host: &str, org: &str) -> Self {
        // Both segments are escaped, so the pattern is always valid.
        let pattern = Regex::new(&format!(
            r"{}[/:]{}/([\w-]+)",
            regex::escape(host),
            regex::escape(org)
        ))
        .expect("escaped source reference pattern must compile");
        Self { pattern }
    }

    pub fn parse(&self, source: Option<&str>) -> SourceRef {
        source
            .and_then(|s| self.pattern.captures(s))
            .and_then(|caps| caps.get(1))
            .map(|m| SourceRef::Matched(m.as_str().to_string()))
            .unwrap_or(SourceRef::NoMatch)
    }

    pub fn resolve<'a>(
        &self,
        source: Option<&str>,
        repositories: &RepositoryIndex<'a>,
    ) -> Result<&'a Repository, ResolveError> {
        match self.parse(source) {
            SourceRef::NoMatch => Err(ResolveError::NoMatch),
            SourceRef::Matched(name) => repositories
                .get(&name)
                .ok_or(ResolveError::UnknownRepository { name }),
        }
    }
}

/// Exact-name lookup over the repository input. The first record with a given name wins.
#[derive(Clone, Debug, Default)]
pub struct RepositoryIndex<'a> {
    by_name: HashMap<&'a str, &'a Repository>,
}

impl<'a> RepositoryIndex<'a> {
    pub fn new(repositories: &'a [Repository]) -> Self {
        let mut by_name = HashMap::with_capacity(repositories.len());
        for repo in repositories {
            by_name.entry(repo.name.as_str()).or_insert(repo);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a Repository> {
        self.by_name.get(name).copied()
    }
}
