//! Fuzz target for source reference extraction and resolution.
//!
//! Goal: parsing and resolving a free-text source field should **never panic**, and any
//! extracted name must be a single non-empty path segment.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_source_reference
//! ```

#![no_main]

use arbitrary::Arbitrary;
use forgeaudit_domain::{RepositoryIndex, SourceResolver};
use forgeaudit_types::Repository;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct SourceInput {
    host: String,
    org: String,
    source: Option<String>,
    repositories: Vec<String>,
}

fuzz_target!(|input: SourceInput| {
    if input.host.len() > 64 || input.org.len() > 64 || input.repositories.len() > 50 {
        return;
    }
    if input.source.as_ref().is_some_and(|s| s.len() > 4096) {
        return;
    }

    let resolver = SourceResolver::new(&input.host, &input.org);
    let parsed = resolver.parse(input.source.as_deref());
    if let Some(name) = parsed.name() {
        assert!(!name.is_empty());
        assert!(!name.contains(['/', ':', '.']));
        assert!(!name.chars().any(char::is_whitespace));
    }

    let repositories: Vec<Repository> = input
        .repositories
        .into_iter()
        .map(|name| Repository {
            name,
            topics: Vec::new(),
        })
        .collect();
    let index = RepositoryIndex::new(&repositories);
    if let Ok(repo) = resolver.resolve(input.source.as_deref(), &index) {
        assert_eq!(Some(repo.name.as_str()), parsed.name());
    }
});
