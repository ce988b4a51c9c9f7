//! Property-based tests for the classification engine.
//!
//! These tests use proptest to verify invariants around:
//! - determinism (same input, same collections; sequential == parallel)
//! - mutual exclusion of the badge categories and of the fallback outcomes
//! - exclusion of deprecated and premium modules
//! - exact-name resolution

use crate::engine::classify;
use crate::resolve::{RepositoryIndex, SourceResolver};
use crate::test_support::{StaticProbe, config};
use forgeaudit_types::{
    AuditInput, Endorsement, Module, ModuleMetadata, ModuleRef, Repository,
};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Repository names drawn from a small pool so references collide often.
fn arb_repo_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "alpha", "beta", "gamma", "delta", "retired-one", "retired-two", "premium-x",
    ])
    .prop_map(|s| s.to_string())
}

fn arb_topics() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["module", "supported", "other"]).prop_map(|s| s.to_string()),
        0..3,
    )
}

fn arb_repository() -> impl Strategy<Value = Repository> {
    (arb_repo_name(), arb_topics()).prop_map(|(name, topics)| Repository { name, topics })
}

fn arb_endorsement() -> impl Strategy<Value = Option<Endorsement>> {
    prop_oneof![
        Just(None),
        Just(Some(Endorsement::Supported)),
        Just(Some(Endorsement::Approved)),
        Just(Some(Endorsement::Partner)),
    ]
}

fn arb_source() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("UNKNOWN".to_string())),
        arb_repo_name().prop_map(|n| Some(format!("https://github.com/puppetlabs/{n}"))),
        arb_repo_name().prop_map(|n| Some(format!("git@github.com:puppetlabs/{n}.git"))),
        arb_repo_name().prop_map(|n| Some(format!("https://github.com/elsewhere/{n}"))),
    ]
}

fn arb_modules() -> impl Strategy<Value = Vec<Module>> {
    prop::collection::vec((arb_endorsement(), arb_source(), any::<bool>()), 0..16).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (endorsement, source, deprecated))| Module {
                    slug: format!("puppetlabs-m{i}"),
                    name: format!("m{i}"),
                    endorsement,
                    deprecated_at: deprecated.then(|| "2020-01-01".to_string()),
                    metadata: Some(ModuleMetadata { source }),
                })
                .collect()
        },
    )
}

fn arb_input() -> impl Strategy<Value = AuditInput> {
    (
        arb_modules(),
        prop::collection::vec(arb_repository(), 0..6),
        prop::collection::vec("[a-z]{1,6}/[a-z]{1,6}", 0..3),
    )
        .prop_map(|(modules, repositories, unmarked)| AuditInput {
            modules,
            repositories,
            unmarked,
            ..AuditInput::default()
        })
}

fn probe() -> StaticProbe {
    StaticProbe::default()
        .redirect(
            "retired-one",
            "/puppetlabs-toy-chest/retired-one",
        )
        .redirect(
            "retired-two",
            "/puppetlabs-toy-chest/puppetlabs-retired_two",
        )
        .redirect("premium-x", "/puppetlabs-toy-chest/premium-x")
        .redirect("alpha", "/puppetlabs/alpha-renamed")
}

fn slugs(refs: &[ModuleRef]) -> HashSet<&str> {
    refs.iter().map(|m| m.slug.as_str()).collect()
}

proptest! {
    #[test]
    fn classification_is_idempotent(input in arb_input()) {
        let cfg = config();
        let first = classify(&input, &cfg, &probe());
        let second = classify(&input, &cfg, &probe());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parallel_probing_matches_sequential(input in arb_input()) {
        let sequential = classify(&input, &config(), &probe());
        let mut cfg = config();
        cfg.probe.parallel = true;
        let parallel = classify(&input, &cfg, &probe());
        prop_assert_eq!(sequential.categories, parallel.categories);
        prop_assert_eq!(sequential.stats, parallel.stats);
    }

    #[test]
    fn badge_and_fallback_categories_are_exclusive(input in arb_input()) {
        let out = classify(&input, &config(), &probe());
        let c = &out.categories;

        let should = slugs(&c.badge_should_be_supported);
        let should_not = slugs(&c.badge_should_not_be_supported);
        prop_assert!(should.is_disjoint(&should_not));

        let adoptable = slugs(&c.badge_should_be_adoptable);
        let broken = slugs(&c.source_field_problem);
        prop_assert!(adoptable.is_disjoint(&broken));

        // A module is resolved or unresolved, never both.
        let resolved: HashSet<&str> = should.union(&should_not).copied().collect();
        let unresolved: HashSet<&str> = adoptable.union(&broken).copied().collect();
        prop_assert!(resolved.is_disjoint(&unresolved));
    }

    #[test]
    fn deprecated_modules_never_appear(input in arb_input()) {
        let out = classify(&input, &config(), &probe());
        let deprecated: HashSet<&str> = input
            .modules
            .iter()
            .filter(|m| m.is_deprecated())
            .map(|m| m.slug.as_str())
            .collect();

        let c = &out.categories;
        for refs in [
            &c.badge_should_be_supported,
            &c.badge_should_not_be_supported,
            &c.badge_should_be_adoptable,
            &c.source_field_problem,
        ] {
            prop_assert!(slugs(refs).is_disjoint(&deprecated));
        }
        prop_assert_eq!(out.stats.modules_deprecated as usize, deprecated.len());
    }

    #[test]
    fn premium_names_never_reach_fallback_categories(input in arb_input()) {
        let mut cfg = config();
        cfg.probe.premium = vec!["premium-*".to_string()];
        let out = classify(&input, &cfg, &probe());

        let resolver = SourceResolver::new(&cfg.host, &cfg.org);
        let premium_slugs: HashSet<&str> = input
            .modules
            .iter()
            .filter(|m| {
                resolver.parse(m.source()).name().is_some_and(|n| n.starts_with("premium-"))
            })
            .map(|m| m.slug.as_str())
            .collect();

        prop_assert!(slugs(&out.categories.badge_should_be_adoptable).is_disjoint(&premium_slugs));
        prop_assert!(slugs(&out.categories.source_field_problem).is_disjoint(&premium_slugs));
    }

    #[test]
    fn resolution_selects_exactly_the_named_repository(
        repos in prop::collection::vec(arb_repository(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pick.get(&repos);
        let index = RepositoryIndex::new(&repos);
        let resolver = SourceResolver::new("github.com", "puppetlabs");
        let source = format!("https://github.com/puppetlabs/{}", target.name);

        let found = resolver.resolve(Some(source.as_str()), &index);
        prop_assert!(found.is_ok());
        let found = found.unwrap();
        prop_assert_eq!(&found.name, &target.name);
        // First record with that name.
        let first = repos.iter().find(|r| r.name == target.name).unwrap();
        prop_assert!(std::ptr::eq(found, first));
    }
}
