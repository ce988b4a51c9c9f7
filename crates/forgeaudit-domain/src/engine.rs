use crate::error::ProcessingError;
use crate::fallback::{self, FallbackOutcome, FallbackPlan, PremiumList, RedirectProbe};
use crate::policy::EffectiveConfig;
use crate::report::{Classification, ClassificationStats};
use crate::resolve::{RepositoryIndex, SourceResolver};
use forgeaudit_types::{
    AuditInput, CategorySets, Module, ModuleRef, Repository, RepositoryRef, SkippedModule, ids,
};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};

/// Local (network-free) result for one module.
enum Examined<'a> {
    Resolved(&'a Repository),
    Decided(FallbackOutcome),
    Probe(String),
}

/// Classify every module of `input` into the category collections.
///
/// Modules are examined in input order. Unresolved modules that need a redirect probe are
/// probed after the local pass (in parallel when `probe.parallel` is set) and merged back in
/// input order, so the output never depends on probe scheduling.
pub fn classify(
    input: &AuditInput,
    cfg: &EffectiveConfig,
    redirect: &dyn RedirectProbe,
) -> Classification {
    let resolver = SourceResolver::new(&cfg.host, &cfg.org);
    let index = RepositoryIndex::new(&input.repositories);
    let premium = PremiumList::new(&cfg.probe.premium);

    let mut stats = ClassificationStats {
        modules_total: input.modules.len() as u32,
        ..ClassificationStats::default()
    };

    let mut examined: Vec<(&Module, Result<Examined<'_>, ProcessingError>)> = Vec::new();
    for module in &input.modules {
        if cfg.exclude_deprecated && module.is_deprecated() {
            stats.modules_deprecated += 1;
            continue;
        }
        stats.modules_audited += 1;
        examined.push((module, examine(module, &resolver, &index, &premium, cfg)));
    }

    let pending: Vec<(usize, &str)> = examined
        .iter()
        .enumerate()
        .filter_map(|(i, (_, e))| match e {
            Ok(Examined::Probe(name)) => Some((i, name.as_str())),
            _ => None,
        })
        .collect();
    stats.probes_issued = pending.len() as u32;

    let run_probe = |&(i, name): &(usize, &str)| (i, fallback::probe(name, cfg, redirect));
    let probed: BTreeMap<usize, Result<FallbackOutcome, ProcessingError>> =
        if cfg.probe.parallel {
            pending.par_iter().map(run_probe).collect()
        } else {
            pending.iter().map(run_probe).collect()
        };

    let mut categories = CategorySets {
        missing_support_tier_topic: input.incomplete.clone(),
        missing_readme_preamble: input.unmarked.clone(),
        invalid_ownership: input.unowned.clone(),
        ..CategorySets::default()
    };
    let mut flagged_repositories: HashSet<&str> = HashSet::new();
    let mut skipped = Vec::new();

    for (i, (module, outcome)) in examined.into_iter().enumerate() {
        let outcome = match outcome {
            Ok(Examined::Probe(_)) => match probed.get(&i) {
                Some(Ok(outcome)) => Ok(Placement::Fallback(*outcome)),
                Some(Err(err)) => Err(err.clone()),
                None => Ok(Placement::Fallback(FallbackOutcome::SourceProblem)),
            },
            Ok(Examined::Decided(outcome)) => Ok(Placement::Fallback(outcome)),
            Ok(Examined::Resolved(repo)) => Ok(Placement::Resolved(repo)),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(Placement::Resolved(repo)) => {
                stats.modules_resolved += 1;
                apply_resolved_rules(
                    module,
                    repo,
                    cfg.dedupe_repositories,
                    &mut flagged_repositories,
                    &mut categories,
                );
            }
            Ok(Placement::Fallback(FallbackOutcome::Adoptable)) => {
                categories.badge_should_be_adoptable.push(module_ref(module));
            }
            Ok(Placement::Fallback(FallbackOutcome::SourceProblem)) => {
                categories.source_field_problem.push(module_ref(module));
            }
            Ok(Placement::Fallback(FallbackOutcome::Premium)) => {
                stats.premium_skipped += 1;
            }
            Err(err) => {
                tracing::warn!(slug = %module.slug, error = %err, "could not process module");
                skipped.push(SkippedModule {
                    slug: module.slug.clone(),
                    code: err.code().to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    Classification {
        categories,
        skipped,
        stats,
    }
}

enum Placement<'a> {
    Resolved(&'a Repository),
    Fallback(FallbackOutcome),
}

fn examine<'a>(
    module: &Module,
    resolver: &SourceResolver,
    index: &RepositoryIndex<'a>,
    premium: &PremiumList,
    cfg: &EffectiveConfig,
) -> Result<Examined<'a>, ProcessingError> {
    let metadata = module
        .metadata
        .as_ref()
        .ok_or(ProcessingError::MissingMetadata)?;

    match resolver.resolve(metadata.source.as_deref(), index) {
        Ok(repo) => Ok(Examined::Resolved(repo)),
        Err(err) => {
            let extracted = err.extracted_name().map(str::to_string);
            tracing::debug!(slug = %module.slug, error = %err, "source did not resolve");
            match fallback::plan(module, extracted, premium, cfg) {
                FallbackPlan::Decided(outcome) => Ok(Examined::Decided(outcome)),
                FallbackPlan::Probe(name) => Ok(Examined::Probe(name)),
            }
        }
    }
}

fn apply_resolved_rules<'a>(
    module: &Module,
    repo: &'a Repository,
    dedupe: bool,
    flagged: &mut HashSet<&'a str>,
    categories: &mut CategorySets,
) {
    if !repo.has_topic(ids::TOPIC_MODULE) && (!dedupe || flagged.insert(repo.name.as_str())) {
        categories.missing_module_topic.push(RepositoryRef {
            name: repo.name.clone(),
        });
    }

    let repo_supported = repo.has_topic(ids::TOPIC_SUPPORTED);
    if !module.is_supported() && repo_supported {
        categories.badge_should_be_supported.push(module_ref(module));
    }
    if module.is_supported() && !repo_supported {
        categories
            .badge_should_not_be_supported
            .push(module_ref(module));
    }
}

fn module_ref(module: &Module) -> ModuleRef {
    ModuleRef {
        slug: module.slug.clone(),
        name: module.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::test_support::{StaticProbe, config, input, module, repo, sourced, with_source};
    use forgeaudit_types::{Endorsement, ModuleMetadata};

    fn slugs(refs: &[ModuleRef]) -> Vec<&str> {
        refs.iter().map(|m| m.slug.as_str()).collect()
    }

    #[test]
    fn clean_supported_module_triggers_nothing() {
        let input = input(
            vec![sourced("foo", "foo-bar", Some(Endorsement::Supported))],
            vec![repo("foo-bar", &["module", "supported"])],
        );
        let probe = StaticProbe::default();
        let out = classify(&input, &config(), &probe);

        assert!(out.categories.is_empty());
        assert!(out.skipped.is_empty());
        assert!(probe.calls().is_empty());
        assert_eq!(out.stats.modules_resolved, 1);
    }

    #[test]
    fn approved_module_on_supported_repo_should_be_badged_supported() {
        let input = input(
            vec![sourced("baz", "baz-repo", Some(Endorsement::Approved))],
            vec![repo("baz-repo", &["module", "supported"])],
        );
        let out = classify(&input, &config(), &StaticProbe::default());

        assert_eq!(slugs(&out.categories.badge_should_be_supported), vec!["baz"]);
        assert!(out.categories.badge_should_not_be_supported.is_empty());
        assert!(out.categories.missing_module_topic.is_empty());
    }

    #[test]
    fn supported_module_on_plain_repo_should_lose_badge() {
        let input = input(
            vec![
                sourced("a", "repo-a", Some(Endorsement::Supported)),
                sourced("b", "repo-b", None),
            ],
            vec![repo("repo-a", &["module"]), repo("repo-b", &["module"])],
        );
        let out = classify(&input, &config(), &StaticProbe::default());

        assert_eq!(
            slugs(&out.categories.badge_should_not_be_supported),
            vec!["a"]
        );
        assert!(out.categories.badge_should_be_supported.is_empty());
    }

    #[test]
    fn premium_module_with_unparseable_source_is_not_probed() {
        let mut cfg = config();
        cfg.probe.premium = vec!["qux".to_string()];
        let input = input(
            vec![with_source("qux", "see the premium portal", None)],
            Vec::new(),
        );
        let probe = StaticProbe::default();
        let out = classify(&input, &cfg, &probe);

        assert!(out.categories.is_empty());
        assert!(probe.calls().is_empty());
        assert_eq!(out.stats.premium_skipped, 1);
    }

    #[test]
    fn retired_repository_redirect_marks_module_adoptable() {
        let input = input(vec![sourced("legacy", "legacy-old", None)], Vec::new());
        let probe = StaticProbe::default().redirect(
            "legacy-old",
            "/puppetlabs-toy-chest/puppetlabs-legacy_old",
        );
        let out = classify(&input, &config(), &probe);

        assert_eq!(
            slugs(&out.categories.badge_should_be_adoptable),
            vec!["legacy"]
        );
        assert!(out.categories.source_field_problem.is_empty());
        assert_eq!(probe.calls(), vec!["legacy-old".to_string()]);
        assert_eq!(out.stats.probes_issued, 1);
    }

    #[test]
    fn network_error_files_source_field_problem() {
        let input = input(vec![sourced("broken", "broken-thing", None)], Vec::new());
        let probe = StaticProbe::default().fail(
            "broken-thing",
            ProbeError::Request("dns error".to_string()),
        );
        let out = classify(&input, &config(), &probe);

        assert_eq!(
            slugs(&out.categories.source_field_problem),
            vec!["broken"]
        );
        assert!(out.categories.badge_should_be_adoptable.is_empty());
    }

    #[test]
    fn unparseable_source_short_circuits_without_probe() {
        let input = input(vec![with_source("x", "UNKNOWN", None)], Vec::new());
        let probe = StaticProbe::default();
        let out = classify(&input, &config(), &probe);

        assert_eq!(slugs(&out.categories.source_field_problem), vec!["x"]);
        assert!(probe.calls().is_empty());
    }

    #[test]
    fn missing_source_field_is_a_source_problem_but_missing_metadata_is_skipped() {
        let no_source = module("no-source", "no-source", None);
        let no_metadata = Module {
            metadata: None,
            ..module("no-metadata", "no-metadata", None)
        };
        let after = sourced("after", "after-repo", None);
        let input = input(
            vec![no_source, no_metadata, after],
            vec![repo("after-repo", &["module"])],
        );
        let out = classify(&input, &config(), &StaticProbe::default());

        assert_eq!(
            slugs(&out.categories.source_field_problem),
            vec!["no-source"]
        );
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].slug, "no-metadata");
        assert_eq!(out.skipped[0].code, ids::SKIP_MISSING_METADATA);
        // The pass continued past the failing module.
        assert_eq!(out.stats.modules_resolved, 1);
    }

    #[test]
    fn invalid_probe_target_skips_only_that_module() {
        let input = input(
            vec![
                sourced("bad", "bad-name", None),
                sourced("fine", "fine-repo", None),
            ],
            vec![repo("fine-repo", &["module"])],
        );
        let probe = StaticProbe::default()
            .fail("bad-name", ProbeError::InvalidUrl("::".to_string()));
        let out = classify(&input, &config(), &probe);

        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].code, ids::SKIP_INVALID_PROBE_TARGET);
        assert!(out.categories.source_field_problem.is_empty());
        assert_eq!(out.stats.modules_resolved, 1);
    }

    #[test]
    fn deprecated_modules_are_excluded_entirely() {
        let mut retired = sourced("old", "missing-repo", Some(Endorsement::Supported));
        retired.deprecated_at = Some("2020-01-01 00:00:00 UTC".to_string());
        let input = input(vec![retired], Vec::new());
        let probe = StaticProbe::default();

        let out = classify(&input, &config(), &probe);
        assert!(out.categories.is_empty());
        assert!(probe.calls().is_empty());
        assert_eq!(out.stats.modules_deprecated, 1);
        assert_eq!(out.stats.modules_audited, 0);

        let mut keep = config();
        keep.exclude_deprecated = false;
        let out = classify(&input, &keep, &probe);
        assert_eq!(slugs(&out.categories.source_field_problem), vec!["old"]);
    }

    // Literal behaviour: one entry per referencing module. Dedupe is opt-in.
    #[test]
    fn missing_module_topic_lists_repository_once_per_module_unless_deduped() {
        let input = input(
            vec![
                sourced("one", "shared", None),
                sourced("two", "shared", None),
                sourced("three", "other", None),
            ],
            vec![repo("shared", &[]), repo("other", &[])],
        );

        let out = classify(&input, &config(), &StaticProbe::default());
        let names: Vec<&str> = out
            .categories
            .missing_module_topic
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["shared", "shared", "other"]);

        let mut dedupe = config();
        dedupe.dedupe_repositories = true;
        let out = classify(&input, &dedupe, &StaticProbe::default());
        let names: Vec<&str> = out
            .categories
            .missing_module_topic
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["shared", "other"]);
    }

    #[test]
    fn precomputed_lists_are_copied_through_in_order() {
        let input = AuditInput {
            unmarked: vec!["puppetlabs/b".to_string(), "puppetlabs/a".to_string()],
            incomplete: vec!["puppetlabs/c".to_string()],
            unowned: vec!["puppetlabs/d".to_string()],
            ..AuditInput::default()
        };
        let out = classify(&input, &config(), &StaticProbe::default());

        assert_eq!(
            out.categories.missing_readme_preamble,
            vec!["puppetlabs/b".to_string(), "puppetlabs/a".to_string()]
        );
        assert_eq!(
            out.categories.missing_support_tier_topic,
            vec!["puppetlabs/c".to_string()]
        );
        assert_eq!(
            out.categories.invalid_ownership,
            vec!["puppetlabs/d".to_string()]
        );
    }

    // The premium decision for a module must not see a name extracted for an earlier module.
    #[test]
    fn premium_check_does_not_leak_between_modules() {
        let mut cfg = config();
        cfg.probe.premium = vec!["premium-repo".to_string()];
        let input = input(
            vec![
                sourced("first", "premium-repo", None),
                with_source("second", "no reference here", None),
                Module {
                    metadata: Some(ModuleMetadata { source: None }),
                    ..module("third", "third", None)
                },
            ],
            Vec::new(),
        );
        let probe = StaticProbe::default();
        let out = classify(&input, &cfg, &probe);

        assert_eq!(out.stats.premium_skipped, 1);
        assert_eq!(
            slugs(&out.categories.source_field_problem),
            vec!["second", "third"]
        );
        assert!(probe.calls().is_empty());
    }

    #[test]
    fn offline_mode_files_unresolved_names_as_source_problems() {
        let mut cfg = config();
        cfg.probe.enabled = false;
        let input = input(vec![sourced("gone", "gone-repo", None)], Vec::new());
        let probe = StaticProbe::default()
            .redirect("gone-repo", "/puppetlabs-toy-chest/gone-repo");
        let out = classify(&input, &cfg, &probe);

        assert_eq!(slugs(&out.categories.source_field_problem), vec!["gone"]);
        assert!(probe.calls().is_empty());
        assert_eq!(out.stats.probes_issued, 0);
    }

    #[test]
    fn parallel_probing_preserves_module_order() {
        let modules: Vec<Module> = (0..24)
            .map(|i| sourced(&format!("m{i:02}"), &format!("r{i:02}"), None))
            .collect();
        let mut probe = StaticProbe::default();
        for i in (0..24).step_by(3) {
            probe = probe.redirect(
                &format!("r{i:02}"),
                &format!("/puppetlabs-toy-chest/r{i:02}"),
            );
        }
        let input = input(modules, Vec::new());

        let sequential = classify(&input, &config(), &probe);
        let mut cfg = config();
        cfg.probe.parallel = true;
        let parallel = classify(&input, &cfg, &probe);

        assert_eq!(sequential.categories, parallel.categories);
        assert_eq!(sequential.categories.badge_should_be_adoptable.len(), 8);
        assert_eq!(sequential.categories.source_field_problem.len(), 16);
    }
}
