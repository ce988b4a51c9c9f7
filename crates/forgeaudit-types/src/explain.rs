//! Explain registry for violation categories and skip codes.
//!
//! Maps category IDs and skip codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a category or skip code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the category/code.
    pub title: &'static str,
    /// What triggers it and why it matters.
    pub description: &'static str,
    /// How to fix it.
    pub remediation: &'static str,
}

/// Look up an explanation by category id or skip code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Categories
        ids::CATEGORY_MISSING_MODULE_TOPIC => Some(explain_missing_module_topic()),
        ids::CATEGORY_MISSING_SUPPORT_TIER_TOPIC => Some(explain_missing_support_tier_topic()),
        ids::CATEGORY_MISSING_README_PREAMBLE => Some(explain_missing_readme_preamble()),
        ids::CATEGORY_INVALID_OWNERSHIP => Some(explain_invalid_ownership()),
        ids::CATEGORY_BADGE_SHOULD_BE_SUPPORTED => Some(explain_badge_should_be_supported()),
        ids::CATEGORY_BADGE_SHOULD_NOT_BE_SUPPORTED => {
            Some(explain_badge_should_not_be_supported())
        }
        ids::CATEGORY_BADGE_SHOULD_BE_ADOPTABLE => Some(explain_badge_should_be_adoptable()),
        ids::CATEGORY_SOURCE_FIELD_PROBLEM => Some(explain_source_field_problem()),

        // Skip codes
        ids::SKIP_MISSING_METADATA => Some(explain_missing_metadata()),
        ids::SKIP_INVALID_PROBE_TARGET => Some(explain_invalid_probe_target()),

        _ => None,
    }
}

/// List all known category IDs.
pub fn all_category_ids() -> &'static [&'static str] {
    &[
        ids::CATEGORY_MISSING_MODULE_TOPIC,
        ids::CATEGORY_MISSING_SUPPORT_TIER_TOPIC,
        ids::CATEGORY_MISSING_README_PREAMBLE,
        ids::CATEGORY_INVALID_OWNERSHIP,
        ids::CATEGORY_BADGE_SHOULD_BE_SUPPORTED,
        ids::CATEGORY_BADGE_SHOULD_NOT_BE_SUPPORTED,
        ids::CATEGORY_BADGE_SHOULD_BE_ADOPTABLE,
        ids::CATEGORY_SOURCE_FIELD_PROBLEM,
    ]
}

/// List all known skip codes.
pub fn all_skip_codes() -> &'static [&'static str] {
    &[ids::SKIP_MISSING_METADATA, ids::SKIP_INVALID_PROBE_TARGET]
}

// --- Category explanations ---

fn explain_missing_module_topic() -> Explanation {
    Explanation {
        title: "Missing `module` Topic",
        description: "\
A Forge module's source field points at this repository, but the repository does not carry
the `module` topic.

Tooling that enumerates module repositories by topic will not see it, so it silently drops
out of CI fleets, dependency bumps, and this audit's own topic checks.",
        remediation: "\
Add the `module` topic to the repository (Settings -> About -> Topics).",
    }
}

fn explain_missing_support_tier_topic() -> Explanation {
    Explanation {
        title: "Missing Support Tier Topic",
        description: "\
The repository carries no topic stating which support tier it belongs to.

This list is produced by the repository collector and copied into the report as-is.",
        remediation: "\
Add exactly one support tier topic, for example `supported`, to the repository.",
    }
}

fn explain_missing_readme_preamble() -> Explanation {
    Explanation {
        title: "Missing README Preamble",
        description: "\
The repository README does not start with a properly formatted preamble explaining what kind
of support a user can expect from the module.

This list is produced by the repository collector and copied into the report as-is.",
        remediation: "\
Add the standard support preamble to the top of README.md.",
    }
}

fn explain_invalid_ownership() -> Explanation {
    Explanation {
        title: "Invalid Ownership File",
        description: "\
The repository's CODEOWNERS file is missing or does not parse into valid owners.

This list is produced by the repository collector and copied into the report as-is.",
        remediation: "\
Add or fix `CODEOWNERS` so every path resolves to an existing team or user.",
    }
}

fn explain_badge_should_be_supported() -> Explanation {
    Explanation {
        title: "Forge Badge Should Be Supported",
        description: "\
The module's repository carries the `supported` topic, but the Forge entry is not endorsed as
supported.

The repository is treated as the source of truth; the registry entry is behind.",
        remediation: "\
Set the Forge endorsement of the module to `supported`, or remove the `supported` topic from
the repository if support was intentionally dropped.",
    }
}

fn explain_badge_should_not_be_supported() -> Explanation {
    Explanation {
        title: "Forge Badge Should Not Be Supported",
        description: "\
The Forge entry is endorsed as supported, but its repository lacks the `supported` topic.",
        remediation: "\
Remove the Supported badge from the Forge entry, or add the `supported` topic to the
repository if the module is in fact supported.",
    }
}

fn explain_badge_should_be_adoptable() -> Explanation {
    Explanation {
        title: "Forge Module Should Be Adoptable",
        description: "\
The module's source repository no longer exists in the organization and its canonical URL
redirects into the retirement namespace (the Toy Chest).

The module is archived but still publicly reusable.",
        remediation: "\
Mark the Forge module as adoptable, update its source field to the new location, or deprecate
it on the Forge.",
    }
}

fn explain_source_field_problem() -> Explanation {
    Explanation {
        title: "Source Field Problem",
        description: "\
Either the module's source field could not be parsed, or it does not point to a valid public
repository within the organization, and the repository URL does not redirect into the
retirement namespace.

Common causes are typos, renamed repositories, private repositories, and network failures
during the single probe.",
        remediation: "\
Fix the `source` field in the module's metadata.json and publish a new release.",
    }
}

// --- Skip code explanations ---

fn explain_missing_metadata() -> Explanation {
    Explanation {
        title: "Module Metadata Missing",
        description: "\
The registry entry carries no `metadata` object at all, so it could not be classified.

The module is left out of every category and listed under skipped modules.",
        remediation: "\
Check the registry collector; every current release should expose its metadata.",
    }
}

fn explain_invalid_probe_target() -> Explanation {
    Explanation {
        title: "Invalid Probe Target",
        description: "\
The repository name extracted from the source field could not be turned into a request URL,
so the fallback probe was not sent.",
        remediation: "\
Check `probe.base_url` and `org` in forgeaudit.toml, then fix the module's source field.",
    }
}
