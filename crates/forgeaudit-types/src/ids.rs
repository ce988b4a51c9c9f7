//! Stable identifiers for violation categories and skip codes.
//!
//! Category ids are a dotted namespace: `repo.*` categories are keyed on a hosting-platform
//! repository, `forge.*` categories are keyed on a registry module. Skip codes are short
//! snake_case discriminators.

// Categories: repository side
pub const CATEGORY_MISSING_MODULE_TOPIC: &str = "repo.missing_module_topic";
pub const CATEGORY_MISSING_SUPPORT_TIER_TOPIC: &str = "repo.missing_support_tier_topic";
pub const CATEGORY_MISSING_README_PREAMBLE: &str = "repo.missing_readme_preamble";
pub const CATEGORY_INVALID_OWNERSHIP: &str = "repo.invalid_ownership";

// Categories: registry side
pub const CATEGORY_BADGE_SHOULD_BE_SUPPORTED: &str = "forge.badge_should_be_supported";
pub const CATEGORY_BADGE_SHOULD_NOT_BE_SUPPORTED: &str = "forge.badge_should_not_be_supported";
pub const CATEGORY_BADGE_SHOULD_BE_ADOPTABLE: &str = "forge.badge_should_be_adoptable";
pub const CATEGORY_SOURCE_FIELD_PROBLEM: &str = "forge.source_field_problem";

// Skip codes: modules dropped from the pass
pub const SKIP_MISSING_METADATA: &str = "missing_metadata";
pub const SKIP_INVALID_PROBE_TARGET: &str = "invalid_probe_target";

// Topics consulted on repositories
pub const TOPIC_MODULE: &str = "module";
pub const TOPIC_SUPPORTED: &str = "supported";
