use crate::ViolationCategory;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for forgeaudit reports.
pub const SCHEMA_REPORT_V1: &str = "forgeaudit.report.v1";

/// Verdict is advisory: `fail` only appears when the profile asks for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// A registry module as it appears in a category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ModuleRef {
    pub slug: String,
    pub name: String,
}

/// A hosting-platform repository as it appears in a category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RepositoryRef {
    pub name: String,
}

/// The category collections produced by one classification pass.
///
/// Each collection keeps first-encountered order. The three identifier lists are copied
/// through from the run input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySets {
    #[serde(default)]
    pub missing_module_topic: Vec<RepositoryRef>,
    #[serde(default)]
    pub missing_support_tier_topic: Vec<String>,
    #[serde(default)]
    pub missing_readme_preamble: Vec<String>,
    #[serde(default)]
    pub invalid_ownership: Vec<String>,
    #[serde(default)]
    pub badge_should_be_supported: Vec<ModuleRef>,
    #[serde(default)]
    pub badge_should_not_be_supported: Vec<ModuleRef>,
    #[serde(default)]
    pub badge_should_be_adoptable: Vec<ModuleRef>,
    #[serde(default)]
    pub source_field_problem: Vec<ModuleRef>,
}

impl CategorySets {
    pub fn len_of(&self, category: ViolationCategory) -> usize {
        match category {
            ViolationCategory::MissingModuleTopic => self.missing_module_topic.len(),
            ViolationCategory::MissingSupportTierTopic => self.missing_support_tier_topic.len(),
            ViolationCategory::MissingReadmePreamble => self.missing_readme_preamble.len(),
            ViolationCategory::InvalidOwnership => self.invalid_ownership.len(),
            ViolationCategory::BadgeShouldBeSupported => self.badge_should_be_supported.len(),
            ViolationCategory::BadgeShouldNotBeSupported => {
                self.badge_should_not_be_supported.len()
            }
            ViolationCategory::BadgeShouldBeAdoptable => self.badge_should_be_adoptable.len(),
            ViolationCategory::SourceFieldProblem => self.source_field_problem.len(),
        }
    }

    /// Module-keyed collection for `category`, or `None` for repository-keyed categories.
    pub fn modules_in(&self, category: ViolationCategory) -> Option<&[ModuleRef]> {
        match category {
            ViolationCategory::BadgeShouldBeSupported => {
                Some(self.badge_should_be_supported.as_slice())
            }
            ViolationCategory::BadgeShouldNotBeSupported => {
                Some(self.badge_should_not_be_supported.as_slice())
            }
            ViolationCategory::BadgeShouldBeAdoptable => {
                Some(self.badge_should_be_adoptable.as_slice())
            }
            ViolationCategory::SourceFieldProblem => Some(self.source_field_problem.as_slice()),
            _ => None,
        }
    }

    pub fn total(&self) -> usize {
        ViolationCategory::ALL
            .into_iter()
            .map(|c| self.len_of(c))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A module dropped from the pass because of an unexpected per-module failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkippedModule {
    pub slug: String,
    pub code: String,
    pub message: String,
}

/// forgeaudit-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AuditData {
    pub profile: String,

    /// Link context so the report can be re-rendered without the config.
    pub org: String,
    pub host: String,
    pub forge_url: String,

    pub modules_total: u32,
    pub modules_audited: u32,
    pub modules_deprecated: u32,
    pub repositories_total: u32,

    pub probes_issued: u32,
    pub premium_skipped: u32,

    pub violations_total: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub categories: CategorySets,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedModule>,
    pub data: AuditData,
}
