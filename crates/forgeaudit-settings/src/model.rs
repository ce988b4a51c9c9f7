use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `forgeaudit.toml` schema v1.
///
/// Every key is optional; anything left out comes from the selected profile. Unknown keys are
/// rejected so a misspelled option does not silently fall back to its default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ForgeauditConfigV1 {
    /// Optional schema string for tooling (`forgeaudit.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `default` or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Organization that owns the module repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    /// Source hosting domain embedded in module source references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Registry base URL used for module links in the Markdown report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forge_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_deprecated: Option<bool>,

    /// List each repository at most once under `missing_module_topic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedupe_repositories: Option<bool>,

    /// When the verdict is `fail`: `never` (default) or `violation`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    #[serde(default)]
    pub probe: ProbeConfig,
}

/// `[probe]` table: the fallback redirect lookup for unresolved source references.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Scheme and host the lookup is sent to, e.g. `https://github.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Path fragment of the retirement namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retirement_marker: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    /// Glob patterns for premium content. Replaces the preset list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<Vec<String>>,
}
