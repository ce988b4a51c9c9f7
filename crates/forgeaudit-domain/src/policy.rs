#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    /// The report is advisory; any violation yields `warn`.
    Never,
    /// Any violation yields `fail`.
    Violation,
}

#[derive(Clone, Debug)]
pub struct ProbePolicy {
    /// When false, unresolved references are filed as source problems without network access.
    pub enabled: bool,
    /// Scheme and host the probe requests go to, e.g. `https://github.com`.
    pub base_url: String,
    pub timeout_ms: u64,
    /// Path fragment that marks the retirement namespace in a redirect target.
    pub retirement_marker: String,
    pub parallel: bool,
    /// Glob patterns for premium content that is never probed nor reported.
    pub premium: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub org: String,
    pub host: String,
    pub forge_url: String,
    pub exclude_deprecated: bool,
    /// List a repository once in `missing_module_topic` even if several modules reference it.
    pub dedupe_repositories: bool,
    pub fail_on: FailOn,
    pub probe: ProbePolicy,
}
