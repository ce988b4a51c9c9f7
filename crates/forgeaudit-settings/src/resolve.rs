use crate::{model::ForgeauditConfigV1, presets};
use anyhow::Context;
use forgeaudit_domain::policy::{EffectiveConfig, FailOn};
use globset::Glob;
use reqwest::Url;

/// Command-line overrides. They take precedence over the file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    /// Disable the redirect probe regardless of config.
    pub offline: bool,
    pub probe_timeout_ms: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: ForgeauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    if let Some(org) = cfg.org {
        effective.org = non_empty("org", org)?;
    }
    if let Some(host) = cfg.host {
        effective.host = non_empty("host", host)?;
    }
    if let Some(forge_url) = cfg.forge_url {
        let forge_url = validate_http_url("forge_url", &forge_url)?;
        effective.forge_url = forge_url;
    }
    if let Some(v) = cfg.exclude_deprecated {
        effective.exclude_deprecated = v;
    }
    if let Some(v) = cfg.dedupe_repositories {
        effective.dedupe_repositories = v;
    }
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    // [probe]
    let probe = cfg.probe;
    if let Some(v) = probe.enabled {
        effective.probe.enabled = v;
    }
    if let Some(base_url) = probe.base_url {
        effective.probe.base_url = validate_http_url("probe.base_url", &base_url)?;
    }
    if let Some(ms) = probe.timeout_ms {
        effective.probe.timeout_ms = ms;
    }
    if let Some(marker) = probe.retirement_marker {
        effective.probe.retirement_marker = non_empty("probe.retirement_marker", marker)?;
    }
    if let Some(v) = probe.parallel {
        effective.probe.parallel = v;
    }
    if let Some(premium) = probe.premium {
        validate_globs(&premium)?;
        effective.probe.premium = premium;
    }

    // CLI overrides
    if overrides.offline {
        effective.probe.enabled = false;
    }
    if let Some(ms) = overrides.probe_timeout_ms {
        effective.probe.timeout_ms = ms;
    }
    if effective.probe.timeout_ms == 0 {
        anyhow::bail!("probe.timeout_ms must be greater than zero");
    }

    Ok(ResolvedConfig { effective })
}

fn non_empty(key: &str, value: String) -> anyhow::Result<String> {
    if value.trim().is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    Ok(value)
}

/// Accepts an absolute `http(s)` URL with a host and drops the trailing slash.
fn validate_http_url(key: &str, value: &str) -> anyhow::Result<String> {
    let url = Url::parse(value).with_context(|| format!("{key} is not a valid URL: {value}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("{key} must use http or https: {value}");
    }
    if url.host_str().is_none_or(str::is_empty) {
        anyhow::bail!("{key} has no host: {value}");
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn validate_globs(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid premium glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "never" => Ok(FailOn::Never),
        "violation" | "violations" => Ok(FailOn::Violation),
        other => anyhow::bail!("unknown fail_on: {other} (expected never|violation)"),
    }
}
