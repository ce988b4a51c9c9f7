//! The `audit` use case: resolve config, classify, and produce a report.

use anyhow::Context;
use forgeaudit_domain::{OfflineProbe, RedirectProbe};
use forgeaudit_probe::HttpProbe;
use forgeaudit_settings::{ForgeauditConfigV1, Overrides, ResolvedConfig};
use forgeaudit_types::{AuditData, AuditInput, AuditReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditRunInput<'a> {
    /// Input document contents (`AuditInput` JSON).
    pub input_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: AuditReport,
    pub resolved_config: ResolvedConfig,
}

pub fn parse_input_json(text: &str) -> anyhow::Result<AuditInput> {
    serde_json::from_str(text).context("parse audit input json")
}

/// Run the audit with the HTTP probe, or without network when probing is disabled.
pub fn run_audit(input: AuditRunInput<'_>) -> anyhow::Result<AuditOutput> {
    let resolved = resolve(&input)?;
    let probe = &resolved.effective.probe;
    if probe.enabled {
        let http = HttpProbe::new(&probe.base_url, probe.timeout_ms)
            .context("build probe client")?;
        audit(input.input_text, resolved, &http)
    } else {
        audit(input.input_text, resolved, &OfflineProbe)
    }
}

/// Run the audit against a caller-supplied probe.
pub fn run_audit_with_probe(
    input: AuditRunInput<'_>,
    redirect: &dyn RedirectProbe,
) -> anyhow::Result<AuditOutput> {
    let resolved = resolve(&input)?;
    audit(input.input_text, resolved, redirect)
}

fn resolve(input: &AuditRunInput<'_>) -> anyhow::Result<ResolvedConfig> {
    // Empty config is allowed; defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        ForgeauditConfigV1::default()
    } else {
        forgeaudit_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    forgeaudit_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")
}

fn audit(
    input_text: &str,
    resolved: ResolvedConfig,
    redirect: &dyn RedirectProbe,
) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();
    let input = parse_input_json(input_text)?;

    let effective = &resolved.effective;
    let classification = forgeaudit_domain::classify(&input, effective, redirect);
    let verdict = classification.verdict(effective.fail_on);
    let finished_at = OffsetDateTime::now_utc();

    let stats = &classification.stats;
    let data = AuditData {
        profile: effective.profile.clone(),
        org: effective.org.clone(),
        host: effective.host.clone(),
        forge_url: effective.forge_url.clone(),
        modules_total: stats.modules_total,
        modules_audited: stats.modules_audited,
        modules_deprecated: stats.modules_deprecated,
        repositories_total: input.repositories.len() as u32,
        probes_issued: stats.probes_issued,
        premium_skipped: stats.premium_skipped,
        violations_total: classification.categories.total() as u32,
    };

    tracing::info!(
        profile = %effective.profile,
        verdict = ?verdict,
        modules = data.modules_audited,
        violations = data.violations_total,
        skipped = classification.skipped.len(),
        probes = data.probes_issued,
        "audit finished"
    );

    let report = AuditReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "forgeaudit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        categories: classification.categories,
        skipped: classification.skipped,
        data,
    };

    Ok(AuditOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass | Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
