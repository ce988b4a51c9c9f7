use forgeaudit_domain::policy::{EffectiveConfig, FailOn, ProbePolicy};

pub const DEFAULT_PROFILE: &str = "default";

/// Known profile names, in help order.
pub const PROFILES: [&str; 2] = ["default", "strict"];

/// Preset profiles. Unknown names yield `None`; callers report the error.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "default" => Some(default_profile()),
        "strict" => Some(strict_profile()),
        _ => None,
    }
}

fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "default".to_string(),
        org: "puppetlabs".to_string(),
        host: "github.com".to_string(),
        forge_url: "https://forge.puppet.com".to_string(),
        exclude_deprecated: true,
        dedupe_repositories: false,
        fail_on: FailOn::Never,
        probe: default_probe(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        dedupe_repositories: true,
        fail_on: FailOn::Violation,
        ..default_profile()
    }
}

fn default_probe() -> ProbePolicy {
    ProbePolicy {
        enabled: true,
        base_url: "https://github.com".to_string(),
        timeout_ms: 10_000,
        retirement_marker: "puppetlabs-toy-chest".to_string(),
        parallel: false,
        premium: vec!["cem_linux".to_string(), "cem_windows".to_string()],
    }
}
