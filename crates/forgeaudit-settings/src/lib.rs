//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{ForgeauditConfigV1, ProbeConfig};
pub use presets::{DEFAULT_PROFILE, PROFILES};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `forgeaudit.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ForgeauditConfigV1> {
    let cfg: ForgeauditConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (preset + file + overrides).
pub fn resolve_config(
    cfg: ForgeauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
