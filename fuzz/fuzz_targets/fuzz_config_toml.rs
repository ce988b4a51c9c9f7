//! Fuzz target for `forgeaudit.toml` parsing and resolution.
//!
//! Goal: arbitrary config text should **never panic**. Parse and validation errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use forgeaudit_settings::{Overrides, parse_config_toml, resolve_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = parse_config_toml(text) else {
        return;
    };

    if let Ok(resolved) = resolve_config(cfg, Overrides::default()) {
        let e = resolved.effective;
        assert!(e.probe.timeout_ms > 0);
        assert!(!e.org.is_empty());
        assert!(!e.host.is_empty());
    }
});
