//! Fuzz target for the premium-content allow-list.
//!
//! Goal: compiling arbitrary patterns and matching arbitrary names should **never panic**.
//! Invalid patterns are dropped, not fatal.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_premium_globs
//! ```

#![no_main]

use arbitrary::Arbitrary;
use forgeaudit_domain::PremiumList;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct PremiumInput {
    patterns: Vec<String>,
    candidates: Vec<String>,
}

fuzz_target!(|input: PremiumInput| {
    if input.patterns.len() > 20 || input.candidates.len() > 100 {
        return;
    }

    let patterns: Vec<String> = input
        .patterns
        .into_iter()
        .filter(|p| p.len() <= 256)
        .collect();

    let premium = PremiumList::new(&patterns);
    for candidate in input.candidates.iter().filter(|c| c.len() <= 512) {
        let _ = premium.is_match(candidate);
    }

    if patterns.is_empty() {
        assert!(input.candidates.iter().all(|c| !premium.is_match(c)));
    }
});
