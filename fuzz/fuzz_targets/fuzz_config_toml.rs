//! Fuzz target for dragee.toml parsing and rule policy resolution.
//!
//! Goal: parsing and resolution **never panic**; invalid input is an error.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = dragee_settings::parse_config_toml(text)
    {
        let _ = dragee_settings::resolve_config(cfg);
    }
});
