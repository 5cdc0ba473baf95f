//! Fuzz target for rule/graph identifier generation.
//!
//! Goal: `generate_id` never panics and always yields `namespace/slug`
//! where the slug has no whitespace, no diacritic and none of the stripped
//! punctuation.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_generate_id
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dragee_types::generate_id;
use libfuzzer_sys::fuzz_target;
use regex::Regex;
use std::sync::LazyLock;

static DIACRITIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Diacritic}").unwrap());

#[derive(Arbitrary, Debug)]
struct IdInput {
    namespace: String,
    label: String,
}

fuzz_target!(|input: IdInput| {
    if input.namespace.len() > 64 || input.label.len() > 512 {
        return;
    }

    let id = generate_id(&input.namespace, &input.label);
    let prefix = format!("{}/", input.namespace);
    assert!(id.starts_with(&prefix));

    let slug = &id[prefix.len()..];
    // U+0085 is not a word separator
    assert!(!slug.chars().any(|c| c.is_whitespace() && c != '\u{85}'));
    assert!(!slug.contains('\u{FEFF}'));
    assert!(!DIACRITIC.is_match(slug));
    assert!(!slug.chars().any(|c| ".*+?^${}()|[]/\\'".contains(c)));

    // stable on repeated calls
    assert_eq!(id, generate_id(&input.namespace, &input.label));
});
