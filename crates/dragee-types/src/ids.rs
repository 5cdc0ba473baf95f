//! Stable identifiers for rules and graphs.
//!
//! An id is `{namespace}/{slug}`. The slug is derived from the human label once,
//! at registration time, so ids never drift between evaluations.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Characters dropped from a label before anything else happens.
const STRIPPED_CHARS: [char; 14] = [
    '"', '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']',
];

/// Characters turned into a word separator.
const SEPARATOR_CHARS: [char; 3] = ['\'', '/', '\\'];

/// Marks left over once a label is decomposed (accents, voicing marks, vowel points, ...).
static DIACRITIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Diacritic}").expect("diacritic pattern is valid"));

/// Word separators: Unicode spaces, line terminators and the BOM, without U+0085.
static SPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("space pattern is valid")
});

/// Build the `{namespace}/{slug}` id for a rule or graph label.
///
/// ```
/// use dragee_types::ids::generate_id;
///
/// assert_eq!(generate_id("ddd", "Aggregates Allowed Dependencies"), "ddd/aggregates-allowed-dependencies");
/// assert_eq!(generate_id("", ""), "/");
/// ```
pub fn generate_id(namespace: &str, label: &str) -> String {
    format!("{namespace}/{}", slugify(label))
}

/// Normalize a human label into a lowercase, hyphenated, accent-free slug.
///
/// Steps run in a fixed order: strip special characters, decompose and drop
/// diacritics, lowercase, turn apostrophes and slashes into spaces, then join
/// the remaining words with `-`.
pub fn slugify(label: &str) -> String {
    let stripped: String = label
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();
    let decomposed: String = stripped.nfd().collect();
    let lowered = DIACRITIC.replace_all(&decomposed, "").to_lowercase();
    let separated = lowered.replace(SEPARATOR_CHARS, " ");

    SPACES
        .split(&separated)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
