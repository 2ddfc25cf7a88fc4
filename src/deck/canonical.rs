//! Canonical card-name normalization

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes a raw card name into its canonical identity string.
///
/// Lowercases, NFKD-decomposes and strips combining marks (so accents and
/// diacritics do not split identities), collapses runs of whitespace to a
/// single space and trims. Blank input yields the empty string, which
/// aggregation excludes.
pub fn canonicalize(raw: &str) -> String {
    let stripped: String = raw
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
