use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

use crate::hygiene::is_empty;
use crate::value::Value;

fn non_key_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\s]+").expect("invalid regex"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("invalid regex"))
}

/// Strips diacritical marks (`zażółć` becomes `zazolc`).
///
/// `ł`/`Ł` have no decomposition and are mapped explicitly; everything else
/// is NFKD-decomposed and combining marks are dropped.
pub fn remove_diacritics(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'ł' => 'l',
            'Ł' => 'L',
            other => other,
        })
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// Converts free text to an identifier-style key (`"  Zażółć gęślą! "` becomes `zazolc_gesla`).
///
/// Returns `None` when the text counts as missing (see [`is_empty`]).
pub fn convert_text_to_key(input: &str) -> Option<String> {
    if is_empty(&Value::from(input)) {
        return None;
    }
    let folded = remove_diacritics(input).to_lowercase();
    let cleaned = non_key_chars().replace_all(folded.trim(), " ");
    let key = whitespace_runs().replace_all(cleaned.trim(), "_");
    Some(key.into_owned())
}
