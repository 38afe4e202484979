use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use crate::errors::CanonicalError;
use crate::render::str_form;
use crate::text::remove_diacritics;
use crate::value::Value;

/// Synonyms of "missing data" recognised by default.
pub const DEFAULT_EMPTY_VALUES: &[&str] = &[
    "",
    "brak",
    "brakdanych",
    "brakwartosci",
    "bd",
    "none",
    "null",
    "nan",
    "nat",
    "empty",
    "missing",
    "na",
    "novalue",
    "notapplicable",
];

fn non_alnum() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z\d]+").expect("invalid regex"))
}

/// Configurable list of tokens that mark a value as missing.
///
/// A value is missing when its textual form, lower-cased and stripped of
/// every character outside `[a-z0-9]`, equals one of the tokens. `None`,
/// `NaN` and blank strings are therefore missing under the default list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmptyValues(Vec<String>);

impl Default for EmptyValues {
    fn default() -> Self {
        Self(DEFAULT_EMPTY_VALUES.iter().map(|s| s.to_string()).collect())
    }
}

impl EmptyValues {
    /// Creates a list from explicit tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// Tokens in the list.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Parses a JSON array of strings.
    pub fn from_json_str(json: &str) -> Result<Self, CanonicalError> {
        let values: Self = serde_json::from_str(json)?;
        values.validate()?;
        Ok(values)
    }

    /// Loads the list from a file path, or from inline JSON when no such file exists.
    pub fn load(source: &str) -> Result<Self, CanonicalError> {
        let path = Path::new(source);
        if path.exists() {
            debug!(path = %path.display(), "loading empty-value list from file");
            let text = std::fs::read_to_string(path).map_err(|source_err| CanonicalError::Io {
                path: path.display().to_string(),
                source: source_err,
            })?;
            return Self::from_json_str(&text);
        }
        Self::from_json_str(source)
    }

    /// Tokens are compared against cleaned text, so they must be cleaned too.
    fn validate(&self) -> Result<(), CanonicalError> {
        match self.0.iter().find(|t| non_alnum().is_match(t)) {
            Some(token) => Err(CanonicalError::InvalidConfig {
                field: "empty_values",
                value: token.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Checks whether `value` counts as missing data.
    ///
    /// With `fast_check` disabled, diacritics are stripped before matching
    /// (so `brak wartości` matches `brakwartosci`).
    pub fn is_empty(&self, value: &Value, fast_check: bool) -> bool {
        let mut text = str_form(value).to_lowercase();
        if !fast_check {
            text = remove_diacritics(&text);
        }
        let cleaned = non_alnum().replace_all(&text, "");
        self.0.iter().any(|token| token.as_str() == cleaned)
    }
}

/// Checks `value` against the default list with a fast check.
pub fn is_empty(value: &Value) -> bool {
    EmptyValues::default().is_empty(value, true)
}
