use thiserror::Error;

/// Errors raised while loading canonical configuration.
///
/// Normalization and serialization never fail; only caller-supplied
/// configuration (such as an empty-value synonym list) can be rejected.
#[derive(Debug, Error)]
pub enum CanonicalError {
    /// Configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Configuration text is not valid JSON of the expected shape.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration parsed but violates a constraint.
    #[error("{field} ('{value}') is not allowed")]
    InvalidConfig {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
