use thiserror::Error;

/// Errors raised while assembling observation tables.
///
/// Graph construction and grouping never fail on data; malformed or fully
/// missing input simply produces an empty result.
#[derive(Error, Debug)]
pub enum LinkageError {
    /// A row does not have one cell per column.
    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnCount {
        /// Zero-based row index.
        row: usize,
        /// Number of columns in the table.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
    /// Input JSON is not an array of row arrays.
    #[error("invalid observation JSON: {0}")]
    InvalidShape(String),
    /// Input text is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
