//! Canonical data model primitives for deterministic data identity.
//!
//! Arbitrarily nested, unordered values are normalized into an order-fixed
//! shape and serialized to a stable JSON string. Every byte that later
//! participates in content hashing is produced by this crate.
//!
//! ```rust
//! use dataid_canonical::{standardize, Standardized, Value};
//!
//! let value = Value::from(vec![Value::from(3), Value::from(2), Value::from(1)]);
//! assert_eq!(
//!     standardize(&value),
//!     Standardized::Canonical("[1, 2, 3]".to_string())
//! );
//! ```
//!
#![deny(missing_docs)]

/// Normalization, comparison, and standardization of nested values.
pub mod canonicalizer;
/// Error types for canonical primitives.
pub mod errors;
/// Missing-value detection ("is this cell empty").
pub mod hygiene;
/// Textual renderings used for ordering values.
pub mod render;
/// Canonical JSON serialization.
pub mod serializer;
/// String helpers (diacritics, key-style text).
pub mod text;
/// Tagged value model.
pub mod value;

pub use canonicalizer::{compare, normalize, sort_key, standardize, SortKey, Standardized};
pub use errors::CanonicalError;
pub use hygiene::{is_empty, EmptyValues};
pub use render::{repr, str_form};
pub use serializer::to_canonical_json;
pub use text::{convert_text_to_key, remove_diacritics};
pub use value::{Value, ValueKind};
