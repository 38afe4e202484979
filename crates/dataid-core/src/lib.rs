//! Content identifiers for arbitrary nested data.
//!
//! Identifiers are derived as `sha256(canonical_bytes(data))`, optionally
//! folded into a namespace UUID (`uuid3(X500, "sha256=" + hexdigest)`).
//! Identical logical content, whatever its key or element order, always
//! yields the identical identifier.
//!
//! ```rust
//! use dataid_core::{derive_id, IdMethod};
//! use dataid_canonical::Value;
//! use serde_json::json;
//!
//! let a = derive_id(&Value::from_json(json!({"b": [2, 1], "a": "x"})), IdMethod::Uuid);
//! let b = derive_id(&Value::from_json(json!({"a": "x", "b": [1, 2]})), IdMethod::Uuid);
//! assert_eq!(a, b);
//! ```
//!
#![deny(missing_docs)]

/// Identifier derivation from canonical data.
pub mod derive;
/// Digest algorithm primitives.
pub mod digest;
/// Identifier newtypes.
pub mod identifiers;
/// Validation errors for identifier newtypes.
pub mod validation;

pub use derive::{convert_text_to_uuid, derive_id, derive_id_with, IdError, IdMethod};
pub use digest::{sha256_hex, DigestAlg};
pub use identifiers::{ContentId, HexDigest, ShortId};
pub use validation::ValidationError;
