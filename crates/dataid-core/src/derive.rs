//! Identifier derivation.
//!
//! `id = sha256(bytes)` where `bytes` is the canonical JSON text of a
//! container, the UTF-8 of a bare string, or bare byte data as-is. The compact
//! form re-hashes `"sha256=" + hexdigest` into a version-3 UUID under the
//! X.500 namespace.

use dataid_canonical::{standardize, Standardized, Value};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

use crate::digest::{sha256_hex, DigestAlg};
use crate::identifiers::{ContentId, ShortId};

/// Identifier shape requested from [`derive_id`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IdMethod {
    /// 36-character namespace UUID.
    #[default]
    Uuid,
    /// 64-character lowercase hex digest.
    Sha256,
}

impl FromStr for IdMethod {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uuid" => Ok(IdMethod::Uuid),
            "sha256" => Ok(IdMethod::Sha256),
            other => Err(IdError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for IdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdMethod::Uuid => f.write_str("uuid"),
            IdMethod::Sha256 => f.write_str("sha256"),
        }
    }
}

/// Error selecting an identifier method.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IdError {
    /// Method name is neither `uuid` nor `sha256`.
    #[error("unknown identifier method: {0}")]
    UnknownMethod(String),
}

/// Folds text into a version-3 UUID under the X.500 namespace.
pub fn convert_text_to_uuid(text: &str) -> Uuid {
    Uuid::new_v3(&Uuid::NAMESPACE_X500, text.as_bytes())
}

/// Derives the content identifier of `data`.
///
/// Returns `None` when the value cannot be turned into bytes: after
/// standardization only containers (canonical text), strings and byte data
/// qualify. `Null`, numbers, booleans and datetimes yield no identifier.
///
/// # Example
///
/// ```rust
/// use dataid_core::{derive_id, IdMethod};
/// use dataid_canonical::Value;
///
/// let id = derive_id(&Value::Seq(vec![]), IdMethod::Uuid).unwrap();
/// assert_eq!(id.as_str(), "2061443b-712a-3816-bbf6-0e31a077be9f");
/// assert!(derive_id(&Value::Null, IdMethod::Uuid).is_none());
/// ```
pub fn derive_id(data: &Value, method: IdMethod) -> Option<ContentId> {
    let bytes = match standardize(data) {
        Standardized::Canonical(text) => text.into_bytes(),
        Standardized::Scalar(Value::Str(text)) => text.into_bytes(),
        Standardized::Scalar(Value::Bytes(bytes)) => bytes,
        Standardized::Scalar(other) => {
            debug!(kind = ?other.kind(), "value has no byte form; no identifier derived");
            return None;
        }
    };

    let digest = sha256_hex(&bytes);
    let id = match method {
        IdMethod::Sha256 => ContentId::Sha256(digest),
        IdMethod::Uuid => {
            let template = format!("{}{}", DigestAlg::Sha256.prefix(), digest);
            let uuid = convert_text_to_uuid(&template);
            ContentId::Uuid(ShortId::new(uuid.hyphenated().to_string()))
        }
    };
    debug!(%method, len = bytes.len(), id = %id, "derived content identifier");
    Some(id)
}

/// Like [`derive_id`], with the method given by name (`"uuid"` or `"sha256"`).
///
/// An unrecognized method name yields `None`.
pub fn derive_id_with(data: &Value, method: &str) -> Option<ContentId> {
    match method.parse::<IdMethod>() {
        Ok(method) => derive_id(data, method),
        Err(err) => {
            debug!(error = %err, "rejected identifier method");
            None
        }
    }
}
