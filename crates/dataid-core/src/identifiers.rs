use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new instance without validation; callers are responsible for conformity.
            pub fn new(value: String) -> Self {
                Self(value)
            }

            /// Parses a validated identifier from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if !Regex::new($pattern).expect("invalid regex").is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

newtype!(
    HexDigest,
    "Lowercase hex SHA-256 digest (pattern: `[0-9a-f]{64}`).",
    r"^[0-9a-f]{64}$"
);
newtype!(
    ShortId,
    "Hyphenated namespace UUID, 8-4-4-4-12 lowercase hex groups (36 characters).",
    r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
);

/// Identifier derived solely from data content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentId {
    /// Full hex digest.
    Sha256(HexDigest),
    /// Compact namespace UUID.
    Uuid(ShortId),
}

impl ContentId {
    /// Parses either identifier shape.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if let Ok(digest) = HexDigest::parse(value) {
            return Ok(ContentId::Sha256(digest));
        }
        ShortId::parse(value).map(ContentId::Uuid)
    }

    /// Textual identifier.
    pub fn as_str(&self) -> &str {
        match self {
            ContentId::Sha256(digest) => digest.as_ref(),
            ContentId::Uuid(id) => id.as_ref(),
        }
    }

    /// True for the 64-character digest form.
    pub fn is_sha256(&self) -> bool {
        matches!(self, ContentId::Sha256(_))
    }

    /// True for the 36-character UUID form.
    pub fn is_uuid(&self) -> bool {
        matches!(self, ContentId::Uuid(_))
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for ContentId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_shapes() {
        let uuid = ContentId::parse("5150bdd9-c6ab-3d68-a915-e58d5ac56d50").unwrap();
        assert!(uuid.is_uuid());
        let digest = ContentId::parse(&"a".repeat(64)).unwrap();
        assert!(digest.is_sha256());
        assert!(ContentId::parse("not-an-id").is_err());
        assert!(HexDigest::parse("A".repeat(64)).is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ContentId::Uuid(ShortId::new("5150bdd9-c6ab-3d68-a915-e58d5ac56d50".into()));
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#""5150bdd9-c6ab-3d68-a915-e58d5ac56d50""#
        );
        assert_eq!(id.to_string(), "5150bdd9-c6ab-3d68-a915-e58d5ac56d50");
    }
}
