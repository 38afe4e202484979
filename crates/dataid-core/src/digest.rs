use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::identifiers::HexDigest;

/// Supported digest algorithms for content identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlg {
    /// SHA-256, 64 lowercase hex characters.
    Sha256,
}

impl DigestAlg {
    /// Template prefix placed before the hex digest when folding it into a UUID.
    pub fn prefix(self) -> &'static str {
        match self {
            DigestAlg::Sha256 => "sha256=",
        }
    }
}

/// SHA-256 of `bytes` as lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> HexDigest {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    HexDigest::new(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_digest() {
        assert_eq!(
            sha256_hex(b"").as_ref(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn prefix_is_stable() {
        assert_eq!(DigestAlg::Sha256.prefix(), "sha256=");
        assert_eq!(serde_json::to_string(&DigestAlg::Sha256).unwrap(), r#""sha256""#);
    }
}
