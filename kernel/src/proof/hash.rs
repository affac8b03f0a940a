//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256 for all V1 digests.
//!
//! **Exactly one place defines canonical hashing.** Every digest in the
//! workspace is `sha256(domain || data)` where `domain` is one of the
//! null-terminated prefixes below.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    /// Full string in `"algorithm:hex_digest"` format.
    full: String,
    /// Byte offset of the `:` separator (cached from parse).
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon,
    /// empty algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation (`"algorithm:hex_digest"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

// Domain separation constants. Each prefix is null-terminated.

/// Domain prefix for coordinate map digests.
pub const DOMAIN_COORDINATE_MAP: &[u8] = b"WAYPOINT::COORDINATE_MAP::V1\0";

/// Domain prefix for search outcome digests.
pub const DOMAIN_SEARCH_OUTCOME: &[u8] = b"WAYPOINT::SEARCH_OUTCOME::V1\0";

/// Domain prefix for harness comparison digests.
pub const DOMAIN_COMPARISON: &[u8] = b"WAYPOINT::COMPARISON::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("sha256:{hex_digest}"),
        colon: "sha256".len(),
    }
}
