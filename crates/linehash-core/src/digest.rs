//! # Content Digest — SHA-256 over Input Text
//!
//! Defines `ContentDigest` and the single digest computation path,
//! [`sha256_digest()`].
//!
//! ## Invariant
//!
//! `ContentDigest` can only be computed from [`InputText`], so every digest
//! in the program covers the UTF-8 encoding of a line of text. The hex
//! rendering is always [`SHA256_HEX_LEN`] lowercase characters.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::input::InputText;

/// Size of a SHA-256 digest in bytes.
pub const SHA256_LEN: usize = 32;

/// Length of a SHA-256 digest rendered as hex.
pub const SHA256_HEX_LEN: usize = SHA256_LEN * 2;

/// A 256-bit SHA-256 digest.
///
/// Serializes as its lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    bytes: [u8; SHA256_LEN],
}

impl ContentDigest {
    /// Wrap raw digest bytes.
    ///
    /// Prefer [`sha256_digest()`] for computing a digest from text.
    pub fn new(bytes: [u8; SHA256_LEN]) -> Self {
        Self { bytes }
    }

    /// The raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; SHA256_LEN] {
        &self.bytes
    }

    /// Render the digest as a lowercase hex string, two characters per
    /// byte, most significant byte first.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in &self.bytes {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Compute the SHA-256 digest of a line of text.
///
/// Hashes the UTF-8 encoding of `text`. Pure and deterministic.
pub fn sha256_digest(text: &InputText) -> ContentDigest {
    let hash = Sha256::digest(text.as_bytes());
    let mut bytes = [0u8; SHA256_LEN];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(bytes)
}

/// Compute the SHA-256 hex string of a line of text.
pub fn sha256_hex(text: &InputText) -> String {
    sha256_digest(text).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS 180-4 / NIST example vectors.
    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const TWO_BLOCK: &str = "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1";

    fn hex_of(text: &str) -> String {
        sha256_hex(&InputText::new(text))
    }

    #[test]
    fn test_known_vector_empty() {
        assert_eq!(hex_of(""), EMPTY);
    }

    #[test]
    fn test_known_vector_abc() {
        assert_eq!(hex_of("abc"), ABC);
    }

    #[test]
    fn test_known_vector_two_blocks() {
        assert_eq!(
            hex_of("abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            TWO_BLOCK
        );
    }

    #[test]
    fn test_agrees_with_sha2_directly() {
        for s in ["", "abc", "hello world", "ünïcödé ✓"] {
            let direct = Sha256::digest(s.as_bytes());
            let ours = sha256_digest(&InputText::new(s));
            assert_eq!(ours.as_bytes().as_slice(), direct.as_slice());
        }
    }

    #[test]
    fn test_display_matches_to_hex() {
        let digest = sha256_digest(&InputText::new("abc"));
        assert_eq!(digest.to_string(), digest.to_hex());
    }

    #[test]
    fn test_hex_is_lowercase_and_fixed_length() {
        let digest = ContentDigest::new([0xAB; SHA256_LEN]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), SHA256_HEX_LEN);
        assert_eq!(hex, "ab".repeat(SHA256_LEN));
    }

    #[test]
    fn test_hex_keeps_leading_zeros() {
        let mut bytes = [0u8; SHA256_LEN];
        bytes[SHA256_LEN - 1] = 1;
        let hex = ContentDigest::new(bytes).to_hex();
        assert_eq!(hex.len(), SHA256_HEX_LEN);
        assert!(hex.starts_with("0000"));
        assert!(hex.ends_with("01"));
    }

    #[test]
    fn test_long_input_has_fixed_length() {
        let long = "x".repeat(1_000_000);
        assert_eq!(hex_of(&long).len(), SHA256_HEX_LEN);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let digest = sha256_digest(&InputText::new("abc"));
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{ABC}\""));
    }

    #[test]
    fn test_corpus_has_no_collisions() {
        let corpus = ["", " ", "a", "A", "abc", "abc ", "abd", "\t", "0", "00"];
        let digests: std::collections::HashSet<_> = corpus
            .iter()
            .map(|s| sha256_digest(&InputText::new(*s)))
            .collect();
        assert_eq!(digests.len(), corpus.len());
    }
}
