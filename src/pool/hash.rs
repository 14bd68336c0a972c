//! Cryptographic hash primitives for digest chaining.
//!
//! All pool, seed, and expansion operations are built on a single
//! 256-bit hash invocation over concatenated parts. Hashing is done
//! incrementally so no plaintext concatenation buffer is ever
//! materialized.

use blake3::Hasher as Blake3Hasher;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Supported hash algorithms for entropy conditioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// BLAKE3 - fast, secure, recommended default.
    #[default]
    Blake3,
    /// SHA-256 - widely deployed, conservative choice.
    Sha256,
}

impl HashAlgorithm {
    /// Hashes the given parts in order as one message.
    ///
    /// Equivalent to `Hash(parts[0] || parts[1] || ...)` without building
    /// the concatenation in memory.
    pub fn digest_parts(&self, parts: &[&[u8]]) -> [u8; 32] {
        match self {
            Self::Blake3 => {
                let mut hasher = Blake3Hasher::new();
                for part in parts {
                    hasher.update(part);
                }
                *hasher.finalize().as_bytes()
            }
            Self::Sha256 => {
                let mut hasher = Sha256::new();
                for part in parts {
                    hasher.update(part);
                }
                let result = hasher.finalize();
                let mut out = [0u8; 32];
                out.copy_from_slice(&result);
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_32_bytes() {
        for algorithm in [HashAlgorithm::Blake3, HashAlgorithm::Sha256] {
            let out = algorithm.digest_parts(&[b"some", b"parts"]);
            assert_eq!(out.len(), 32);
        }
    }

    #[test]
    fn test_parts_equal_concatenation() {
        // Splitting the message across parts must not change the digest.
        for algorithm in [HashAlgorithm::Blake3, HashAlgorithm::Sha256] {
            let split = algorithm.digest_parts(&[b"hello ", b"world"]);
            let whole = algorithm.digest_parts(&[b"hello world"]);
            assert_eq!(split, whole);
        }
    }

    #[test]
    fn test_algorithms_disagree() {
        let b3 = HashAlgorithm::Blake3.digest_parts(&[b"input"]);
        let sha = HashAlgorithm::Sha256.digest_parts(&[b"input"]);
        assert_ne!(b3, sha);
    }

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256 of 32 zero bytes followed by "entropy sample A".
        let expected = "b8319e6e9bfe12d522ddd2f6231812ce8cdd26c059ba38866d7fc0b9f3a6312a";
        let out = HashAlgorithm::Sha256.digest_parts(&[&[0u8; 32], b"entropy sample A"]);
        let hex: String = out.iter().map(|b| format!("{:02x}", b)).collect();
        assert_eq!(hex, expected);
    }
}
