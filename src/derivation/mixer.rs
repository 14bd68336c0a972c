//! Seed derivation from pooled and external randomness.
//!
//! The final seed is `Hash(poolDigest || externalRandom)`: even a fully
//! predictable pool cannot weaken the external randomness, and vice
//! versa. Both inputs are exactly 32 bytes, enforced at the type level.

use crate::pool::HashAlgorithm;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Ephemeral 32-byte seed driving deterministic expansion.
///
/// Exists only for the duration of one generation request and is
/// zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; 32],
}

impl Seed {
    pub(crate) fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Exposes the seed bytes for expansion.
    pub fn expose(&self) -> &[u8; 32] {
        &self.bytes
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(***)")
    }
}

/// Combines the pool digest with external secure randomness.
pub struct SeedMixer {
    algorithm: HashAlgorithm,
}

impl SeedMixer {
    /// Creates a mixer using the given hash algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Computes `Hash(pool_digest || external)`.
    ///
    /// The caller is responsible for wiping `external` after the call;
    /// hashing is incremental so no concatenation buffer exists to
    /// wipe here.
    pub fn combine(&self, pool_digest: &[u8; 32], external: &[u8; 32]) -> Seed {
        Seed::from_bytes(self.algorithm.digest_parts(&[pool_digest, external]))
    }
}

impl Default for SeedMixer {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}
