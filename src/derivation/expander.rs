//! Counter-mode stream expansion.
//!
//! Expands a 32-byte seed into an arbitrary-length byte stream:
//! `block_c = Hash(seed || LE32(c))` for c = 0, 1, 2, ..., concatenated
//! in counter order and truncated to the requested length. The output
//! is prefix-stable: a shorter expansion is always a byte prefix of a
//! longer one from the same seed.

use super::mixer::Seed;
use crate::pool::HashAlgorithm;
use zeroize::Zeroizing;

/// Deterministically expands a seed into a pseudorandom byte stream.
pub struct StreamExpander {
    algorithm: HashAlgorithm,
}

impl StreamExpander {
    /// Creates an expander using the given hash algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Produces exactly `needed` bytes from `seed`.
    ///
    /// `needed` must be greater than zero. Each hash block is zeroized
    /// after being copied into the output, and the returned stream is
    /// itself zeroized when dropped.
    pub fn expand(&self, seed: &Seed, needed: usize) -> Zeroizing<Vec<u8>> {
        debug_assert!(needed > 0, "expansion length must be positive");

        let mut stream = Zeroizing::new(Vec::with_capacity(needed));
        let mut counter: u32 = 0;

        while stream.len() < needed {
            let block = Zeroizing::new(
                self.algorithm
                    .digest_parts(&[seed.expose(), &counter.to_le_bytes()]),
            );
            let take = (needed - stream.len()).min(block.len());
            stream.extend_from_slice(&block[..take]);
            counter += 1;
        }

        stream
    }
}

impl Default for StreamExpander {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}
