//! Running-digest entropy pool.
//!
//! Absorbs unpredictable samples by chaining them into a 32-byte
//! digest: `digest' = Hash(digest || sample)`. Mixing order matters;
//! replaying the same samples in a different order yields a different
//! final digest, which is exactly how unpredictability accumulates.

use super::hash::HashAlgorithm;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Upper bound on the advisory collected-bits counter.
pub const MAX_COLLECTED_BITS: u32 = 256;

/// Configuration for the entropy pool.
///
/// The bit counters are advisory UI feedback, not an entropy
/// accounting mechanism. The only gating condition for generation is
/// that at least one sample has been mixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Advisory bits credited per mixed sample.
    pub bits_per_sample: u32,
    /// Advisory bits credited after a successful generation.
    pub bits_per_generation: u32,
    /// Hash algorithm for digest chaining.
    pub algorithm: HashAlgorithm,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            bits_per_sample: 2,
            bits_per_generation: 16,
            algorithm: HashAlgorithm::Blake3,
        }
    }
}

/// Accumulates caller-supplied samples into a running digest.
///
/// Two states: `Empty` (no sample since the last reset) and `Seeded`.
/// `mix` moves the pool to `Seeded`; `reset` returns it to `Empty`.
/// The pool is reusable across generations and its digest is zeroized
/// on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EntropyPool {
    /// Running digest, always exactly 32 bytes.
    digest: [u8; 32],
    /// Advisory collected-bits estimate, clamped to [0, 256].
    collected_bits: u32,
    /// True iff at least one mix occurred since the last reset.
    has_sample: bool,
    #[zeroize(skip)]
    config: PoolConfig,
}

impl EntropyPool {
    /// Creates a zeroed pool with the given configuration.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            digest: [0u8; 32],
            collected_bits: 0,
            has_sample: false,
            config,
        }
    }

    /// Returns the pool to its initial zeroed state.
    pub fn reset(&mut self) {
        self.digest.zeroize();
        self.collected_bits = 0;
        self.has_sample = false;
        tracing::debug!("entropy pool reset");
    }

    /// Chains a sample into the digest.
    ///
    /// `sample` must be non-empty; an empty sample is a caller error
    /// and is ignored after a debug assertion. The sample bytes are
    /// treated as opaque.
    pub fn mix(&mut self, sample: &[u8]) {
        debug_assert!(!sample.is_empty(), "mixed sample must be non-empty");
        if sample.is_empty() {
            tracing::warn!("ignoring empty entropy sample");
            return;
        }

        self.digest = self
            .config
            .algorithm
            .digest_parts(&[&self.digest, sample]);
        self.collected_bits = self
            .collected_bits
            .saturating_add(self.config.bits_per_sample)
            .min(MAX_COLLECTED_BITS);
        self.has_sample = true;

        tracing::trace!(
            sample_len = sample.len(),
            collected_bits = self.collected_bits,
            "mixed sample into pool"
        );
    }

    /// Returns a copy of the current digest.
    pub fn digest_snapshot(&self) -> [u8; 32] {
        self.digest
    }

    /// Returns the advisory collected-bits estimate.
    pub fn collected_bits(&self) -> u32 {
        self.collected_bits
    }

    /// Returns true if at least one sample was mixed since the last reset.
    pub fn has_collected_sample(&self) -> bool {
        self.has_sample
    }

    /// Credits advisory bits for the fresh external randomness consumed
    /// by a successful generation.
    pub fn note_generation(&mut self) {
        self.collected_bits = self
            .collected_bits
            .saturating_add(self.config.bits_per_generation)
            .min(MAX_COLLECTED_BITS);
    }
}

impl Default for EntropyPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl std::fmt::Debug for EntropyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntropyPool")
            .field("collected_bits", &self.collected_bits)
            .field("has_sample", &self.has_sample)
            .finish_non_exhaustive()
    }
}

/// Thread-safe handle to a single shared entropy pool.
///
/// A high-frequency sample producer and a low-frequency generation
/// consumer access the same pool; every operation is serialized by one
/// mutex scoped to the pool instance, so no caller can observe a
/// partially updated digest. Mixes are applied in lock acquisition
/// order. The lock is only ever held for a hash computation and a
/// copy, never across I/O.
#[derive(Clone)]
pub struct SharedEntropyPool {
    inner: Arc<Mutex<EntropyPool>>,
}

impl SharedEntropyPool {
    /// Creates a shared pool with the given configuration.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EntropyPool::new(config))),
        }
    }

    /// Chains a sample into the pool. See [`EntropyPool::mix`].
    pub fn mix(&self, sample: &[u8]) {
        self.inner.lock().mix(sample);
    }

    /// Resets the pool to its zeroed initial state.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Returns a copy of the current digest.
    pub fn digest_snapshot(&self) -> [u8; 32] {
        self.inner.lock().digest_snapshot()
    }

    /// Returns the advisory collected-bits estimate.
    pub fn collected_bits(&self) -> u32 {
        self.inner.lock().collected_bits()
    }

    /// Returns true if at least one sample was mixed since the last reset.
    pub fn has_collected_sample(&self) -> bool {
        self.inner.lock().has_collected_sample()
    }

    /// Credits advisory bits after a successful generation.
    pub fn note_generation(&self) {
        self.inner.lock().note_generation();
    }
}

impl Default for SharedEntropyPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl std::fmt::Debug for SharedEntropyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&*self.inner.lock(), f)
    }
}
