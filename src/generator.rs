//! Generation orchestration.
//!
//! Ties the pipeline together for one request: gate on collected
//! entropy, fetch external randomness, mix, expand with margin,
//! select characters, and wipe every intermediate secret on the way
//! out - on error paths as well, via zero-on-drop buffers.

use crate::config::GeneratorConfig;
use crate::derivation::{
    OsSecureRandom, RandomSourceError, SecureRandom, SeedMixer, StreamExpander,
};
use crate::pool::SharedEntropyPool;
use crate::selection::{self, Charset, SelectionError};
use thiserror::Error;
use zeroize::Zeroizing;

/// Errors from a generation request.
///
/// None of these are retried internally. `NoEntropyCollected` is
/// user-correctable (collect a sample first); the selection errors are
/// caller configuration problems; a random source failure propagates
/// as-is.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Generation was attempted before any sample was mixed.
    #[error("no entropy collected; mix at least one sample before generating")]
    NoEntropyCollected,
    /// The external secure random source failed.
    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),
    /// Character selection failed (empty charset or exhausted stream).
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Password generator over a shared entropy pool.
///
/// The pool handle it exposes is meant to be cloned into a sample
/// producer; the generator itself is the low-frequency consumer side.
pub struct Generator<R: SecureRandom = OsSecureRandom> {
    pool: SharedEntropyPool,
    random: R,
    mixer: SeedMixer,
    expander: StreamExpander,
    stream_margin: usize,
}

impl Generator<OsSecureRandom> {
    /// Creates a generator backed by the operating system RNG.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_source(config, OsSecureRandom)
    }
}

impl<R: SecureRandom> Generator<R> {
    /// Creates a generator with a custom secure random source.
    pub fn with_source(config: GeneratorConfig, random: R) -> Self {
        let algorithm = config.pool.algorithm;
        Self {
            pool: SharedEntropyPool::new(config.pool),
            random,
            mixer: SeedMixer::new(algorithm),
            expander: StreamExpander::new(algorithm),
            stream_margin: (config.stream_margin.max(1)) as usize,
        }
    }

    /// Returns a handle to the shared pool for sample producers.
    pub fn pool(&self) -> SharedEntropyPool {
        self.pool.clone()
    }

    /// Returns the secure random source.
    pub fn random_source(&self) -> &R {
        &self.random
    }

    /// Generates a password of `length` characters from `charset`.
    ///
    /// `length` must be greater than zero. Fails with
    /// [`GenerateError::NoEntropyCollected`] before touching the
    /// digest or the RNG if no sample has been mixed, and with an
    /// empty-charset error before any stream byte is produced.
    ///
    /// # Errors
    ///
    /// See [`GenerateError`].
    pub fn generate(&mut self, charset: &Charset, length: usize) -> Result<String, GenerateError> {
        debug_assert!(length > 0, "password length must be positive");

        if !self.pool.has_collected_sample() {
            return Err(GenerateError::NoEntropyCollected);
        }
        if charset.is_empty() {
            return Err(SelectionError::EmptyCharset.into());
        }

        let mut external = Zeroizing::new([0u8; 32]);
        self.random.fill_seed_material(&mut external)?;

        let digest = Zeroizing::new(self.pool.digest_snapshot());
        let seed = self.mixer.combine(&digest, &external);
        drop(external);
        drop(digest);

        let needed = length.saturating_mul(self.stream_margin);
        let stream = self.expander.expand(&seed, needed);
        drop(seed);

        let password = selection::build_password(&stream, charset, length)?;
        drop(stream);

        self.pool.note_generation();
        tracing::debug!(length, charset_size = charset.len(), "password generated");

        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::MockSecureRandom;
    use crate::selection::CharsetConfig;

    fn mock_generator() -> Generator<MockSecureRandom> {
        Generator::with_source(GeneratorConfig::default(), MockSecureRandom::new())
    }

    #[test]
    fn test_generate_without_entropy_fails_before_rng() {
        let mut generator = mock_generator();
        let charset = Charset::from_config(&CharsetConfig::default());

        let result = generator.generate(&charset, 16);
        assert!(matches!(result, Err(GenerateError::NoEntropyCollected)));
        assert_eq!(generator.random_source().calls(), 0);
    }

    #[test]
    fn test_generate_with_empty_charset_fails_before_rng() {
        let mut generator = mock_generator();
        generator.pool().mix(b"sample");

        let charset = Charset::from_bytes(b"");
        let result = generator.generate(&charset, 16);
        assert!(matches!(
            result,
            Err(GenerateError::Selection(SelectionError::EmptyCharset))
        ));
        assert_eq!(generator.random_source().calls(), 0);
    }

    #[test]
    fn test_generate_produces_requested_length() {
        let mut generator = mock_generator();
        generator.pool().mix(b"sample");

        let charset = Charset::from_config(&CharsetConfig::default());
        let password = generator.generate(&charset, 24).unwrap();

        assert_eq!(password.len(), 24);
        for b in password.bytes() {
            assert!(charset.as_bytes().contains(&b));
        }
    }

    #[test]
    fn test_generate_is_deterministic_given_same_inputs() {
        // Same pool contents and same (mock) external randomness must
        // derive the same password.
        let charset = Charset::from_config(&CharsetConfig::default());

        let mut first = mock_generator();
        first.pool().mix(b"identical sample");
        let a = first.generate(&charset, 32).unwrap();

        let mut second = mock_generator();
        second.pool().mix(b"identical sample");
        let b = second.generate(&charset, 32).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_generations_differ() {
        // The mock source yields different bytes per call, standing in
        // for fresh external randomness.
        let mut generator = mock_generator();
        generator.pool().mix(b"sample");

        let charset = Charset::from_config(&CharsetConfig::default());
        let a = generator.generate(&charset, 32).unwrap();
        let b = generator.generate(&charset, 32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generation_bumps_advisory_bits() {
        let mut generator = mock_generator();
        let pool = generator.pool();
        pool.mix(b"sample");
        assert_eq!(pool.collected_bits(), 2);

        let charset = Charset::from_config(&CharsetConfig::default());
        generator.generate(&charset, 16).unwrap();
        assert_eq!(pool.collected_bits(), 2 + 16);
    }

    #[test]
    fn test_failed_generation_does_not_bump_bits() {
        let mut generator = mock_generator();
        let pool = generator.pool();
        pool.mix(b"sample");

        let empty = Charset::from_bytes(b"");
        assert!(generator.generate(&empty, 16).is_err());
        assert_eq!(pool.collected_bits(), 2);
    }

    #[test]
    fn test_os_backed_generator_end_to_end() {
        let mut generator = Generator::new(GeneratorConfig::default());
        generator.pool().mix(b"pointer sample bytes");

        let charset = Charset::from_config(&CharsetConfig {
            symbols: true,
            exclude_ambiguous: true,
            ..Default::default()
        });
        let password = generator.generate(&charset, 40).unwrap();
        assert_eq!(password.len(), 40);
    }
}
