//! External secure randomness source.
//!
//! The pool digest alone is never used to derive a password; it is
//! always combined with 32 bytes from a cryptographically secure
//! external source. This module abstracts that source behind a trait
//! so tests can substitute a deterministic implementation.

use rand_core::{OsRng, RngCore};
use thiserror::Error;

/// Errors from the external secure random source.
#[derive(Debug, Error)]
pub enum RandomSourceError {
    /// The source could not produce the requested bytes.
    #[error("secure random source failed: {0}")]
    Unavailable(String),
}

/// A synchronous source of 32 bytes of secure randomness.
///
/// Implementations must either fill the buffer completely or fail;
/// a failure propagates out of the generation call, it is never
/// swallowed.
pub trait SecureRandom {
    /// Fills `out` with 32 bytes of cryptographically secure randomness.
    fn fill_seed_material(&mut self, out: &mut [u8; 32]) -> Result<(), RandomSourceError>;
}

/// Secure randomness from the operating system.
#[derive(Debug, Default)]
pub struct OsSecureRandom;

impl SecureRandom for OsSecureRandom {
    fn fill_seed_material(&mut self, out: &mut [u8; 32]) -> Result<(), RandomSourceError> {
        OsRng
            .try_fill_bytes(out)
            .map_err(|e| RandomSourceError::Unavailable(e.to_string()))
    }
}

/// Deterministic source for testing.
///
/// Fills with a fixed ascending pattern and counts how many times it
/// was consulted. Not a randomness source.
#[derive(Debug, Default)]
pub struct MockSecureRandom {
    calls: usize,
}

impl MockSecureRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fills performed so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl SecureRandom for MockSecureRandom {
    fn fill_seed_material(&mut self, out: &mut [u8; 32]) -> Result<(), RandomSourceError> {
        self.calls += 1;
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = (self.calls as u8).wrapping_add(i as u8);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_source_fills_buffer() {
        let mut source = OsSecureRandom;
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        source.fill_seed_material(&mut a).unwrap();
        source.fill_seed_material(&mut b).unwrap();

        // 32 zero bytes or a repeated fill would both be astronomically unlikely.
        assert_ne!(a, [0u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_mock_source_counts_calls() {
        let mut source = MockSecureRandom::new();
        assert_eq!(source.calls(), 0);

        let mut out = [0u8; 32];
        source.fill_seed_material(&mut out).unwrap();
        assert_eq!(source.calls(), 1);

        let first = out;
        source.fill_seed_material(&mut out).unwrap();
        assert_eq!(source.calls(), 2);
        assert_ne!(out, first);
    }
}
