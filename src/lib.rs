//! Pointer Entropy Library
//!
//! An entropy-mixing and password-derivation core. Caller-supplied
//! unpredictable samples (pointer movement) are chained into a running
//! digest, combined with external secure randomness into a seed,
//! expanded into a pseudorandom byte stream, and mapped onto a
//! character set without modulo bias.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! sample → pool → derivation → selection
//!              ↑
//!       external secure RNG
//! ```
//!
//! # Design Principles
//!
//! - **Supplements OS entropy**: pooled samples never replace the
//!   external secure random source, they are mixed with it
//! - **Uses standard primitives**: BLAKE3/SHA-256 for all chaining,
//!   mixing, and counter-mode expansion
//! - **Unbiased selection**: rejection sampling, never plain modulo
//! - **Buffer hygiene**: digests, seeds, and streams are zeroized on
//!   every exit path
//! - **No entropy claims**: the collected-bits figure is advisory UI
//!   feedback, not a cryptographic bound
//!
//! # Example
//!
//! ```
//! use pointer_entropy::{
//!     Charset, CharsetConfig, Generator, GeneratorConfig, MockSampleSource, SampleSource,
//! };
//!
//! // The generator owns the pool; producers get a cloned handle.
//! let mut generator = Generator::new(GeneratorConfig::default());
//! let pool = generator.pool();
//!
//! // Feed samples (a real producer is a throttled input event loop).
//! let mut source = MockSampleSource::new();
//! for _ in 0..32 {
//!     if let Some(sample) = source.next_sample() {
//!         pool.mix(&sample.encode());
//!     }
//! }
//!
//! // Derive a password once at least one sample has been collected.
//! let charset = Charset::from_config(&CharsetConfig::default());
//! let password = generator.generate(&charset, 20).unwrap();
//! assert_eq!(password.len(), 20);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod derivation;
pub mod generator;
pub mod pool;
pub mod sample;
pub mod selection;

// Re-export commonly used types at crate root
pub use config::{ConfigError, FileConfig, GeneratorConfig};
pub use derivation::{
    MockSecureRandom, OsSecureRandom, RandomSourceError, SecureRandom, Seed, SeedMixer,
    StreamExpander,
};
pub use generator::{GenerateError, Generator};
pub use pool::{EntropyPool, HashAlgorithm, PoolConfig, SharedEntropyPool, MAX_COLLECTED_BITS};
pub use sample::{MockSampleSource, PointerSample, SampleSource};
pub use selection::{build_password, Charset, CharsetConfig, SelectionError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
