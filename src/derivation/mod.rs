//! Seed mixing and deterministic stream expansion.
//!
//! This module turns the pool digest plus fresh external randomness
//! into a seed, then expands that seed into as many pseudorandom
//! bytes as a generation request needs. Everything in between is
//! ephemeral and zeroized.

mod expander;
mod mixer;
mod source;

pub use expander::StreamExpander;
pub use mixer::{Seed, SeedMixer};
pub use source::{MockSecureRandom, OsSecureRandom, RandomSourceError, SecureRandom};
