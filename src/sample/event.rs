//! Pointer sample type with a canonical byte encoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the canonical sample encoding in bytes.
pub const ENCODED_LEN: usize = 24;

/// A single pointer-movement sample.
///
/// Carries screen coordinates, a wall-clock timestamp, and a
/// high-resolution counter reading. The pool treats the encoded bytes
/// as opaque; this type only fixes a canonical encoding so equal
/// samples mix identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Horizontal position.
    x: i32,
    /// Vertical position.
    y: i32,
    /// Wall-clock capture time.
    timestamp: DateTime<Utc>,
    /// High-resolution counter reading at capture time.
    counter: u64,
}

impl PointerSample {
    /// Creates a sample from its parts.
    pub fn new(x: i32, y: i32, timestamp: DateTime<Utc>, counter: u64) -> Self {
        Self {
            x,
            y,
            timestamp,
            counter,
        }
    }

    /// Creates a sample stamped with the current wall-clock time.
    pub fn now(x: i32, y: i32, counter: u64) -> Self {
        Self::new(x, y, Utc::now(), counter)
    }

    /// Returns the horizontal position.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Returns the vertical position.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the capture timestamp.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the high-resolution counter reading.
    #[inline]
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Canonical little-endian encoding:
    /// `x || y || timestamp_millis || counter`.
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[0..4].copy_from_slice(&self.x.to_le_bytes());
        out[4..8].copy_from_slice(&self.y.to_le_bytes());
        out[8..16].copy_from_slice(&self.timestamp.timestamp_millis().to_le_bytes());
        out[16..24].copy_from_slice(&self.counter.to_le_bytes());
        out
    }
}
