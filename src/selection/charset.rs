//! Character set assembly.
//!
//! Builds the ordered, duplicate-free character sequence that the
//! selector maps random bytes onto. Category membership is fixed
//! here, not validated by the selector.

use serde::{Deserialize, Serialize};

/// Lowercase letters a-z.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Uppercase letters A-Z.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digits 0-9.
pub const DIGITS: &[u8] = b"0123456789";
/// Printable ASCII symbols.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:',.<>?/~";
/// Visually confusable characters, optionally excluded.
pub const AMBIGUOUS: &[u8] = b"Il1O0";

/// Which character categories to enable, and whether to drop the
/// ambiguous subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharsetConfig {
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include symbols.
    pub symbols: bool,
    /// Remove the ambiguous characters `I l 1 O 0`.
    pub exclude_ambiguous: bool,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
            exclude_ambiguous: false,
        }
    }
}

/// An ordered sequence of distinct ASCII characters.
///
/// Owned by the caller and read-only to the selector. May be empty;
/// the selector rejects empty sets at use time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<u8>,
}

impl Charset {
    /// Assembles a charset from enabled categories.
    pub fn from_config(config: &CharsetConfig) -> Self {
        let mut chars = Vec::new();
        if config.lowercase {
            chars.extend_from_slice(LOWERCASE);
        }
        if config.uppercase {
            chars.extend_from_slice(UPPERCASE);
        }
        if config.digits {
            chars.extend_from_slice(DIGITS);
        }
        if config.symbols {
            chars.extend_from_slice(SYMBOLS);
        }
        if config.exclude_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(c));
        }
        Self { chars }
    }

    /// Builds a charset from raw bytes, keeping the first occurrence
    /// of each distinct ASCII byte and dropping everything else.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut seen = [false; 128];
        let mut chars = Vec::with_capacity(bytes.len());
        for &b in bytes {
            if b.is_ascii() && !seen[b as usize] {
                seen[b as usize] = true;
                chars.push(b);
            }
        }
        Self { chars }
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the set has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters in order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }
}
