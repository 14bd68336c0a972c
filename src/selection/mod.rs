//! Unbiased character selection via rejection sampling.
//!
//! Mapping a byte onto N characters with a plain modulo would favor
//! low indices whenever `256 mod N != 0`. The selector instead
//! discards any byte value at or above `(255 / N) * N`, so the
//! surviving values split exactly evenly across the character set.

mod charset;

pub use charset::{Charset, CharsetConfig, AMBIGUOUS, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

use thiserror::Error;

/// Errors from password assembly.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The character set has zero members.
    #[error("character set is empty")]
    EmptyCharset,
    /// The random byte stream ran out before enough characters were
    /// accepted. The caller may retry with a larger stream; the
    /// selector never pads or truncates.
    #[error("random stream exhausted after {produced} of {requested} characters")]
    InsufficientRandomness {
        /// Characters produced before exhaustion.
        produced: usize,
        /// Characters that were requested.
        requested: usize,
    },
}

/// Maps a random byte stream onto `length` characters from `charset`.
///
/// Bytes are scanned left to right; a byte `v` below the rejection
/// threshold appends `charset[v % N]`, any other byte is discarded.
/// `length` must be greater than zero (debug-asserted); sizing the
/// stream with a margin of about 4x `length` makes exhaustion
/// negligibly rare, but exhaustion is still surfaced as an error.
///
/// # Errors
///
/// [`SelectionError::EmptyCharset`] if `charset` has no members;
/// [`SelectionError::InsufficientRandomness`] if the stream is
/// exhausted before `length` characters are produced.
pub fn build_password(
    random_bytes: &[u8],
    charset: &Charset,
    length: usize,
) -> Result<String, SelectionError> {
    debug_assert!(length > 0, "password length must be positive");
    if charset.is_empty() {
        return Err(SelectionError::EmptyCharset);
    }

    let n = charset.len();
    let max_accept = (255 / n) * n;
    let chars = charset.as_bytes();
    let mut password = String::with_capacity(length);
    let mut produced = 0;

    for &value in random_bytes {
        if produced == length {
            break;
        }
        if (value as usize) < max_accept {
            password.push(char::from(chars[value as usize % n]));
            produced += 1;
        }
    }

    if produced < length {
        return Err(SelectionError::InsufficientRandomness {
            produced,
            requested: length,
        });
    }

    Ok(password)
}
