//! Utility functions for cipher modes

use crate::error::{CipherModeError, Result};

/// XOR two byte arrays of equal length
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherModeError::InvalidBlockLength {
            expected: a.len(),
            got: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

/// XOR `data` with the first `data.len()` bytes of `keystream`.
///
/// Used for the final, possibly short, chunk in stream-like modes.
pub fn xor_keystream(data: &[u8], keystream: &[u8]) -> Result<Vec<u8>> {
    if keystream.len() < data.len() {
        return Err(CipherModeError::InvalidBlockLength {
            expected: data.len(),
            got: keystream.len(),
        });
    }

    xor_blocks(data, &keystream[..data.len()])
}

/// Increment a big-endian counter of any width by one, in place.
///
/// Returns `true` when the counter wrapped around to all zeros.
pub fn increment_be(counter: &mut [u8]) -> bool {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            return false;
        }
    }
    true
}
