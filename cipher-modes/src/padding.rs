//! Padding schemes for the block-aligned modes (ECB, CBC)

use subtle::{ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

use crate::error::{CipherModeError, Result};

/// Largest block size PKCS#7 can describe: the pad length is one byte.
pub const PKCS7_MAX_BLOCK_SIZE: usize = 255;

/// Reversible padding that aligns data to a block boundary.
pub trait PaddingScheme {
    /// Pad `input` to a multiple of `block_size`. Always appends at least one byte.
    fn pad(&self, input: &[u8], block_size: usize) -> Result<Vec<u8>>;

    /// Validate and strip padding previously added by [`PaddingScheme::pad`].
    fn unpad(&self, input: &[u8], block_size: usize) -> Result<Vec<u8>>;
}

/// PKCS#7 padding: append `n` bytes each of value `n`.
///
/// Block-aligned input receives a full extra block of padding, so `unpad`
/// is always unambiguous. Every validation failure in `unpad` is reported
/// as the same [`CipherModeError::PaddingError`], and the final block is
/// checked with constant-time comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs7;

fn validate_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 || block_size > PKCS7_MAX_BLOCK_SIZE {
        return Err(CipherModeError::InvalidBlockSize);
    }
    Ok(())
}

impl PaddingScheme for Pkcs7 {
    fn pad(&self, input: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let pad_len = Self::padding_length(input.len(), block_size)?;
        let mut padded = Vec::with_capacity(input.len() + pad_len);
        padded.extend_from_slice(input);
        padded.resize(input.len() + pad_len, pad_len as u8);

        Ok(padded)
    }

    fn unpad(&self, input: &[u8], block_size: usize) -> Result<Vec<u8>> {
        validate_block_size(block_size)?;

        if input.is_empty() || input.len() % block_size != 0 {
            return Err(CipherModeError::PaddingError);
        }

        // len >= block_size here, so pad_len <= block_size also bounds it by len
        let last_block = &input[input.len() - block_size..];
        let pad_byte = last_block[block_size - 1];
        let max = block_size as u8;

        let mut valid = !pad_byte.ct_eq(&0) & !pad_byte.ct_gt(&max);
        for (i, byte) in last_block.iter().rev().enumerate() {
            let in_padding = (i as u8).ct_lt(&pad_byte);
            valid &= !in_padding | byte.ct_eq(&pad_byte);
        }

        if !bool::from(valid) {
            return Err(CipherModeError::PaddingError);
        }

        Ok(input[..input.len() - pad_byte as usize].to_vec())
    }
}

impl Pkcs7 {
    /// Number of padding bytes `pad` appends for `data_len` bytes of input.
    pub(crate) fn padding_length(data_len: usize, block_size: usize) -> Result<usize> {
        validate_block_size(block_size)?;
        Ok(block_size - (data_len % block_size))
    }
}
