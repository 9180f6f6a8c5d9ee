//! Cipher modes implementation
//!
//! Every mode keeps its chaining state (chain value, feedback block or
//! counter) in locals of a single `encrypt`/`decrypt` call. Nothing is stored
//! on the mode between calls, so a mode is as thread-safe as its cipher.

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherModeError, Result};

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;

/// Selector for the supported modes of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeType {
    /// Electronic Codebook
    Ecb,
    /// Cipher Block Chaining
    Cbc,
    /// Cipher Feedback, full-block segments
    Cfb,
    /// Output Feedback
    Ofb,
    /// Counter
    Ctr,
}

impl ModeType {
    pub const ALL: [ModeType; 5] = [
        ModeType::Ecb,
        ModeType::Cbc,
        ModeType::Cfb,
        ModeType::Ofb,
        ModeType::Ctr,
    ];

    /// ECB and CBC operate on whole blocks and need PKCS#7.
    pub fn requires_padding(self) -> bool {
        matches!(self, ModeType::Ecb | ModeType::Cbc)
    }

    pub fn uses_iv(self) -> bool {
        !matches!(self, ModeType::Ecb)
    }

    pub fn name(self) -> &'static str {
        match self {
            ModeType::Ecb => "ECB",
            ModeType::Cbc => "CBC",
            ModeType::Cfb => "CFB",
            ModeType::Ofb => "OFB",
            ModeType::Ctr => "CTR",
        }
    }
}

impl fmt::Display for ModeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModeType {
    type Err = CipherModeError;

    fn from_str(s: &str) -> Result<Self> {
        ModeType::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CipherModeError::UnknownMode(s.to_string()))
    }
}

/// A block cipher mode of operation bound to one keyed primitive.
pub trait ModeOfOperation {
    fn mode_type(&self) -> ModeType;

    /// Required IV/nonce length in bytes; 0 for ECB.
    fn iv_length(&self) -> usize;

    fn encrypt(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>>;

    fn decrypt(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>>;
}

/// Validate block size
pub fn validate_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 {
        Err(CipherModeError::InvalidBlockSize)
    } else {
        Ok(())
    }
}

/// Validate IV length for modes that require it
pub fn validate_iv_length(iv: &[u8], block_size: usize) -> Result<()> {
    if iv.len() != block_size {
        Err(CipherModeError::InvalidIvLength {
            expected: block_size,
            got: iv.len(),
        })
    } else {
        Ok(())
    }
}

/// Validate that `input` splits into whole blocks
pub fn validate_aligned(input: &[u8], block_size: usize) -> Result<()> {
    if input.len() % block_size != 0 {
        Err(CipherModeError::UnalignedInput {
            len: input.len(),
            block_size,
        })
    } else {
        Ok(())
    }
}

/// Apply `f` to each full block of `input` in order and concatenate the results.
///
/// Fails if `input` is not block aligned. The first error aborts the whole
/// call; no partial output is returned.
pub(crate) fn map_blocks<F>(input: &[u8], block_size: usize, mut f: F) -> Result<Vec<u8>>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    validate_block_size(block_size)?;
    validate_aligned(input, block_size)?;

    let mut output = Vec::with_capacity(input.len());
    for block in input.chunks_exact(block_size) {
        output.extend(f(block)?);
    }
    Ok(output)
}

/// Apply `f` to each `block_size` chunk of `input` in order; the last chunk may be short.
///
/// `f` also receives the number of input bytes still waiting after the chunk.
pub(crate) fn map_chunks<F>(input: &[u8], block_size: usize, mut f: F) -> Result<Vec<u8>>
where
    F: FnMut(&[u8], usize) -> Result<Vec<u8>>,
{
    validate_block_size(block_size)?;

    let mut output = Vec::with_capacity(input.len());
    let mut remaining = input.len();
    for chunk in input.chunks(block_size) {
        remaining -= chunk.len();
        output.extend(f(chunk, remaining)?);
    }
    Ok(output)
}
