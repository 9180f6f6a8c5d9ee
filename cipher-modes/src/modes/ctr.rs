//! CTR (Counter) mode implementation

use log::warn;

use crate::error::{CipherModeError, Result};
use crate::{utils, BlockCipher};

use super::{map_chunks, validate_block_size, validate_iv_length, ModeOfOperation, ModeType};

/// CTR mode.
///
/// In CTR mode, a counter is used which is incremented for each block.
/// The encryption of the counter is XORed with the plaintext.
///
/// Algorithm:
/// 1. T_1 = IV, T_{i+1} = T_i + 1 mod 2^(8·b) (big-endian, full block width)
/// 2. C_i = P_i ⊕ E(K, T_i)
///
/// The whole IV is the initial counter block. If the counter wraps to zero
/// while input remains, the call fails with
/// [`CipherModeError::CounterExhausted`] instead of reusing counter values.
///
/// # Security
///
/// Reusing an initial counter block under the same key reuses the keystream:
/// `C1 ⊕ C2 = P1 ⊕ P2`. Every message needs a fresh, unpredictable IV.
#[derive(Debug, Clone)]
pub struct Ctr<C> {
    cipher: C,
}

impl<C: BlockCipher> Ctr<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Encryption and decryption are the same function.
    fn apply_keystream(&self, input: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate_block_size(block_size)?;
        validate_iv_length(iv, block_size)?;

        let mut counter = iv.to_vec();

        map_chunks(input, block_size, |chunk, remaining| {
            let keystream = self.cipher.encrypt_block(&counter)?;
            let output = utils::xor_keystream(chunk, &keystream)?;

            let wrapped = utils::increment_be(&mut counter);
            if wrapped && remaining > 0 {
                warn!("CTR counter wrapped with {} bytes left to process", remaining);
                return Err(CipherModeError::CounterExhausted);
            }
            Ok(output)
        })
    }
}

impl<C: BlockCipher> ModeOfOperation for Ctr<C> {
    fn mode_type(&self) -> ModeType {
        ModeType::Ctr
    }

    fn iv_length(&self) -> usize {
        self.cipher.block_size()
    }

    fn encrypt(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(plaintext, iv)
    }

    /// CTR decryption is identical to encryption
    fn decrypt(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(ciphertext, iv)
    }
}
