//! CFB (Cipher Feedback) mode implementation

use crate::error::Result;
use crate::{utils, BlockCipher};

use super::{map_chunks, validate_block_size, validate_iv_length, ModeOfOperation, ModeType};

/// Full-block CFB mode (segment size equals the block size).
///
/// Algorithm:
/// 1. C_0 = IV
/// 2. O_i = E(K, C_{i-1})
/// 3. C_i = P_i ⊕ O_i, P_i = C_i ⊕ O_i
///
/// Both directions run the primitive forwards. The feedback register always
/// takes the ciphertext side of a full chunk: the output when encrypting, the
/// input when decrypting. A trailing short chunk is XORed with a truncated
/// keystream and needs no padding.
#[derive(Debug, Clone)]
pub struct Cfb<C> {
    cipher: C,
}

impl<C: BlockCipher> Cfb<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }
}

impl<C: BlockCipher> ModeOfOperation for Cfb<C> {
    fn mode_type(&self) -> ModeType {
        ModeType::Cfb
    }

    fn iv_length(&self) -> usize {
        self.cipher.block_size()
    }

    /// CFB mode encryption
    fn encrypt(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate_block_size(block_size)?;
        validate_iv_length(iv, block_size)?;

        let mut feedback = iv.to_vec();

        map_chunks(plaintext, block_size, |chunk, _| {
            let keystream = self.cipher.encrypt_block(&feedback)?;
            let cipher_chunk = utils::xor_keystream(chunk, &keystream)?;
            if chunk.len() == block_size {
                feedback.clone_from(&cipher_chunk);
            }
            Ok(cipher_chunk)
        })
    }

    /// CFB mode decryption
    fn decrypt(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate_block_size(block_size)?;
        validate_iv_length(iv, block_size)?;

        let mut feedback = iv.to_vec();

        map_chunks(ciphertext, block_size, |chunk, _| {
            let keystream = self.cipher.encrypt_block(&feedback)?;
            let plain_chunk = utils::xor_keystream(chunk, &keystream)?;
            if chunk.len() == block_size {
                feedback.copy_from_slice(chunk);
            }
            Ok(plain_chunk)
        })
    }
}
