//! ECB (Electronic Code Book) mode implementation

use crate::error::{CipherModeError, Result};
use crate::padding::{PaddingScheme, Pkcs7};
use crate::BlockCipher;

use super::{map_blocks, validate_block_size, ModeOfOperation, ModeType};

/// ECB mode: `C_i = E_k(P_i)`, `P_i = D_k(C_i)`.
///
/// Blocks are transformed independently, so identical plaintext blocks
/// always give identical ciphertext blocks. ECB takes no IV and pads the
/// plaintext with the injected padding scheme.
#[derive(Debug, Clone)]
pub struct Ecb<C, P = Pkcs7> {
    cipher: C,
    padding: P,
}

impl<C: BlockCipher, P: PaddingScheme> Ecb<C, P> {
    pub fn new(cipher: C, padding: P) -> Self {
        Self { cipher, padding }
    }

    fn reject_iv(iv: &[u8]) -> Result<()> {
        if iv.is_empty() {
            Ok(())
        } else {
            Err(CipherModeError::UnexpectedIv)
        }
    }
}

impl<C: BlockCipher, P: PaddingScheme> ModeOfOperation for Ecb<C, P> {
    fn mode_type(&self) -> ModeType {
        ModeType::Ecb
    }

    fn iv_length(&self) -> usize {
        0
    }

    /// ECB mode encryption
    fn encrypt(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Self::reject_iv(iv)?;
        let block_size = self.cipher.block_size();
        validate_block_size(block_size)?;

        let padded = self.padding.pad(plaintext, block_size)?;
        map_blocks(&padded, block_size, |block| self.cipher.encrypt_block(block))
    }

    /// ECB mode decryption
    fn decrypt(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Self::reject_iv(iv)?;
        let block_size = self.cipher.block_size();
        validate_block_size(block_size)?;

        let padded = map_blocks(ciphertext, block_size, |block| self.cipher.decrypt_block(block))?;
        self.padding.unpad(&padded, block_size)
    }
}
