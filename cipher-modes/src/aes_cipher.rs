//! AES single-block primitive backed by the RustCrypto `aes` crate

use std::fmt;

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::{BlockCipher, CipherModeError, Result};

/// AES block size in bytes, independent of key length.
pub const AES_BLOCK_SIZE: usize = 16;

enum AesEngine {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

/// AES-128/192/256 exposed as a [`BlockCipher`].
///
/// This is the raw permutation `E_k`/`D_k`, not "ECB mode". The chaining
/// rules live in [`crate::modes`].
pub struct AesBlockCipher {
    engine: AesEngine,
}

impl AesBlockCipher {
    /// Create a cipher from a 16, 24 or 32 byte key.
    pub fn new(key: &[u8]) -> Result<Self> {
        let invalid = |_| CipherModeError::InvalidKeyLength(key.len());
        let engine = match key.len() {
            16 => AesEngine::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
            24 => AesEngine::Aes192(Aes192::new_from_slice(key).map_err(invalid)?),
            32 => AesEngine::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
            other => return Err(CipherModeError::InvalidKeyLength(other)),
        };
        Ok(Self { engine })
    }

    /// Key length in bits (128, 192 or 256).
    pub fn key_bits(&self) -> usize {
        match self.engine {
            AesEngine::Aes128(_) => 128,
            AesEngine::Aes192(_) => 192,
            AesEngine::Aes256(_) => 256,
        }
    }

    fn load(block: &[u8]) -> Result<aes::Block> {
        if block.len() != AES_BLOCK_SIZE {
            return Err(CipherModeError::InvalidBlockLength {
                expected: AES_BLOCK_SIZE,
                got: block.len(),
            });
        }
        Ok(aes::Block::clone_from_slice(block))
    }
}

impl BlockCipher for AesBlockCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        let mut block = Self::load(block)?;
        match &self.engine {
            AesEngine::Aes128(k) => k.encrypt_block(&mut block),
            AesEngine::Aes192(k) => k.encrypt_block(&mut block),
            AesEngine::Aes256(k) => k.encrypt_block(&mut block),
        }
        Ok(block.to_vec())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        let mut block = Self::load(block)?;
        match &self.engine {
            AesEngine::Aes128(k) => k.decrypt_block(&mut block),
            AesEngine::Aes192(k) => k.decrypt_block(&mut block),
            AesEngine::Aes256(k) => k.decrypt_block(&mut block),
        }
        Ok(block.to_vec())
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }
}

impl fmt::Debug for AesBlockCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesBlockCipher(AES-{})", self.key_bits())
    }
}
