//! Generic block cipher trait

use std::sync::Arc;

use crate::error::Result;

/// A keyed permutation over fixed-size blocks.
///
/// Implementations own their key; modes of operation only ever hand them
/// exactly one block at a time. Inputs of any other length must be rejected
/// with [`CipherModeError::InvalidBlockLength`](crate::CipherModeError::InvalidBlockLength).
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a single block
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher in bytes
    fn block_size(&self) -> usize;
}

impl<C: BlockCipher + ?Sized> BlockCipher for &C {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt_block(block)
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}

impl<C: BlockCipher + ?Sized> BlockCipher for Arc<C> {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt_block(block)
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}
