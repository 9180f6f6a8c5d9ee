//! # Cipher Modes Library
//!
//! This library implements the NIST SP 800-38A block cipher modes of operation
//! on top of any single-block primitive.
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - Simple but insecure mode, PKCS#7 padded
//! - **CBC** (Cipher Block Chaining) - Widely used, requires IV, PKCS#7 padded
//! - **CFB** (Cipher Feedback) - Full-block stream mode
//! - **OFB** (Output Feedback) - Stream cipher mode
//! - **CTR** (Counter Mode) - Stream cipher mode, fails instead of wrapping its counter
//!
//! ## Usage
//!
//! ```rust
//! use cipher_modes::{factory, AesBlockCipher, ModeCipherService, ModeType};
//!
//! let cipher = AesBlockCipher::new(b"my-secret-key-16")?;
//! let service = ModeCipherService::new(factory::create(ModeType::Cbc, cipher));
//!
//! // IV ‖ ciphertext
//! let packed = service.encrypt_with_header(b"Hello, World!")?;
//! let decrypted = service.decrypt_with_header(&packed)?;
//! assert_eq!(decrypted, b"Hello, World!");
//! # Ok::<(), cipher_modes::CipherModeError>(())
//! ```
//!
//! Modes can also be driven directly with a caller-supplied IV:
//!
//! ```rust
//! use cipher_modes::{AesBlockCipher, Ctr, ModeOfOperation};
//!
//! let ctr = Ctr::new(AesBlockCipher::new(&[0u8; 32])?);
//! let counter_block = [0u8; 16];
//! let ciphertext = ctr.encrypt(b"stream", &counter_block)?;
//! assert_eq!(ciphertext.len(), 6);
//! # Ok::<(), cipher_modes::CipherModeError>(())
//! ```

// Public modules
pub mod aes_cipher;
pub mod cipher;
pub mod error;
pub mod factory;
pub mod modes;
pub mod padding;
pub mod service;
pub mod utils;

// Re-exports for easy access
pub use aes_cipher::{AesBlockCipher, AES_BLOCK_SIZE};
pub use cipher::BlockCipher;
pub use error::{CipherModeError, ErrorKind, Result};
pub use factory::Mode;
pub use modes::{Cbc, Cfb, Ctr, Ecb, ModeOfOperation, ModeType, Ofb};
pub use padding::{PaddingScheme, Pkcs7};
pub use service::ModeCipherService;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dummy cipher implementation for testing and demonstration
///
/// XORs the block with the repeating key and rotates it left by one byte.
/// It is an invertible permutation of any block size, which makes it useful
/// for exercising the modes without AES, and it should **never** be used in
/// production.
///
/// # Example
///
/// ```rust
/// use cipher_modes::{BlockCipher, DummyCipher};
///
/// let cipher = DummyCipher::new(b"key", 16);
/// assert_eq!(cipher.block_size(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct DummyCipher {
    key: Vec<u8>,
    block_size: usize,
}

impl DummyCipher {
    /// Create a new dummy cipher with the specified key and block size
    ///
    /// An empty key is treated as all zeros.
    pub fn new(key: &[u8], block_size: usize) -> Self {
        let key = if key.is_empty() {
            vec![0u8; block_size]
        } else {
            key.iter().cycle().take(block_size).copied().collect()
        };
        Self { key, block_size }
    }

    fn check_length(&self, block: &[u8]) -> Result<()> {
        if block.len() != self.block_size {
            return Err(CipherModeError::InvalidBlockLength {
                expected: self.block_size,
                got: block.len(),
            });
        }
        Ok(())
    }
}

impl BlockCipher for DummyCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        self.check_length(block)?;
        let mut out = utils::xor_blocks(block, &self.key)?;
        if !out.is_empty() {
            out.rotate_left(1);
        }
        Ok(out)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        self.check_length(block)?;
        let mut rotated = block.to_vec();
        if !rotated.is_empty() {
            rotated.rotate_right(1);
        }
        utils::xor_blocks(&rotated, &self.key)
    }

    fn block_size(&self) -> usize {
        self.block_size
    }
}

// Comprehensive tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_cipher_basic() {
        let cipher = DummyCipher::new(b"testkey1", 8);
        let plaintext = b"hello123";

        let encrypted = cipher.encrypt_block(plaintext).unwrap();
        assert_ne!(&encrypted[..], &plaintext[..]);
        let decrypted = cipher.decrypt_block(&encrypted).unwrap();

        assert_eq!(plaintext, &decrypted[..]);
        assert_eq!(cipher.block_size(), 8);
    }

    #[test]
    fn test_dummy_cipher_wrong_length() {
        let cipher = DummyCipher::new(b"testkey1", 8);
        let result = cipher.encrypt_block(b"short");
        assert!(matches!(
            result,
            Err(CipherModeError::InvalidBlockLength { expected: 8, got: 5 })
        ));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_dummy_cipher_empty_key() {
        let cipher = DummyCipher::new(b"", 4);
        let encrypted = cipher.encrypt_block(&[1, 2, 3, 4]).unwrap();
        assert_eq!(encrypted, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_dummy_cipher_zero_block_size_rejected_by_modes() {
        let mode = factory::create(ModeType::Cbc, DummyCipher::new(b"key", 0));
        assert!(matches!(
            mode.encrypt(b"data", &[]),
            Err(CipherModeError::InvalidBlockSize)
        ));

        let mode = factory::create(ModeType::Ctr, DummyCipher::new(b"key", 0));
        assert!(matches!(
            mode.encrypt(b"data", &[]),
            Err(CipherModeError::InvalidBlockSize)
        ));
    }

    #[test]
    fn test_all_modes_integration() {
        let cipher = DummyCipher::new(b"test-key-16-byte", 16);
        let plaintext = b"Integration test message for all modes!";
        let iv = b"initialization16";

        for mode_type in ModeType::ALL {
            let mode = factory::create(mode_type, &cipher);
            let iv = &iv[..mode.iv_length()];

            let encrypted = mode.encrypt(plaintext, iv).unwrap();
            let decrypted = mode.decrypt(&encrypted, iv).unwrap();
            assert_eq!(plaintext, &decrypted[..], "{} round trip", mode_type);
        }
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
