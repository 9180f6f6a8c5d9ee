//! CBC (Cipher Block Chaining) mode implementation

use crate::error::Result;
use crate::padding::{PaddingScheme, Pkcs7};
use crate::{utils, BlockCipher};

use super::{map_blocks, validate_block_size, validate_iv_length, ModeOfOperation, ModeType};

/// CBC mode.
///
/// Algorithm:
/// 1. C_0 = IV
/// 2. C_i = E(K, P_i ⊕ C_{i-1})
/// 3. P_i = D(K, C_i) ⊕ C_{i-1}
///
/// Blocks are chained strictly in order. Reusing an IV under the same key
/// reveals whether two messages share a common prefix.
#[derive(Debug, Clone)]
pub struct Cbc<C, P = Pkcs7> {
    cipher: C,
    padding: P,
}

impl<C: BlockCipher, P: PaddingScheme> Cbc<C, P> {
    pub fn new(cipher: C, padding: P) -> Self {
        Self { cipher, padding }
    }
}

impl<C: BlockCipher, P: PaddingScheme> ModeOfOperation for Cbc<C, P> {
    fn mode_type(&self) -> ModeType {
        ModeType::Cbc
    }

    fn iv_length(&self) -> usize {
        self.cipher.block_size()
    }

    /// CBC mode encryption
    fn encrypt(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate_block_size(block_size)?;
        validate_iv_length(iv, block_size)?;

        let padded = self.padding.pad(plaintext, block_size)?;
        let mut chain = iv.to_vec();

        map_blocks(&padded, block_size, |block| {
            let xored = utils::xor_blocks(block, &chain)?;
            let encrypted_block = self.cipher.encrypt_block(&xored)?;
            chain.clone_from(&encrypted_block);
            Ok(encrypted_block)
        })
    }

    /// CBC mode decryption
    fn decrypt(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate_block_size(block_size)?;
        validate_iv_length(iv, block_size)?;

        let mut chain = iv.to_vec();

        let padded = map_blocks(ciphertext, block_size, |block| {
            let decrypted_block = self.cipher.decrypt_block(block)?;
            let plain = utils::xor_blocks(&decrypted_block, &chain)?;
            // next chain value is the ciphertext just consumed
            chain.copy_from_slice(block);
            Ok(plain)
        })?;

        self.padding.unpad(&padded, block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CipherModeError, DummyCipher};

    fn cbc() -> Cbc<DummyCipher> {
        Cbc::new(DummyCipher::new(b"testkey1", 8), Pkcs7)
    }

    #[test]
    fn test_cbc_encrypt_decrypt() {
        let mode = cbc();
        let plaintext = b"Hello World! This is a test message.";
        let iv = b"initialv";

        let ciphertext = mode.encrypt(plaintext, iv).unwrap();
        assert_eq!(ciphertext.len() % 8, 0);

        let decrypted = mode.decrypt(&ciphertext, iv).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_cbc_invalid_iv_length() {
        let mode = cbc();
        let result = mode.encrypt(b"Hello", b"short");
        assert!(matches!(
            result,
            Err(CipherModeError::InvalidIvLength { expected: 8, got: 5 })
        ));
        assert!(mode.decrypt(&[0u8; 8], &[]).is_err());
    }

    #[test]
    fn test_cbc_chains_identical_blocks() {
        let mode = cbc();
        let plaintext = b"SAMEBLOKSAMEBLOK";

        let ciphertext = mode.encrypt(plaintext, &[0u8; 8]).unwrap();
        assert_ne!(ciphertext[..8], ciphertext[8..16]);
    }

    #[test]
    fn test_cbc_iv_changes_ciphertext() {
        let mode = cbc();
        let plaintext = b"same message";

        let first = mode.encrypt(plaintext, b"iv-one-1").unwrap();
        let second = mode.encrypt(plaintext, b"iv-two-2").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_cbc_wrong_iv_corrupts_first_block_only() {
        let mode = cbc();
        let plaintext = b"0123456789abcdefXYZ";
        let ciphertext = mode.encrypt(plaintext, b"initialv").unwrap();

        let decrypted = mode.decrypt(&ciphertext, b"wrong-iv").unwrap();
        assert_ne!(&decrypted[..8], &plaintext[..8]);
        assert_eq!(&decrypted[8..], &plaintext[8..]);
    }
}
