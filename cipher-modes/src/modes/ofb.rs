//! OFB (Output Feedback) mode implementation

use crate::error::Result;
use crate::{utils, BlockCipher};

use super::{map_chunks, validate_block_size, validate_iv_length, ModeOfOperation, ModeType};

/// OFB mode.
///
/// In OFB mode, the block cipher is used to generate a pseudorandom keystream
/// which is then XORed with the plaintext.
///
/// Algorithm:
/// 1. O_0 = IV
/// 2. O_i = E(K, O_{i-1}) for i = 1, 2, ..., n
/// 3. C_i = P_i ⊕ O_i
///
/// # Security
///
/// The keystream depends only on the key and the IV. Encrypting two messages
/// with the same (key, IV) pair produces the same keystream, so
/// `C1 ⊕ C2 = P1 ⊕ P2` and both plaintexts are exposed. Never reuse an IV
/// under one key; [`crate::ModeCipherService`] draws a fresh random IV per call.
#[derive(Debug, Clone)]
pub struct Ofb<C> {
    cipher: C,
}

impl<C: BlockCipher> Ofb<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Encryption and decryption are the same keystream XOR.
    fn apply_keystream(&self, input: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate_block_size(block_size)?;
        validate_iv_length(iv, block_size)?;

        let mut feedback = iv.to_vec();

        map_chunks(input, block_size, |chunk, _| {
            // advance before use
            feedback = self.cipher.encrypt_block(&feedback)?;
            utils::xor_keystream(chunk, &feedback)
        })
    }
}

impl<C: BlockCipher> ModeOfOperation for Ofb<C> {
    fn mode_type(&self) -> ModeType {
        ModeType::Ofb
    }

    fn iv_length(&self) -> usize {
        self.cipher.block_size()
    }

    fn encrypt(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(plaintext, iv)
    }

    fn decrypt(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(ciphertext, iv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CipherModeError, DummyCipher};

    fn ofb() -> Ofb<DummyCipher> {
        Ofb::new(DummyCipher::new(b"testkey1", 8))
    }

    #[test]
    fn test_ofb_encrypt_decrypt() {
        let mode = ofb();
        let plaintext = b"Hello World! This is a test message.";
        let iv = b"initialv";

        let ciphertext = mode.encrypt(plaintext, iv).unwrap();
        let decrypted = mode.decrypt(&ciphertext, iv).unwrap();

        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_ofb_invalid_iv_length() {
        let mode = ofb();
        let result = mode.encrypt(b"Hello", b"short");
        assert!(matches!(
            result,
            Err(CipherModeError::InvalidIvLength { expected: 8, got: 5 })
        ));
    }

    #[test]
    fn test_ofb_partial_block() {
        let mode = ofb();
        let plaintext = b"Hi";
        let iv = b"initialv";

        let ciphertext = mode.encrypt(plaintext, iv).unwrap();
        let decrypted = mode.decrypt(&ciphertext, iv).unwrap();

        assert_eq!(plaintext, &decrypted[..]);
        assert_eq!(ciphertext.len(), plaintext.len());
    }

    #[test]
    fn test_ofb_keystream_independent_of_data() {
        let mode = ofb();
        let iv = b"initialv";

        let zeros = mode.encrypt(&[0u8; 24], iv).unwrap();
        let data = b"some twenty-four bytes!!";
        let ciphertext = mode.encrypt(data, iv).unwrap();

        let recovered = utils::xor_blocks(&ciphertext, &zeros).unwrap();
        assert_eq!(&recovered[..], &data[..]);
    }
}
