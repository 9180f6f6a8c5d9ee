//! IV generation and `IV ‖ ciphertext` framing on top of a mode

use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{CipherModeError, Result};
use crate::modes::ModeOfOperation;

/// Wraps a mode and packs a freshly generated IV in front of each ciphertext.
///
/// Wire format: `IV (iv_length() bytes, empty for ECB) ‖ ciphertext`. No mode
/// tag or length prefix is written; the reader must already know the mode
/// and key.
#[derive(Debug, Clone)]
pub struct ModeCipherService<M> {
    mode: M,
}

impl<M: ModeOfOperation> ModeCipherService<M> {
    pub fn new(mode: M) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    /// Encrypt with an IV drawn from the operating system RNG.
    pub fn encrypt_with_header(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_with_header_using(plaintext, &mut OsRng)
    }

    /// Encrypt with an IV drawn from `rng`.
    ///
    /// `rng` must be cryptographically secure; CTR and OFB leak plaintext if
    /// an IV ever repeats under the same key.
    pub fn encrypt_with_header_using<R>(&self, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>>
    where
        R: RngCore + CryptoRng,
    {
        let mut iv = vec![0u8; self.mode.iv_length()];
        if !iv.is_empty() {
            rng.try_fill_bytes(&mut iv)?;
        }

        debug!(
            "{} encrypt: {} bytes plaintext, {} bytes IV",
            self.mode.mode_type(),
            plaintext.len(),
            iv.len()
        );

        let ciphertext = self.mode.encrypt(plaintext, &iv)?;
        let mut packed = Vec::with_capacity(iv.len() + ciphertext.len());
        packed.extend_from_slice(&iv);
        packed.extend_from_slice(&ciphertext);
        Ok(packed)
    }

    /// Split `blob` into IV and ciphertext, then decrypt.
    pub fn decrypt_with_header(&self, blob: &[u8]) -> Result<Vec<u8>> {
        let iv_length = self.mode.iv_length();
        if blob.len() < iv_length {
            return Err(CipherModeError::InputTooShort {
                expected: iv_length,
                got: blob.len(),
            });
        }

        debug!(
            "{} decrypt: {} bytes including header",
            self.mode.mode_type(),
            blob.len()
        );

        let (iv, ciphertext) = blob.split_at(iv_length);
        self.mode.decrypt(ciphertext, iv)
    }
}
