//! Construction of mode instances from a [`ModeType`] selector

use log::debug;

use crate::error::Result;
use crate::modes::{Cbc, Cfb, Ctr, Ecb, ModeOfOperation, ModeType, Ofb};
use crate::padding::Pkcs7;
use crate::BlockCipher;

/// Any of the supported modes bound to cipher `C`.
///
/// ECB and CBC carry a PKCS#7 padding instance; the stream-like modes carry none.
#[derive(Debug, Clone)]
pub enum Mode<C> {
    Ecb(Ecb<C>),
    Cbc(Cbc<C>),
    Cfb(Cfb<C>),
    Ofb(Ofb<C>),
    Ctr(Ctr<C>),
}

/// Build the mode selected by `mode_type` around `cipher`.
pub fn create<C: BlockCipher>(mode_type: ModeType, cipher: C) -> Mode<C> {
    debug!("constructing {} mode (block size {})", mode_type, cipher.block_size());
    match mode_type {
        ModeType::Ecb => Mode::Ecb(Ecb::new(cipher, Pkcs7)),
        ModeType::Cbc => Mode::Cbc(Cbc::new(cipher, Pkcs7)),
        ModeType::Cfb => Mode::Cfb(Cfb::new(cipher)),
        ModeType::Ofb => Mode::Ofb(Ofb::new(cipher)),
        ModeType::Ctr => Mode::Ctr(Ctr::new(cipher)),
    }
}

impl<C: BlockCipher> Mode<C> {
    pub fn new(mode_type: ModeType, cipher: C) -> Self {
        create(mode_type, cipher)
    }

    fn inner(&self) -> &dyn ModeOfOperation {
        match self {
            Mode::Ecb(mode) => mode,
            Mode::Cbc(mode) => mode,
            Mode::Cfb(mode) => mode,
            Mode::Ofb(mode) => mode,
            Mode::Ctr(mode) => mode,
        }
    }
}

impl<C: BlockCipher> ModeOfOperation for Mode<C> {
    fn mode_type(&self) -> ModeType {
        self.inner().mode_type()
    }

    fn iv_length(&self) -> usize {
        self.inner().iv_length()
    }

    fn encrypt(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.inner().encrypt(plaintext, iv)
    }

    fn decrypt(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.inner().decrypt(ciphertext, iv)
    }
}
