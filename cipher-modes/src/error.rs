//! Error types for cipher mode operations

use thiserror::Error;

/// Coarse classification of every [`CipherModeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed key, IV, block, chunk size or padding.
    InvalidArgument,
    /// The CTR counter space ran out before the input did.
    StateExhausted,
    /// The block cipher primitive (or the random source) failed internally.
    PrimitiveFailure,
}

#[derive(Error, Debug)]
pub enum CipherModeError {
    #[error("Invalid block size")]
    InvalidBlockSize,

    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    #[error("Invalid block length: expected {expected} bytes, got {got}")]
    InvalidBlockLength { expected: usize, got: usize },

    #[error("Invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("ECB does not take an IV")]
    UnexpectedIv,

    #[error("Input length {len} is not a multiple of the block size {block_size}")]
    UnalignedInput { len: usize, block_size: usize },

    /// Every padding check failure collapses into this one variant.
    #[error("Padding error")]
    PaddingError,

    #[error("Input too short: need at least {expected} bytes, got {got}")]
    InputTooShort { expected: usize, got: usize },

    #[error("Unknown mode of operation: {0}")]
    UnknownMode(String),

    #[error("CTR counter wrapped; nonce/counter space exhausted")]
    CounterExhausted,

    #[error("Block cipher primitive failure")]
    PrimitiveFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Random source failure")]
    RandomSource(#[from] rand::Error),
}

impl CipherModeError {
    /// Wrap an error raised inside a block cipher implementation.
    pub fn primitive<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CipherModeError::PrimitiveFailure(Box::new(err))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherModeError::CounterExhausted => ErrorKind::StateExhausted,
            CipherModeError::PrimitiveFailure(_) | CipherModeError::RandomSource(_) => {
                ErrorKind::PrimitiveFailure
            }
            _ => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherModeError>;
