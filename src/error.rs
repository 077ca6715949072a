//! Error types for the cipher and the round-count search.

use std::fmt;

/// Errors produced by encryption, decryption and recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Integer needs more than `width` bytes (`bits` significant bits).
    EncodingOverflow { bits: u64, width: usize },
    /// Decoded bytes fit the block but are not printable ASCII.
    NonPrintableResult,
    /// No candidate in `start..=end` produced printable text.
    SearchExhausted { start: usize, end: usize },
    /// Round count outside `min..=max`.
    InvalidRoundCount { rounds: usize, min: usize, max: usize },
    /// Plaintext longer than the network can carry losslessly.
    PlaintextTooLong { len: usize, max: usize },
    /// Ciphertext wider than the fixed block.
    CiphertextTooWide { bits: u64, max: u64 },
    /// Parameter set rejected by [`crate::params::CipherParams::validate`].
    InvalidParams(&'static str),
    /// Ciphertext text is not a non-negative hexadecimal integer.
    InvalidCiphertextText,
    /// Reading or writing the ciphertext artifact failed.
    Io(String),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::EncodingOverflow { bits, width } => {
                write!(f, "Value of {} bits does not fit in {} bytes", bits, width)
            }
            CipherError::NonPrintableResult => {
                write!(f, "Decoded bytes are not printable ASCII")
            }
            CipherError::SearchExhausted { start, end } => {
                write!(f, "No round count in {}..={} yields printable text", start, end)
            }
            CipherError::InvalidRoundCount { rounds, min, max } => {
                write!(f, "Round count {} is outside {}..={}", rounds, min, max)
            }
            CipherError::PlaintextTooLong { len, max } => {
                write!(f, "Plaintext of {} bytes exceeds the {} byte maximum", len, max)
            }
            CipherError::CiphertextTooWide { bits, max } => {
                write!(f, "Ciphertext of {} bits exceeds the {} bit block", bits, max)
            }
            CipherError::InvalidParams(reason) => {
                write!(f, "Invalid cipher parameters: {}", reason)
            }
            CipherError::InvalidCiphertextText => {
                write!(f, "Ciphertext is not a hexadecimal integer")
            }
            CipherError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for CipherError {}

impl From<std::io::Error> for CipherError {
    fn from(err: std::io::Error) -> Self {
        CipherError::Io(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
