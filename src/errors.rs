use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),
}

/// Errors raised by the cipher transforms. Every variant is reported before
/// any output is produced; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("text should not contain digit characters, found {0:?}")]
    UnexpectedDigit(char),
    #[error("character {0:?} is not in the region alphabet")]
    OutsideAlphabet(char),
    #[error("malformed coordinate pair at position {position}")]
    MalformedCoordinate { position: usize },
    #[error("ciphertext has no leading rotation token")]
    MissingRotationToken,
    #[error("invalid rotation token: {0:?}")]
    InvalidRotationToken(String),
    #[error("key must contain at least one letter")]
    EmptyKey,
    #[error("{0} has no inverse")]
    NotInvertible(&'static str),
}

impl CipherError {
    /// True for alphabet precondition failures on the input text.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CipherError::UnexpectedDigit(_) | CipherError::OutsideAlphabet(_))
    }
}

/// Raised alongside a successful Polybius decode when the recovered text
/// contains an `I`, which may have been a `J` before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeAmbiguityWarning;

impl fmt::Display for DecodeAmbiguityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'J' may have been overwritten by 'I'")
    }
}
