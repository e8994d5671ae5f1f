//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent codec contract violations.
/// None of them leave the tree in a modified state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid morse code {code:?}: unexpected '{found}'")]
    InvalidCodeFormat { code: String, found: char },

    #[error("morse code must not be empty")]
    EmptyCode,

    #[error("invalid symbol {0:?}: whitespace separates words and cannot be stored")]
    InvalidSymbol(char),

    #[error("unsupported character for encode: '{0}'")]
    UnsupportedCharacter(char),

    #[error("unknown morse token for decode: \"{0}\"")]
    UnknownMorseToken(String),

    #[error("invalid decode input: contains '{0}'")]
    InvalidDecodeInput(char),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
