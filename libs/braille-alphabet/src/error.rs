//! # Alphabet Errors
//!
//! Error types for alphabet registration and definition loading.

use thiserror::Error;

use crate::alphabet::MAX_SYMBOL_LENGTH;

/// Errors that can occur while building or loading an alphabet.
#[derive(Debug, Error)]
pub enum AlphabetError {
    /// A symbol exceeds the supported length.
    #[error("symbol '{symbol}' is {length} characters long (max {MAX_SYMBOL_LENGTH})")]
    InvalidSymbol { symbol: String, length: usize },

    /// A symbol was registered twice.
    #[error("symbol '{0}' is already registered")]
    DuplicateSymbol(String),

    /// A persisted definition failed to parse or is incomplete.
    #[error("malformed alphabet definition: {0}")]
    MalformedDefinition(String),

    /// Reading or writing a definition file failed.
    #[error("alphabet io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlphabetError {
    /// Creates an invalid symbol error.
    pub fn invalid_symbol(symbol: impl Into<String>, length: usize) -> Self {
        Self::InvalidSymbol {
            symbol: symbol.into(),
            length,
        }
    }

    /// Creates a malformed definition error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDefinition(message.into())
    }
}

impl From<serde_json::Error> for AlphabetError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedDefinition(error.to_string())
    }
}
