//! Error types for the Shannon-Fano coder.
//!
//! The core stages are total for consistent input. Errors only surface when input is empty,
//! when a codebook does not match the text it is applied to, or when reading input fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Nothing to encode (empty or whitespace-only text)
    #[error("input is empty: nothing to encode")]
    EmptyInput,

    /// Text contains a character the codebook has no entry for
    #[error("no code for character {0:?} in codebook")]
    MissingCode(char),

    /// Bitstring contains something other than '0' or '1'
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },

    /// Bitstring ends in the middle of a code
    #[error("bitstring ends inside a code starting at position {position}")]
    IncompleteCode { position: usize },

    /// Example preset name not known
    #[error("unknown example: {0}")]
    UnknownExample(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
