//! Error types for Huffman coding.
//!
//! The core operations are total and never fail. These errors are only
//! produced by parsing bit-strings and by the strict `try_*` codec variants.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit-string contained a character other than `'0'` or `'1'`.
    #[error("invalid bit {ch:?} at position {position}")]
    InvalidBit {
        /// The offending character.
        ch: char,
        /// Character offset into the parsed text.
        position: usize,
    },

    /// Strict encoding met a symbol that has no code.
    #[error("symbol {0} has no code in the codebook")]
    UnknownSymbol(String),

    /// Strict decoding ran out of bits in the middle of a code.
    #[error("bit-string ends inside a code ({trailing} trailing bits)")]
    IncompleteCode {
        /// Number of bits consumed since the last complete code.
        trailing: usize,
    },

    /// Strict decoding met a bit that no code starts with.
    #[error("no code matches the bit at position {position}")]
    InvalidCode {
        /// Bit offset into the decoded bit-string.
        position: usize,
    },

    /// Strict decoding was given bits but no tree to decode them with.
    #[error("cannot decode a non-empty bit-string without a tree")]
    MissingTree,
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
