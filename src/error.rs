//! Error types for building Huffman codes.

use thiserror::Error;

/// Error variants for tree construction, encoding and configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No symbols were supplied.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// Symbol and frequency lists differ in length.
    #[error("{symbols} symbols but {frequencies} frequencies")]
    LengthMismatch { symbols: usize, frequencies: usize },

    /// A frequency below zero.
    #[error("negative frequency {frequency} at position {index}")]
    NegativeFrequency { index: usize, frequency: i64 },

    /// The same symbol appears twice.
    #[error("symbol at position {second} duplicates the one at position {first}")]
    DuplicateSymbol { first: usize, second: usize },

    /// The frequencies sum past `u64::MAX`.
    #[error("total frequency overflows")]
    FrequencyOverflow,

    /// A message symbol has no entry in the code table.
    #[error("symbol at position {index} has no code")]
    UnknownSymbol { index: usize },

    /// Bad command-line input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
