//! Error type shared by every stage of compression and decompression.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building code tables, encoding, or decoding.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// I/O failure from the file layer, passed through untouched
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// There are no symbols to build a code table from
    #[error("cannot build a code table from empty input")]
    EmptyInput,

    /// The preamble of a compressed stream cannot be parsed
    #[error("malformed header: {reason}")]
    MalformedHeader {
        /// What was wrong with the header
        reason: String,
    },

    /// The payload ended in the middle of a codeword
    #[error("{bits} trailing bits do not match any codeword")]
    UnmatchedTrailingBits {
        /// Length of the dangling bit buffer
        bits: usize,
    },

    /// A run of payload bits grew longer than any codeword without matching one
    #[error("no codeword matches the bits starting at payload offset {offset}")]
    UnknownCodeword {
        /// Bit offset (relative to the payload start) of the failed match
        offset: usize,
    },

    /// The bits stripped as padding were not all zero
    #[error("padding bits are not zero")]
    InvalidPadding,

    /// A code table that breaks the uniqueness or prefix rules
    #[error("invalid code table: {reason}")]
    InvalidTable {
        /// What was wrong with the table
        reason: String,
    },

    /// A codeword too long for the fixed-width representation
    #[error("codeword for symbol {symbol:#04x} needs {len} bits")]
    CodewordTooLong {
        /// Symbol the codeword belongs to
        symbol: u8,
        /// Required length in bits
        len: usize,
    },

    /// The byte to encode has no codeword
    #[error("byte {0:#04x} not in encode table")]
    SymbolNotInTable(u8),

    /// A compressed file whose name does not follow the `<name>_compressed` pattern
    #[error("cannot derive an output name from {0:?}")]
    InvalidFileName(PathBuf),
}

impl HuffmanError {
    /// Create a malformed header error
    pub fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedHeader { reason: reason.into() }
    }

    /// Create an invalid table error
    pub fn invalid_table<S: Into<String>>(reason: S) -> Self {
        Self::InvalidTable { reason: reason.into() }
    }

    /// True for the errors that signal a corrupt compressed stream
    pub fn is_corrupt_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader { .. }
                | Self::UnmatchedTrailingBits { .. }
                | Self::UnknownCodeword { .. }
                | Self::InvalidPadding
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HuffmanError>;
