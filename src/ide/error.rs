//! Error types for the incremental lexer.

use text_size::{TextRange, TextSize};
use thiserror::Error;

/// Errors reported when a caller hands the lexer an unusable range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    /// The range reaches past the end of the buffer.
    #[error("range {range:?} is out of bounds for a buffer of length {len:?}")]
    RangeOutOfBounds { range: TextRange, len: TextSize },

    /// A range end splits a UTF-8 character.
    #[error("offset {offset:?} is not on a character boundary")]
    NotCharBoundary { offset: TextSize },
}

impl LexerError {
    /// Create an out-of-bounds error.
    pub fn out_of_bounds(range: TextRange, len: TextSize) -> Self {
        Self::RangeOutOfBounds { range, len }
    }

    /// Create a character boundary error.
    pub fn not_char_boundary(offset: TextSize) -> Self {
        Self::NotCharBoundary { offset }
    }
}
