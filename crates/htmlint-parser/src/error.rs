//! Error types for the HTML parser.
//!
//! The parser is tolerant about markup structure (unclosed elements, stray
//! end tags) and only fails when it cannot tell where a construct ends.
//! Every error carries the [`Position`] where the construct started.

use crate::ast::Position;
use thiserror::Error;

/// An error that stops a document from being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `<!--` without a closing `-->`.
    #[error("unterminated comment starting at line {}, column {}", .position.line, .position.column)]
    UnterminatedComment {
        /// Where the comment opens.
        position: Position,
    },

    /// A quoted attribute value that never closes.
    #[error("unterminated value for attribute '{name}' starting at line {}, column {}", .position.line, .position.column)]
    UnterminatedAttributeValue {
        /// Attribute name.
        name: String,
        /// Where the opening quote is.
        position: Position,
    },

    /// A tag that reaches end of input before `>`.
    #[error("unterminated tag '<{name}' starting at line {}, column {}", .position.line, .position.column)]
    UnterminatedTag {
        /// Tag name as written.
        name: String,
        /// Where the `<` is.
        position: Position,
    },

    /// The input is not valid UTF-8.
    #[error("invalid UTF-8 at byte {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the source position where this error occurred, if known.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::UnterminatedComment { position }
            | Self::UnterminatedAttributeValue { position, .. }
            | Self::UnterminatedTag { position, .. } => Some(*position),
            Self::InvalidUtf8 { .. } => None,
        }
    }
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
