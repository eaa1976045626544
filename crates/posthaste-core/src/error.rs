//! Error types for state decisions and parsing.

use thiserror::Error;

use crate::keyword::Keyword;
use crate::span::Span;

/// A state's refusal to decide on the text it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The statement type is recognized but has no state yet.
    #[error("{keyword} statements are not supported yet")]
    Unsupported {
        /// The keyword that opened the statement.
        keyword: Keyword,
    },

    /// The text cannot appear at this position.
    #[error("invalid input: {reason}")]
    Rejected {
        /// Why the text was rejected.
        reason: String,
    },
}

/// An error that aborts a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input opens a statement type that is not supported.
    #[error("{keyword} statements are not supported yet (at character {cursor}, bytes {}..{})", .span.start, .span.end)]
    Unsupported {
        /// The keyword that opened the statement.
        keyword: Keyword,
        /// The buffered text that was being decided on.
        span: Span,
        /// Characters consumed when the error was raised.
        cursor: usize,
    },

    /// A state rejected the input.
    #[error("invalid input at character {cursor}: {reason}")]
    InvalidInput {
        /// Why the text was rejected.
        reason: String,
        /// The buffered text that was being decided on.
        span: Span,
        /// Characters consumed when the error was raised.
        cursor: usize,
    },
}

impl ParseError {
    /// Attaches a position to a state error.
    #[must_use]
    pub fn at(source: StateError, span: Span, cursor: usize) -> Self {
        match source {
            StateError::Unsupported { keyword } => Self::Unsupported {
                keyword,
                span,
                cursor,
            },
            StateError::Rejected { reason } => Self::InvalidInput {
                reason,
                span,
                cursor,
            },
        }
    }

    /// The buffered text the failing decision was made on.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Unsupported { span, .. } | Self::InvalidInput { span, .. } => *span,
        }
    }

    /// Characters consumed when the error was raised.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        match self {
            Self::Unsupported { cursor, .. } | Self::InvalidInput { cursor, .. } => *cursor,
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
