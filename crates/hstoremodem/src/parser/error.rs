//! Position-annotated parse failures.

use thiserror::Error;

/// The category of a grammar violation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The `=` or `>` of the `=>` separator is missing or misplaced.
    #[error("expected `=>` key-value separator")]
    ExpectedSeparator,
    /// A quoted token was never closed; the offset is the opening quote.
    #[error("quoted token is never closed")]
    UnterminatedQuote,
    /// A backslash not followed by `"` or `\`, or sitting at the very end of
    /// the input.
    #[error("backslash must be followed by `\"` or `\\`")]
    InvalidEscape,
    /// A literal `"` inside an unquoted token.
    #[error("unexpected quote inside unquoted token")]
    UnexpectedQuote,
    /// The pair was never closed: a byte other than the required comma after
    /// the value, or end of input mid-pair.
    #[error("pair is missing its closing comma")]
    UnterminatedValue,
    /// A state the machine cannot legally reach.
    #[error("internal parser inconsistency")]
    InternalInconsistency,
}

/// A terminal decode failure.
///
/// Carries the byte offset into the original input where the violation was
/// detected, so callers can point at the offending location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {position}")]
pub struct ParseError {
    kind: ErrorKind,
    position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The category of the failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input where the failure was detected.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}
