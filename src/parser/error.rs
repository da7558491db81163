//! Parse error types.

use crate::token::Span;

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The current token does not match what the grammar expects.
    UnexpectedToken,
    /// The token stream ended while the grammar expected more input.
    UnexpectedEndOfInput,
    /// No branch of an alternative matched.
    NoMatchingBranch,
    /// Tokens remain after the class production completed.
    TrailingInput,
}

/// An error that occurred during parsing.
///
/// Within the parser these are local control-flow signals: a failed
/// branch is caught by the enclosing alternative and only a miss of the
/// top-level class rule surfaces to the caller.
#[derive(Debug)]
pub struct ParseError {
    message: String,
    span: Span,
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a new error with the given kind, message, and location.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Creates an "unexpected token" error.
    pub fn unexpected_token(expected: &str, found: &str, span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken,
            format!("Expected {}, found {}", expected, found),
            span,
        )
    }

    /// Creates an "unexpected end of input" error.
    pub fn unexpected_end_of_input(expected: &str, span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedEndOfInput,
            format!("Expected {}, found end of input", expected),
            span,
        )
    }

    /// Creates a "no branch matched" error.
    pub fn no_matching_branch(span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::NoMatchingBranch,
            "No grammar alternative matches here",
            span,
        )
    }

    /// Creates a "trailing input" error.
    pub fn trailing_input(found: &str, span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::TrailingInput,
            format!("Expected end of input after class, found {}", found),
            span,
        )
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
