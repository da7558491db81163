//! Lexical analysis error types.

use crate::token::Span;

/// The kind of lexical error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no Jack token was encountered.
    UnexpectedCharacter,
    /// A string constant reached the end of input before its closing quote.
    UnterminatedString,
    /// A string constant contains a newline.
    StringContainsNewline,
    /// A `/** ... */` comment reached the end of input before `*/`.
    UnterminatedBlockComment,
    /// An integer constant exceeds the 15-bit range `0..=32767`.
    IntegerOutOfRange,
}

/// An error that occurred during lexical analysis.
///
/// Contains a human-readable message and the source location where the
/// error occurred, enabling rich error reporting.
#[derive(Debug)]
pub struct LexError {
    message: String,
    span: Span,
    kind: LexErrorKind,
}

impl LexError {
    /// Creates a new error with the given kind, message, and location.
    pub fn new(kind: LexErrorKind, message: impl Into<String>, span: Span) -> Self {
        LexError {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Creates an "unexpected character" error.
    pub fn unexpected_character(c: char, span: Span) -> Self {
        LexError::new(
            LexErrorKind::UnexpectedCharacter,
            format!("Unexpected character '{}'", c),
            span,
        )
    }

    /// Creates an "unterminated string constant" error.
    pub fn unterminated_string(span: Span) -> Self {
        LexError::new(
            LexErrorKind::UnterminatedString,
            "Unterminated string constant",
            span,
        )
    }

    /// Creates an error for a string constant that spans a line break.
    pub fn string_contains_newline(span: Span) -> Self {
        LexError::new(
            LexErrorKind::StringContainsNewline,
            "String constant must not contain a newline",
            span,
        )
    }

    /// Creates an "unterminated block comment" error.
    pub fn unterminated_block_comment(span: Span) -> Self {
        LexError::new(
            LexErrorKind::UnterminatedBlockComment,
            "Unterminated block comment",
            span,
        )
    }

    /// Creates an error for an integer constant outside `0..=32767`.
    pub fn integer_out_of_range(text: &str, span: Span) -> Self {
        LexError::new(
            LexErrorKind::IntegerOutOfRange,
            format!("Integer constant '{}' exceeds 32767", text),
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
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
