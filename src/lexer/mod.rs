//! Lexical analyzer for the Jack language.
//!
//! This module provides the [`Lexer`] struct which converts Jack source
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer scans the input one character at a time:
//! - whitespace and newlines delimit tokens and are discarded;
//! - `//` line comments and `/** ... */` block comments are discarded;
//! - every symbol in `{ } ( ) [ ] . , ; + - * / & | < > = ~` is a single
//!   token (Jack has no multi-character symbols);
//! - integer constants are decimal only and limited to `0..=32767`;
//! - string constants are delimited by `"` and may contain spaces but not
//!   newlines or quotes;
//! - identifier-shaped lexemes are matched against the closed keyword set.
//!
//! # Examples
//!
//! ```
//! use jackc::lexer::Lexer;
//! use jackc::token::{Keyword, TokenKind};
//!
//! let tokens = Lexer::new("let x = 1;").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Let));
//! assert_eq!(tokens.len(), 5);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - `cursor` - Position tracking and character navigation
//! - `skip` - Whitespace and comment handling
//! - `tokens` - Token recognition and reading
//! - `tests` - Unit tests (test-only)

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::{LexError, LexErrorKind};

use crate::token::Token;

/// A lexical analyzer that tokenizes Jack source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used
/// once per source file.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if:
    /// - a character that starts no Jack token is encountered,
    /// - a string constant is unterminated or contains a newline,
    /// - a block comment is unterminated,
    /// - an integer constant exceeds 32767.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;
            if self.is_eof() {
                break;
            }
            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }
}
