//! Whitespace and comment skipping for the lexer.

use super::Lexer;
use super::error::LexError;
use crate::token::Span;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments in a loop.
    ///
    /// Handles the case where a comment is followed by whitespace, which
    /// is followed by another comment, and so on.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            self.skip_whitespace();
            if !self.skip_comment()? {
                return Ok(());
            }
        }
    }

    /// Skips consecutive whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    /// Skips a comment if one starts at the current position.
    ///
    /// Line comments start with `//` and extend to the end of the line.
    /// Block comments start with `/*` (conventionally `/**`) and extend to
    /// the matching `*/`.
    ///
    /// # Returns
    ///
    /// `true` if a comment was skipped, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if a block comment is not terminated before
    /// the end of input.
    fn skip_comment(&mut self) -> Result<bool, LexError> {
        if self.input[self.pos..].starts_with("//") {
            while let Some(c) = self.current_char() {
                if c == '\n' {
                    self.advance();
                    break;
                }
                self.advance();
            }
            return Ok(true);
        }

        if self.input[self.pos..].starts_with("/*") {
            let start_pos = self.pos;
            let start_line = self.line;
            let start_column = self.column;
            self.advance();
            self.advance();
            while !self.input[self.pos..].starts_with("*/") {
                if self.is_eof() {
                    return Err(LexError::unterminated_block_comment(Span::new(
                        start_pos,
                        self.pos,
                        start_line,
                        start_column,
                    )));
                }
                self.advance();
            }
            self.advance();
            self.advance();
            return Ok(true);
        }

        Ok(false)
    }
}
