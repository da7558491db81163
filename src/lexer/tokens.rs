//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the four token shapes of
//! Jack: single-character symbols, decimal integer constants, string
//! constants, and identifiers (which may turn out to be keywords).

use super::Lexer;
use super::error::LexError;
use crate::token::{Keyword, Span, Symbol, Token, TokenKind};

/// The largest value an integer constant may hold (15-bit Hack constant).
const MAX_INT_CONSTANT: u32 = 32767;

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input.
    ///
    /// Assumes that whitespace and comments have already been skipped and
    /// that at least one character remains.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the current character starts no Jack
    /// token, or if a string or integer constant is malformed.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        // skip_whitespace_and_comments leaves us on a real character
        let c = match self.current_char() {
            Some(c) => c,
            None => {
                return Err(LexError::unexpected_character(
                    '\0',
                    Span::new(start_pos, start_pos, start_line, start_column),
                ));
            }
        };

        if let Some(symbol) = Symbol::from_char(c) {
            self.advance();
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            return Ok(Token::new(TokenKind::Symbol(symbol), span));
        }

        if c == '"' {
            return self.read_string(start_pos, start_line, start_column);
        }

        if c.is_ascii_digit() {
            return self.read_integer(start_pos, start_line, start_column);
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.read_identifier_or_keyword(start_pos, start_line, start_column));
        }

        Err(LexError::unexpected_character(
            c,
            Span::new(start_pos, start_pos + c.len_utf8(), start_line, start_column),
        ))
    }

    /// Reads a string constant.
    ///
    /// The opening quote is at the current position. The returned token
    /// holds the text between the quotes; Jack strings have no escape
    /// sequences.
    fn read_string(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        self.advance(); // skip opening "
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance(); // skip closing "
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Ok(Token::new(TokenKind::StrConst(value), span));
                }
                Some('\n') => {
                    return Err(LexError::string_contains_newline(Span::new(
                        start_pos,
                        self.pos,
                        start_line,
                        start_column,
                    )));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    return Err(LexError::unterminated_string(Span::new(
                        start_pos,
                        self.pos,
                        start_line,
                        start_column,
                    )));
                }
            }
        }
    }

    /// Reads a decimal integer constant.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the value exceeds 32767.
    fn read_integer(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let value: u32 = text
            .parse()
            .map_err(|_| LexError::integer_out_of_range(text, span))?;
        if value > MAX_INT_CONSTANT {
            return Err(LexError::integer_out_of_range(text, span));
        }

        Ok(Token::new(TokenKind::IntConst(value as u16), span))
    }

    /// Reads an identifier or keyword.
    ///
    /// Identifiers consist of ASCII letters, digits, and underscores, not
    /// starting with a digit. If the lexeme matches a reserved word, a
    /// keyword token is returned instead.
    fn read_identifier_or_keyword(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match Keyword::from_str(text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(text.to_string()),
        };

        Token::new(kind, span)
    }
}
