//! Recursive descent parser for the Jack language.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into a concrete [`ParseTree`].
//!
//! # Overview
//!
//! The parser is an interpreter over the reified grammar in
//! [`crate::grammar`]: each [`GrammarElement`](crate::grammar::GrammarElement)
//! consumes tokens and produces parse-tree nodes. A failed sequence
//! rewinds the token index to where the sequence started before
//! propagating its error, which lets an enclosing alternative try the
//! next branch. This trial-based disambiguation is what resolves the one
//! non-LL(1) spot in the Jack grammar: a leading identifier in a term may
//! begin a plain variable, an array access, or a subroutine call, and
//! only the following `[`, `(`, or `.` decides.
//!
//! The tree mirrors the grammar productions one-to-one; the root is
//! always labeled `class`.
//!
//! # Examples
//!
//! ```
//! use jackc::lexer::Lexer;
//! use jackc::parser::Parser;
//! use jackc::tree::NodeLabel;
//!
//! let tokens = Lexer::new("class Main { }").tokenize().unwrap();
//! let tree = Parser::new(tokens).parse().unwrap();
//! assert_eq!(tree.label(tree.root()), Some(NodeLabel::Class));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `engine` - The grammar-element interpreter
//! - `tests` - Unit tests (test-only)

mod engine;
mod error;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use crate::grammar;
use crate::token::{Span, Token};
use crate::tree::{NodeLabel, ParseTree};

/// A recursive descent parser driven by the reified Jack grammar.
///
/// The parser maintains a position within the token stream; the engine
/// rewinds it when a grammar branch fails.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
}

impl Parser {
    /// Creates a new parser from a token list.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Parses the token stream into a [`ParseTree`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input does not match the top-level
    /// class production, or if tokens remain after it.
    pub fn parse(mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new();
        let root = tree.add_interior(NodeLabel::Class);

        let children = self.apply(grammar::class_rule(), &mut tree)?;
        tree.attach_all(root, children);

        if let Some(token) = self.peek() {
            return Err(ParseError::trailing_input(
                &token.kind.text(),
                token.span,
            ));
        }

        Ok(tree)
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// The span to report when the stream is exhausted.
    fn end_span(&self) -> Span {
        match self.tokens.last() {
            Some(token) => token.span,
            None => Span::new(0, 0, 1, 1),
        }
    }
}
