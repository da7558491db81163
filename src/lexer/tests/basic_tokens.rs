//! Tests for keywords, symbols, and identifiers.

use super::*;
use crate::token::{Keyword, Symbol};

#[test]
fn test_empty_input() {
    assert_eq!(tokenize_kinds(""), vec![]);
}

#[test]
fn test_whitespace_only() {
    assert_eq!(tokenize_kinds("   \n\t  \n"), vec![]);
}

#[test]
fn test_single_keyword() {
    assert_eq!(
        tokenize_kinds("class"),
        vec![TokenKind::Keyword(Keyword::Class)]
    );
}

#[test]
fn test_all_keywords() {
    let input = "class constructor function method field static var int char \
                 boolean void true false null this let do if else while return";
    let kinds = tokenize_kinds(input);
    assert_eq!(kinds.len(), 21);
    assert!(
        kinds
            .iter()
            .all(|k| matches!(k, TokenKind::Keyword(_))),
        "Every lexeme should be a keyword, got: {:?}",
        kinds
    );
}

#[test]
fn test_identifier() {
    assert_eq!(
        tokenize_kinds("counter"),
        vec![TokenKind::Identifier("counter".to_string())]
    );
}

#[test]
fn test_identifier_with_underscore_and_digits() {
    assert_eq!(
        tokenize_kinds("_row2_col3"),
        vec![TokenKind::Identifier("_row2_col3".to_string())]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    // "classes" starts with the keyword "class" but is an identifier.
    assert_eq!(
        tokenize_kinds("classes"),
        vec![TokenKind::Identifier("classes".to_string())]
    );
}

#[test]
fn test_all_symbols() {
    let kinds = tokenize_kinds("{ } ( ) [ ] . , ; + - * / & | < > = ~");
    assert_eq!(kinds.len(), 19);
    assert!(kinds.iter().all(|k| matches!(k, TokenKind::Symbol(_))));
}

#[test]
fn test_symbols_without_whitespace() {
    assert_eq!(
        tokenize_kinds("a[i]"),
        vec![
            TokenKind::Identifier("a".to_string()),
            TokenKind::Symbol(Symbol::LeftBracket),
            TokenKind::Identifier("i".to_string()),
            TokenKind::Symbol(Symbol::RightBracket),
        ]
    );
}

#[test]
fn test_statement_tokens() {
    assert_eq!(
        tokenize_kinds("let x = y + 1;"),
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Identifier("x".to_string()),
            TokenKind::Symbol(Symbol::Equals),
            TokenKind::Identifier("y".to_string()),
            TokenKind::Symbol(Symbol::Plus),
            TokenKind::IntConst(1),
            TokenKind::Symbol(Symbol::Semicolon),
        ]
    );
}

#[test]
fn test_dotted_call_tokens() {
    assert_eq!(
        tokenize_kinds("do Output.printInt(3);"),
        vec![
            TokenKind::Keyword(Keyword::Do),
            TokenKind::Identifier("Output".to_string()),
            TokenKind::Symbol(Symbol::Dot),
            TokenKind::Identifier("printInt".to_string()),
            TokenKind::Symbol(Symbol::LeftParen),
            TokenKind::IntConst(3),
            TokenKind::Symbol(Symbol::RightParen),
            TokenKind::Symbol(Symbol::Semicolon),
        ]
    );
}
