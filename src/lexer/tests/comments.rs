//! Tests for line and block comment handling.

use super::*;
use crate::token::Keyword;

#[test]
fn test_line_comment_to_end_of_line() {
    assert_eq!(
        tokenize_kinds("// nothing here\nreturn"),
        vec![TokenKind::Keyword(Keyword::Return)]
    );
}

#[test]
fn test_line_comment_after_token() {
    assert_eq!(
        tokenize_kinds("return // trailing"),
        vec![TokenKind::Keyword(Keyword::Return)]
    );
}

#[test]
fn test_line_comment_at_eof_without_newline() {
    assert_eq!(tokenize_kinds("// only a comment"), vec![]);
}

#[test]
fn test_block_comment() {
    assert_eq!(
        tokenize_kinds("/** doc comment */ return"),
        vec![TokenKind::Keyword(Keyword::Return)]
    );
}

#[test]
fn test_block_comment_spanning_lines() {
    assert_eq!(
        tokenize_kinds("/** line one\n * line two\n */\nreturn"),
        vec![TokenKind::Keyword(Keyword::Return)]
    );
}

#[test]
fn test_block_comment_between_tokens() {
    assert_eq!(
        tokenize_kinds("let /* gap */ x"),
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Identifier("x".to_string()),
        ]
    );
}

#[test]
fn test_consecutive_comments() {
    assert_eq!(
        tokenize_kinds("// one\n/** two */ // three\nreturn"),
        vec![TokenKind::Keyword(Keyword::Return)]
    );
}

#[test]
fn test_slash_is_still_a_symbol() {
    let kinds = tokenize_kinds("a / b");
    assert_eq!(kinds.len(), 3);
}

#[test]
fn test_comment_markers_inside_string_are_text() {
    assert_eq!(
        tokenize_kinds("\"not // a comment\""),
        vec![TokenKind::StrConst("not // a comment".to_string())]
    );
}
