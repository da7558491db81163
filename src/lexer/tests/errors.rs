//! Tests for lexer error cases.

use super::*;
use crate::lexer::LexErrorKind;

#[test]
fn test_unterminated_string() {
    let err = tokenize_error("\"no closing quote");
    assert_eq!(err.kind(), LexErrorKind::UnterminatedString);
}

#[test]
fn test_string_with_newline() {
    let err = tokenize_error("\"line one\nline two\"");
    assert_eq!(err.kind(), LexErrorKind::StringContainsNewline);
}

#[test]
fn test_unterminated_block_comment() {
    let err = tokenize_error("/** never closed");
    assert_eq!(err.kind(), LexErrorKind::UnterminatedBlockComment);
}

#[test]
fn test_unexpected_character() {
    let err = tokenize_error("let x = #;");
    assert_eq!(err.kind(), LexErrorKind::UnexpectedCharacter);
    assert!(
        err.message().contains('#'),
        "Message should name the character, got: {}",
        err.message()
    );
}

#[test]
fn test_integer_too_large() {
    let err = tokenize_error("32768");
    assert_eq!(err.kind(), LexErrorKind::IntegerOutOfRange);
}

#[test]
fn test_error_reports_line() {
    let err = tokenize_error("let x = 1;\nlet y = @;");
    assert_eq!(err.span().line, 2);
}

#[test]
fn test_error_display_has_position() {
    let err = tokenize_error("@");
    assert!(err.to_string().starts_with("1:1:"));
}
