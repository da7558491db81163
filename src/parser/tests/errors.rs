//! Tests for parse error cases.

use super::*;
use crate::parser::ParseErrorKind;

#[test]
fn test_missing_class_keyword() {
    let err = parse_error("Main { }");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    assert!(
        err.message().contains("'class'"),
        "Message should name the expected keyword, got: {}",
        err.message()
    );
}

#[test]
fn test_missing_closing_brace() {
    let err = parse_error("class Main {");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn test_missing_semicolon() {
    parse_error("class Main { function void main() { return } }");
}

#[test]
fn test_statement_outside_subroutine() {
    parse_error("class Main { let x = 1; }");
}

#[test]
fn test_trailing_input_after_class() {
    let err = parse_error("class Main { } class Other { }");
    assert_eq!(err.kind(), ParseErrorKind::TrailingInput);
}

#[test]
fn test_keyword_as_identifier() {
    parse_error("class class { }");
}

#[test]
fn test_missing_expression_in_let() {
    parse_error("class Main { function void main() { let x = ; } }");
}

#[test]
fn test_unbalanced_parentheses() {
    parse_error("class Main { function void main() { let x = (1 + 2; } }");
}

#[test]
fn test_empty_input() {
    let err = parse_error("");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn test_error_span_points_at_offender() {
    let err = parse_error("class Main ; { }");
    assert_eq!(err.span().line, 1);
    assert_eq!(err.span().column, 12);
}
