//! Tests for expression and term productions.

use super::*;
use crate::grammar::IdentifierCategory;

/// Parses `expr` as the right-hand side of a let statement and returns
/// the tree together with the expression node.
fn parse_expression(expr: &str) -> (ParseTree, NodeId) {
    let tree = parse_statement(&format!("let x = {};", expr));
    let stmt = find_first(&tree, NodeLabel::LetStatement).unwrap();
    let node = tree.first_child(stmt, NodeLabel::Expression).unwrap();
    (tree, node)
}

#[test]
fn test_single_term_expression() {
    let (tree, expr) = parse_expression("5");
    assert_eq!(child_labels(&tree, expr), vec!["term"]);
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    assert_eq!(child_labels(&tree, term), vec!["integerConstant"]);
}

#[test]
fn test_binary_expression() {
    let (tree, expr) = parse_expression("1 + 2");
    assert_eq!(child_labels(&tree, expr), vec!["term", "symbol", "term"]);
}

#[test]
fn test_flat_operator_chain() {
    // The grammar is flat: no precedence, strictly left-to-right.
    let (tree, expr) = parse_expression("1 + 2 * 3 - 4");
    assert_eq!(
        child_labels(&tree, expr),
        vec!["term", "symbol", "term", "symbol", "term", "symbol", "term"]
    );
}

#[test]
fn test_string_constant_term() {
    let (tree, expr) = parse_expression("\"HELLO\"");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    let constant = tree.first_child(term, NodeLabel::StringConstant).unwrap();
    assert_eq!(tree.token_text(constant), Some("HELLO"));
}

#[test]
fn test_keyword_constant_term() {
    let (tree, expr) = parse_expression("true");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    assert_eq!(child_labels(&tree, term), vec!["keyword"]);
}

#[test]
fn test_var_name_term() {
    let (tree, expr) = parse_expression("count");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    let name = tree.first_child(term, NodeLabel::Identifier).unwrap();
    assert_eq!(tree.token_text(name), Some("count"));
    assert_eq!(tree.category(name), Some(IdentifierCategory::VarName));
}

#[test]
fn test_array_access_term() {
    let (tree, expr) = parse_expression("a[i + 1]");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    assert_eq!(
        child_labels(&tree, term),
        vec!["identifier", "symbol", "expression", "symbol"]
    );
}

#[test]
fn test_parenthesized_term() {
    let (tree, expr) = parse_expression("(1 + 2)");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    assert_eq!(
        child_labels(&tree, term),
        vec!["symbol", "expression", "symbol"]
    );
}

#[test]
fn test_unary_term() {
    let (tree, expr) = parse_expression("-x");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    assert_eq!(child_labels(&tree, term), vec!["symbol", "term"]);
}

#[test]
fn test_double_unary_term() {
    let (tree, expr) = parse_expression("~~flag");
    let outer = tree.first_child(expr, NodeLabel::Term).unwrap();
    let inner = tree.first_child(outer, NodeLabel::Term).unwrap();
    assert_eq!(child_labels(&tree, inner), vec!["symbol", "term"]);
}

#[test]
fn test_undotted_call_term() {
    let (tree, expr) = parse_expression("size()");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    assert_eq!(
        child_labels(&tree, term),
        vec!["identifier", "symbol", "expressionList", "symbol"]
    );
    let name = tree.first_child(term, NodeLabel::Identifier).unwrap();
    assert_eq!(
        tree.category(name),
        Some(IdentifierCategory::SubroutineName)
    );
}

#[test]
fn test_dotted_call_term() {
    let (tree, expr) = parse_expression("Math.max(a, b)");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    assert_eq!(
        child_labels(&tree, term),
        vec![
            "identifier",
            "symbol",
            "identifier",
            "symbol",
            "expressionList",
            "symbol"
        ]
    );
    let list = tree.first_child(term, NodeLabel::ExpressionList).unwrap();
    assert_eq!(tree.children_labeled(list, NodeLabel::Expression).len(), 2);
}

#[test]
fn test_empty_expression_list() {
    let (tree, expr) = parse_expression("Memory.peek()");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    let list = tree.first_child(term, NodeLabel::ExpressionList).unwrap();
    assert!(tree.children(list).is_empty());
}

#[test]
fn test_nested_call_arguments() {
    let (tree, expr) = parse_expression("Math.max(Math.min(a, b), c)");
    let term = tree.first_child(expr, NodeLabel::Term).unwrap();
    let list = tree.first_child(term, NodeLabel::ExpressionList).unwrap();
    assert_eq!(tree.children_labeled(list, NodeLabel::Expression).len(), 2);
}

#[test]
fn test_array_access_versus_call_disambiguation() {
    // Same leading identifier shape; the following symbol decides.
    let (tree, expr) = parse_expression("a[1] + a(2) + a");
    let terms = tree.children_labeled(expr, NodeLabel::Term);
    assert_eq!(terms.len(), 3);
    assert!(tree.has_symbol_child(terms[0], "["));
    assert!(tree.has_symbol_child(terms[1], "("));
    assert_eq!(child_labels(&tree, terms[2]), vec!["identifier"]);
}
