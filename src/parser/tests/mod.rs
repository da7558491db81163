//! Unit tests for the parser module.

use super::*;
use crate::lexer::Lexer;
use crate::tree::{NodeId, NodeLabel, ParseTree};

/// Helper to lex and parse a source string.
pub(super) fn parse(source: &str) -> ParseTree {
    let tokens = Lexer::new(source)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexing failed for {:?}: {}", source, e));
    Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parsing failed for {:?}: {}", source, e))
}

/// Helper to lex and parse, expecting a parse error.
pub(super) fn parse_error(source: &str) -> ParseError {
    let tokens = Lexer::new(source)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexing failed for {:?}: {}", source, e));
    match Parser::new(tokens).parse() {
        Ok(_) => panic!("Expected parsing to fail for {:?}", source),
        Err(e) => e,
    }
}

/// Returns the labels of a node's children ("<leaf>" for text leaves).
pub(super) fn child_labels(tree: &ParseTree, id: NodeId) -> Vec<&'static str> {
    tree.children(id)
        .iter()
        .map(|c| tree.label(*c).map_or("<leaf>", NodeLabel::as_str))
        .collect()
}

/// Wraps a statement in a minimal class/subroutine and returns the tree.
pub(super) fn parse_statement(statement: &str) -> ParseTree {
    parse(&format!(
        "class Main {{ function void main() {{ {} return; }} }}",
        statement
    ))
}

/// Finds the first node with the given label, walking from the root.
pub(super) fn find_first(tree: &ParseTree, label: NodeLabel) -> Option<NodeId> {
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        if tree.label(id) == Some(label) {
            return Some(id);
        }
        for child in tree.children(id).iter().rev() {
            stack.push(*child);
        }
    }
    None
}

mod errors;
mod expressions;
mod invariants;
