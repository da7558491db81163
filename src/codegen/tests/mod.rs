//! Unit tests for the code generator.

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Compiles a class and returns the VM text lines.
pub(super) fn compile(source: &str) -> Vec<String> {
    let tokens = Lexer::new(source)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexing failed: {}", e));
    let tree = Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parsing failed: {}", e));
    generate(&tree)
        .unwrap_or_else(|e| panic!("Codegen failed: {}", e))
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Compiles a class, expecting a codegen error.
pub(super) fn compile_error(source: &str) -> CodegenError {
    let tokens = Lexer::new(source).tokenize().unwrap();
    let tree = Parser::new(tokens).parse().unwrap();
    match generate(&tree) {
        Ok(commands) => panic!(
            "Expected codegen to fail, got {} commands",
            commands.len()
        ),
        Err(e) => e,
    }
}

/// Wraps statements in `class Main { function void main() { ... } }` and
/// compiles.
pub(super) fn compile_main(statements: &str) -> Vec<String> {
    compile(&format!(
        "class Main {{ function void main() {{ {} }} }}",
        statements
    ))
}

/// Asserts that `lines` contains `expected` as a contiguous run.
pub(super) fn assert_contains_run(lines: &[String], expected: &[&str]) {
    let found = lines
        .windows(expected.len())
        .any(|window| window.iter().map(String::as_str).eq(expected.iter().copied()));
    assert!(
        found,
        "Expected contiguous run {:#?} in:\n{}",
        expected,
        lines.join("\n")
    );
}

mod subroutines;
