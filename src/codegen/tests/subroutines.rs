//! Tests for subroutine framing: function lines, preludes, locals.

use super::*;

#[test]
fn test_minimal_function() {
    let lines = compile("class Main { function void main() { return; } }");
    assert_eq!(
        lines,
        vec!["function Main.main 0", "push constant 0", "return"]
    );
}

#[test]
fn test_locals_count_sums_var_decs() {
    let lines = compile_main("var int i, j; var boolean flag; return;");
    assert_eq!(lines[0], "function Main.main 3");
}

#[test]
fn test_constructor_prelude() {
    let lines = compile(
        "class Point { \
           field int x, y; \
           constructor Point new(int ax, int ay) { \
             let x = ax; \
             let y = ay; \
             return this; \
           } \
         }",
    );
    assert_eq!(
        &lines[..4],
        &[
            "function Point.new 0",
            "push constant 2",
            "call Memory.alloc 1",
            "pop pointer 0"
        ]
    );
    // Field assignments go through the this segment.
    assert_contains_run(&lines, &["push argument 0", "pop this 0"]);
    assert_contains_run(&lines, &["push argument 1", "pop this 1"]);
    // `return this` pushes the base of the new object.
    assert_eq!(&lines[lines.len() - 2..], &["push pointer 0", "return"]);
}

#[test]
fn test_constructor_counts_only_fields() {
    let lines = compile(
        "class Counter { \
           static int instances; \
           field int value; \
           constructor Counter new() { return this; } \
         }",
    );
    assert_contains_run(
        &lines,
        &["push constant 1", "call Memory.alloc 1", "pop pointer 0"],
    );
}

#[test]
fn test_method_prelude() {
    let lines = compile(
        "class Point { \
           field int x; \
           method int getX() { return x; } \
         }",
    );
    assert_eq!(
        lines,
        vec![
            "function Point.getX 0",
            "push argument 0",
            "pop pointer 0",
            "push this 0",
            "return"
        ]
    );
}

#[test]
fn test_method_parameters_shift_past_receiver() {
    let lines = compile(
        "class Point { \
           method int plus(int dx) { return dx; } \
         }",
    );
    // dx is ARG 1; ARG 0 is the receiver.
    assert_contains_run(&lines, &["push argument 1", "return"]);
}

#[test]
fn test_function_has_no_prelude() {
    let lines = compile_main("return;");
    assert_eq!(lines[1], "push constant 0");
}

#[test]
fn test_static_variables_use_static_segment() {
    let lines = compile(
        "class Main { \
           static int total; \
           function void bump() { let total = total + 1; return; } \
         }",
    );
    assert_contains_run(
        &lines,
        &["push static 0", "push constant 1", "add", "pop static 0"],
    );
}

#[test]
fn test_undefined_symbol_is_fatal() {
    let err = compile_error("class Main { function void main() { let x = 1; } }");
    assert_eq!(err.kind(), CodegenErrorKind::UndefinedSymbol);
    assert!(err.message().contains('x'));
}
