//! The `jackc` toolchain library.
//!
//! This library implements a three-stage pipeline that translates the Jack
//! language into binary machine words for the 16-bit Hack computer:
//!
//! 1. **Compiler** — lexes Jack source ([`lexer`]), parses it into a concrete
//!    parse tree ([`parser`], [`grammar`], [`tree`]), resolves identifiers
//!    through a two-scope symbol table ([`symtab`]), and generates stack
//!    virtual-machine code ([`codegen`]).
//! 2. **VM translator** — parses VM commands ([`vm`]) and lowers them to
//!    symbolic Hack assembly, implementing the stack calling convention
//!    ([`translate`]).
//! 3. **Assembler** — resolves symbols in two passes and encodes 16-bit
//!    binary words ([`assemble`]).
//!
//! Data flows strictly forward: `.jack` → tokens → parse tree → VM commands
//! → assembly text → binary. No stage shares mutable state with another;
//! every stage is single-threaded and processes one file at a time.
//!
//! The [`driver`] module orchestrates file discovery and per-stage pipelines
//! for the `jackc` binary.
//!
//! # Example
//!
//! ```
//! use jackc::lexer::Lexer;
//! use jackc::parser::Parser;
//! use jackc::codegen;
//!
//! let source = "class Main { function void main() { return; } }";
//! let tokens = Lexer::new(source).tokenize().expect("lex error");
//! let tree = Parser::new(tokens).parse().expect("parse error");
//! let commands = codegen::generate(&tree).expect("codegen error");
//!
//! assert_eq!(commands[0].to_string(), "function Main.main 0");
//! ```

pub mod assemble;
pub mod codegen;
pub mod driver;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod symtab;
pub mod token;
pub mod translate;
pub mod tree;
pub mod vm;
