//! VM code generation for Jack classes.
//!
//! This module walks a concrete [`ParseTree`] and emits stack VM
//! commands. [`generate`] is the entry point; it compiles each
//! subroutine of the class into a VM function named `Class.subroutine`.
//!
//! # Overview
//!
//! The generator is stateful: it carries the class name, the two-scope
//! symbol table, a monotonically increasing label counter (labels are
//! unique within one compilation unit), and the class field count, which
//! sizes object allocation in constructors.
//!
//! Each subroutine gets a prelude determined by its kind:
//!
//! | Keyword       | Prelude after `function Class.name nLocals`            |
//! |---------------|--------------------------------------------------------|
//! | `function`    | none                                                   |
//! | `constructor` | `push constant <nFields>; call Memory.alloc 1; pop pointer 0` |
//! | `method`      | `push argument 0; pop pointer 0`, receiver seeded as `ARG 0` |
//!
//! # Example
//!
//! ```
//! use jackc::lexer::Lexer;
//! use jackc::parser::Parser;
//! use jackc::codegen;
//!
//! let tokens = Lexer::new("class Main { function void main() { return; } }")
//!     .tokenize()
//!     .unwrap();
//! let tree = Parser::new(tokens).parse().unwrap();
//! let commands = codegen::generate(&tree).unwrap();
//!
//! let text: Vec<String> = commands.iter().map(|c| c.to_string()).collect();
//! assert_eq!(text, ["function Main.main 0", "push constant 0", "return"]);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for code generation
//! - `stmt` - Statement lowering
//! - `expr` - Expression, term, and subroutine-call lowering
//! - `tests` - Unit tests (test-only)

mod error;
mod expr;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::{CodegenError, CodegenErrorKind};

use crate::grammar::IdentifierCategory;
use crate::symtab::{SymbolKind, SymbolTable};
use crate::tree::{NodeId, NodeLabel, ParseTree};
use crate::vm::{ArithOp, Segment, VmCommand};

/// Generates VM code for the class in `tree`.
///
/// # Errors
///
/// Returns a [`CodegenError`] on the first undefined symbol, unknown
/// subroutine kind, or malformed tree node.
pub fn generate(tree: &ParseTree) -> Result<Vec<VmCommand>, CodegenError> {
    Generator::new(tree).run()
}

/// The kind of subroutine being compiled, from its leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubroutineKind {
    Constructor,
    Function,
    Method,
}

/// Stateful VM code generator for one compilation unit.
pub(super) struct Generator<'t> {
    tree: &'t ParseTree,
    symbols: SymbolTable,
    class_name: String,
    label_count: usize,
    field_count: u16,
    output: Vec<VmCommand>,
}

impl<'t> Generator<'t> {
    fn new(tree: &'t ParseTree) -> Self {
        Generator {
            tree,
            symbols: SymbolTable::new(),
            class_name: String::new(),
            label_count: 0,
            field_count: 0,
            output: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<VmCommand>, CodegenError> {
        let root = self.tree.root();
        if self.tree.label(root) != Some(NodeLabel::Class) {
            return Err(CodegenError::malformed("Root node is not a class"));
        }

        self.class_name = self
            .tree
            .first_child(root, NodeLabel::Identifier)
            .and_then(|id| self.tree.token_text(id))
            .ok_or_else(|| CodegenError::malformed("Class has no name"))?
            .to_string();
        log::debug!("generating VM code for class {}", self.class_name);

        for dec in self.tree.children_labeled(root, NodeLabel::ClassVarDec) {
            self.define_class_vars(dec)?;
        }
        for dec in self.tree.children_labeled(root, NodeLabel::SubroutineDec) {
            self.compile_subroutine(dec)?;
        }

        Ok(self.output)
    }

    /// Enters one `static` or `field` declaration into the class scope.
    fn define_class_vars(&mut self, dec: NodeId) -> Result<(), CodegenError> {
        let children = self.tree.children(dec);
        let storage = children
            .first()
            .and_then(|id| self.tree.token_text(*id))
            .ok_or_else(|| CodegenError::malformed("Empty class variable declaration"))?;
        let kind = match storage {
            "static" => SymbolKind::Static,
            "field" => SymbolKind::Field,
            other => {
                return Err(CodegenError::malformed(format!(
                    "Unexpected class variable storage '{}'",
                    other
                )));
            }
        };
        let ty = self.declared_type(dec)?;

        for name in self.declared_names(dec) {
            self.symbols.define(&name, &ty, kind);
            if kind == SymbolKind::Field {
                self.field_count += 1;
            }
        }
        Ok(())
    }

    /// Compiles one subroutine declaration into a VM function.
    fn compile_subroutine(&mut self, dec: NodeId) -> Result<(), CodegenError> {
        self.symbols.start_subroutine();

        let keyword = self
            .tree
            .children(dec)
            .first()
            .and_then(|id| self.tree.token_text(*id))
            .ok_or_else(|| CodegenError::malformed("Empty subroutine declaration"))?;
        let kind = match keyword {
            "constructor" => SubroutineKind::Constructor,
            "function" => SubroutineKind::Function,
            "method" => SubroutineKind::Method,
            other => return Err(CodegenError::unknown_subroutine_kind(other)),
        };

        let name = self
            .tree
            .children_labeled(dec, NodeLabel::Identifier)
            .into_iter()
            .find(|id| self.tree.category(*id) == Some(IdentifierCategory::SubroutineName))
            .and_then(|id| self.tree.token_text(id))
            .ok_or_else(|| CodegenError::malformed("Subroutine has no name"))?
            .to_string();

        // A method's receiver occupies ARG 0 before any declared parameter.
        if kind == SubroutineKind::Method {
            let class_name = self.class_name.clone();
            self.symbols.define("this", &class_name, SymbolKind::Arg);
        }

        let params = self
            .tree
            .first_child(dec, NodeLabel::ParameterList)
            .ok_or_else(|| CodegenError::malformed("Subroutine has no parameter list"))?;
        self.define_parameters(params)?;

        let body = self
            .tree
            .first_child(dec, NodeLabel::SubroutineBody)
            .ok_or_else(|| CodegenError::malformed("Subroutine has no body"))?;

        let mut locals = 0;
        for var_dec in self.tree.children_labeled(body, NodeLabel::VarDec) {
            locals += self.define_locals(var_dec)?;
        }

        self.emit(VmCommand::Function {
            name: format!("{}.{}", self.class_name, name),
            locals,
        });

        match kind {
            SubroutineKind::Function => {}
            SubroutineKind::Constructor => {
                self.push(Segment::Constant, self.field_count);
                self.call("Memory.alloc", 1);
                self.pop(Segment::Pointer, 0);
            }
            SubroutineKind::Method => {
                self.push(Segment::Argument, 0);
                self.pop(Segment::Pointer, 0);
            }
        }

        let statements = self
            .tree
            .first_child(body, NodeLabel::Statements)
            .ok_or_else(|| CodegenError::malformed("Subroutine body has no statements"))?;
        self.compile_statements(statements)
    }

    /// Enters a parameter list's `(type name)` pairs as arguments.
    fn define_parameters(&mut self, params: NodeId) -> Result<(), CodegenError> {
        let tokens: Vec<NodeId> = self
            .tree
            .children(params)
            .iter()
            .copied()
            .filter(|id| self.tree.label(*id) != Some(NodeLabel::Symbol))
            .collect();
        if tokens.len() % 2 != 0 {
            return Err(CodegenError::malformed("Uneven parameter list"));
        }

        for pair in tokens.chunks(2) {
            let ty = self
                .tree
                .token_text(pair[0])
                .ok_or_else(|| CodegenError::malformed("Parameter type is not a token"))?
                .to_string();
            let name = self
                .tree
                .token_text(pair[1])
                .ok_or_else(|| CodegenError::malformed("Parameter name is not a token"))?
                .to_string();
            self.symbols.define(&name, &ty, SymbolKind::Arg);
        }
        Ok(())
    }

    /// Enters one `var` declaration's names as locals; returns how many.
    fn define_locals(&mut self, var_dec: NodeId) -> Result<u16, CodegenError> {
        let ty = self.declared_type(var_dec)?;
        let names = self.declared_names(var_dec);
        for name in &names {
            self.symbols.define(name, &ty, SymbolKind::Var);
        }
        Ok(names.len() as u16)
    }

    /// Reads the declared type of a `classVarDec` or `varDec`: the token
    /// after the storage keyword.
    fn declared_type(&self, dec: NodeId) -> Result<String, CodegenError> {
        self.tree
            .children(dec)
            .get(1)
            .and_then(|id| self.tree.token_text(*id))
            .map(str::to_string)
            .ok_or_else(|| CodegenError::malformed("Declaration has no type"))
    }

    /// Reads the declared variable names of a `classVarDec` or `varDec`.
    ///
    /// Identifiers stamped as variable names; a class-name type token is
    /// excluded by its category.
    fn declared_names(&self, dec: NodeId) -> Vec<String> {
        self.tree
            .children_labeled(dec, NodeLabel::Identifier)
            .into_iter()
            .filter(|id| self.tree.category(*id) == Some(IdentifierCategory::VarName))
            .filter_map(|id| self.tree.token_text(id))
            .map(str::to_string)
            .collect()
    }

    // Emission helpers

    fn emit(&mut self, command: VmCommand) {
        self.output.push(command);
    }

    fn push(&mut self, segment: Segment, index: u16) {
        self.emit(VmCommand::Push { segment, index });
    }

    fn pop(&mut self, segment: Segment, index: u16) {
        self.emit(VmCommand::Pop { segment, index });
    }

    fn call(&mut self, name: &str, args: u16) {
        self.emit(VmCommand::Call {
            name: name.to_string(),
            args,
        });
    }

    fn arith(&mut self, op: ArithOp) {
        self.emit(VmCommand::Arithmetic(op));
    }

    /// Allocates a fresh label, unique within this compilation unit.
    fn fresh_label(&mut self) -> String {
        let label = format!("L{}", self.label_count);
        self.label_count += 1;
        label
    }

    /// Resolves a variable to the segment and index its kind maps to.
    fn resolve_var(&self, name: &str) -> Result<(Segment, u16), CodegenError> {
        let kind = self
            .symbols
            .kind_of(name)
            .ok_or_else(|| CodegenError::undefined_symbol(name))?;
        let index = self
            .symbols
            .index_of(name)
            .ok_or_else(|| CodegenError::undefined_symbol(name))?;
        let segment = match kind {
            SymbolKind::Var => Segment::Local,
            SymbolKind::Arg => Segment::Argument,
            SymbolKind::Field => Segment::This,
            SymbolKind::Static => Segment::Static,
        };
        Ok((segment, index))
    }
}
