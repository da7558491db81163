//! Expression, term, and subroutine-call lowering.
//!
//! Jack expressions are flat: operators apply strictly left-to-right
//! with no precedence, so `1 + 2 * 3` compiles as `(1 + 2) * 3`.

use super::error::CodegenError;
use super::Generator;
use crate::tree::{NodeId, NodeLabel};
use crate::vm::{ArithOp, Segment};

impl<'t> Generator<'t> {
    /// Compiles `term (op term)*`: each term is emitted, then the
    /// operator that preceded it.
    pub(super) fn compile_expression(&mut self, expression: NodeId) -> Result<(), CodegenError> {
        let mut pending_op: Option<String> = None;

        for child in self.tree.children(expression).to_vec() {
            match self.tree.label(child) {
                Some(NodeLabel::Term) => {
                    self.compile_term(child)?;
                    if let Some(op) = pending_op.take() {
                        self.emit_binary_op(&op)?;
                    }
                }
                Some(NodeLabel::Symbol) => {
                    pending_op = self.tree.token_text(child).map(str::to_string);
                }
                other => {
                    return Err(CodegenError::malformed(format!(
                        "Unexpected node {:?} under expression",
                        other
                    )));
                }
            }
        }
        Ok(())
    }

    /// Compiles one term; the child shape picks the form.
    pub(super) fn compile_term(&mut self, term: NodeId) -> Result<(), CodegenError> {
        let children = self.tree.children(term).to_vec();
        let first = *children
            .first()
            .ok_or_else(|| CodegenError::malformed("Empty term"))?;

        match self.tree.label(first) {
            Some(NodeLabel::IntegerConstant) => {
                let text = self.tree.token_text(first).unwrap_or_default();
                let value: u16 = text
                    .parse()
                    .map_err(|_| CodegenError::malformed(format!("Bad integer '{}'", text)))?;
                self.push(Segment::Constant, value);
                Ok(())
            }
            Some(NodeLabel::StringConstant) => {
                let text = self
                    .tree
                    .token_text(first)
                    .unwrap_or_default()
                    .to_string();
                self.compile_string(&text);
                Ok(())
            }
            Some(NodeLabel::Keyword) => {
                let keyword = self.tree.token_text(first).unwrap_or_default().to_string();
                self.compile_keyword_constant(&keyword)
            }
            Some(NodeLabel::Identifier) => {
                if self.tree.has_symbol_child(term, "(") || self.tree.has_symbol_child(term, ".") {
                    self.compile_call(term)
                } else if self.tree.has_symbol_child(term, "[") {
                    self.compile_array_read(term, first)
                } else {
                    let name = self.tree.token_text(first).unwrap_or_default().to_string();
                    let (segment, index) = self.resolve_var(&name)?;
                    self.push(segment, index);
                    Ok(())
                }
            }
            Some(NodeLabel::Symbol) => {
                let symbol = self.tree.token_text(first).unwrap_or_default().to_string();
                match symbol.as_str() {
                    "(" => {
                        let inner = self
                            .tree
                            .first_child(term, NodeLabel::Expression)
                            .ok_or_else(|| {
                                CodegenError::malformed("Parenthesized term has no expression")
                            })?;
                        self.compile_expression(inner)
                    }
                    "-" | "~" => {
                        let operand = self
                            .tree
                            .first_child(term, NodeLabel::Term)
                            .ok_or_else(|| {
                                CodegenError::malformed("Unary term has no operand")
                            })?;
                        self.compile_term(operand)?;
                        self.arith(if symbol == "-" {
                            ArithOp::Neg
                        } else {
                            ArithOp::Not
                        });
                        Ok(())
                    }
                    other => Err(CodegenError::malformed(format!(
                        "Unexpected symbol '{}' starting a term",
                        other
                    ))),
                }
            }
            other => Err(CodegenError::malformed(format!(
                "Unexpected node {:?} starting a term",
                other
            ))),
        }
    }

    /// `name[expr]` as a value: compute the element address into
    /// `pointer 1`, then read `that 0`.
    fn compile_array_read(&mut self, term: NodeId, name_node: NodeId) -> Result<(), CodegenError> {
        let name = self
            .tree
            .token_text(name_node)
            .unwrap_or_default()
            .to_string();
        let index_expr = self
            .tree
            .first_child(term, NodeLabel::Expression)
            .ok_or_else(|| CodegenError::malformed("Array access has no index expression"))?;

        let (segment, index) = self.resolve_var(&name)?;
        self.push(segment, index);
        self.compile_expression(index_expr)?;
        self.arith(ArithOp::Add);
        self.pop(Segment::Pointer, 1);
        self.push(Segment::That, 0);
        Ok(())
    }

    /// A string constant allocates a `String` and appends one character
    /// at a time; `appendChar` leaves the string on the stack.
    fn compile_string(&mut self, text: &str) {
        self.push(Segment::Constant, text.chars().count() as u16);
        self.call("String.new", 1);
        for c in text.chars() {
            self.push(Segment::Constant, c as u16);
            self.call("String.appendChar", 2);
        }
    }

    /// Lowers `true`, `false`, `null`, and `this`.
    ///
    /// `true` is all ones, produced as `-1`.
    fn compile_keyword_constant(&mut self, keyword: &str) -> Result<(), CodegenError> {
        match keyword {
            "true" => {
                self.push(Segment::Constant, 1);
                self.arith(ArithOp::Neg);
            }
            "false" | "null" => self.push(Segment::Constant, 0),
            "this" => self.push(Segment::Pointer, 0),
            other => {
                return Err(CodegenError::malformed(format!(
                    "Unexpected keyword '{}' in term",
                    other
                )));
            }
        }
        Ok(())
    }

    /// Compiles a subroutine call from a node holding flattened call
    /// elements (a `term` or a `doStatement`).
    ///
    /// The callee syntax picks one of three shapes:
    /// - `name(args)` — method call on the current object;
    /// - `obj.name(args)` where `obj` is a defined variable — method call
    ///   with `obj` pushed as the receiver;
    /// - `Cls.name(args)` otherwise — static function call.
    pub(super) fn compile_call(&mut self, node: NodeId) -> Result<(), CodegenError> {
        let identifiers = self.tree.children_labeled(node, NodeLabel::Identifier);
        let arguments = self
            .tree
            .first_child(node, NodeLabel::ExpressionList)
            .map(|list| self.tree.children_labeled(list, NodeLabel::Expression))
            .ok_or_else(|| CodegenError::malformed("Subroutine call has no argument list"))?;
        let arg_count = arguments.len() as u16;

        if !self.tree.has_symbol_child(node, ".") {
            // Undotted: a method of the current class, on `this`.
            let name = identifiers
                .first()
                .and_then(|id| self.tree.token_text(*id))
                .ok_or_else(|| CodegenError::malformed("Subroutine call has no callee"))?
                .to_string();
            self.push(Segment::Pointer, 0);
            for argument in arguments {
                self.compile_expression(argument)?;
            }
            let callee = format!("{}.{}", self.class_name, name);
            self.call(&callee, arg_count + 1);
            return Ok(());
        }

        let [receiver_node, subroutine_node] = identifiers[..] else {
            return Err(CodegenError::malformed(
                "Dotted subroutine call needs two identifiers",
            ));
        };
        let receiver = self
            .tree
            .token_text(receiver_node)
            .unwrap_or_default()
            .to_string();
        let subroutine = self
            .tree
            .token_text(subroutine_node)
            .unwrap_or_default()
            .to_string();

        if self.symbols.kind_of(&receiver).is_some() {
            // Method call on a variable: its value is the first argument.
            let receiver_type = self
                .symbols
                .type_of(&receiver)
                .unwrap_or_default()
                .to_string();
            let (segment, index) = self.resolve_var(&receiver)?;
            self.push(segment, index);
            for argument in arguments {
                self.compile_expression(argument)?;
            }
            let callee = format!("{}.{}", receiver_type, subroutine);
            self.call(&callee, arg_count + 1);
        } else {
            // Static function call on a class name.
            for argument in arguments {
                self.compile_expression(argument)?;
            }
            let callee = format!("{}.{}", receiver, subroutine);
            self.call(&callee, arg_count);
        }
        Ok(())
    }

    /// Emits the VM operation for a binary operator.
    fn emit_binary_op(&mut self, op: &str) -> Result<(), CodegenError> {
        match op {
            "+" => self.arith(ArithOp::Add),
            "-" => self.arith(ArithOp::Sub),
            "&" => self.arith(ArithOp::And),
            "|" => self.arith(ArithOp::Or),
            "<" => self.arith(ArithOp::Lt),
            ">" => self.arith(ArithOp::Gt),
            "=" => self.arith(ArithOp::Eq),
            "*" => self.call("Math.multiply", 2),
            "/" => self.call("Math.divide", 2),
            other => {
                return Err(CodegenError::malformed(format!(
                    "Unexpected binary operator '{}'",
                    other
                )));
            }
        }
        Ok(())
    }
}
