//! Statement lowering.
//!
//! Each statement form compiles to a fixed VM shape; labels come from the
//! generator's per-unit counter so `if` and `while` sites never collide.

use super::error::CodegenError;
use super::Generator;
use crate::tree::{NodeId, NodeLabel};
use crate::vm::{ArithOp, Segment, VmCommand};

impl<'t> Generator<'t> {
    /// Compiles every statement under a `statements` node.
    pub(super) fn compile_statements(&mut self, statements: NodeId) -> Result<(), CodegenError> {
        for statement in self.tree.children(statements).to_vec() {
            match self.tree.label(statement) {
                Some(NodeLabel::LetStatement) => self.compile_let(statement)?,
                Some(NodeLabel::IfStatement) => self.compile_if(statement)?,
                Some(NodeLabel::WhileStatement) => self.compile_while(statement)?,
                Some(NodeLabel::DoStatement) => self.compile_do(statement)?,
                Some(NodeLabel::ReturnStatement) => self.compile_return(statement)?,
                other => {
                    return Err(CodegenError::malformed(format!(
                        "Unexpected node {:?} under statements",
                        other
                    )));
                }
            }
        }
        Ok(())
    }

    /// `let name = expr;` pops the value into the variable's segment.
    ///
    /// `let name[idx] = expr;` computes the element address first, then
    /// saves the right-hand value in `temp 0` while restoring the address
    /// into `pointer 1`: the address must survive evaluation of the
    /// right-hand side.
    fn compile_let(&mut self, statement: NodeId) -> Result<(), CodegenError> {
        let name = self
            .tree
            .first_child(statement, NodeLabel::Identifier)
            .and_then(|id| self.tree.token_text(id))
            .ok_or_else(|| CodegenError::malformed("let statement has no target"))?
            .to_string();
        let expressions = self.tree.children_labeled(statement, NodeLabel::Expression);
        let is_indexed = self.tree.has_symbol_child(statement, "[");

        if is_indexed {
            let [index_expr, value_expr] = expressions[..] else {
                return Err(CodegenError::malformed(
                    "Indexed let statement needs two expressions",
                ));
            };
            let (segment, index) = self.resolve_var(&name)?;
            self.push(segment, index);
            self.compile_expression(index_expr)?;
            self.arith(ArithOp::Add);
            self.compile_expression(value_expr)?;
            self.pop(Segment::Temp, 0);
            self.pop(Segment::Pointer, 1);
            self.push(Segment::Temp, 0);
            self.pop(Segment::That, 0);
        } else {
            let [value_expr] = expressions[..] else {
                return Err(CodegenError::malformed(
                    "let statement needs one expression",
                ));
            };
            self.compile_expression(value_expr)?;
            let (segment, index) = self.resolve_var(&name)?;
            self.pop(segment, index);
        }
        Ok(())
    }

    /// `if (c) { S1 } else { S2 }` negates the condition and jumps.
    fn compile_if(&mut self, statement: NodeId) -> Result<(), CodegenError> {
        let condition = self
            .tree
            .first_child(statement, NodeLabel::Expression)
            .ok_or_else(|| CodegenError::malformed("if statement has no condition"))?;
        let branches = self.tree.children_labeled(statement, NodeLabel::Statements);

        self.compile_expression(condition)?;
        self.arith(ArithOp::Not);

        match branches[..] {
            [then_branch] => {
                let end_label = self.fresh_label();
                self.emit(VmCommand::IfGoto(end_label.clone()));
                self.compile_statements(then_branch)?;
                self.emit(VmCommand::Label(end_label));
            }
            [then_branch, else_branch] => {
                let else_label = self.fresh_label();
                let end_label = self.fresh_label();
                self.emit(VmCommand::IfGoto(else_label.clone()));
                self.compile_statements(then_branch)?;
                self.emit(VmCommand::Goto(end_label.clone()));
                self.emit(VmCommand::Label(else_label));
                self.compile_statements(else_branch)?;
                self.emit(VmCommand::Label(end_label));
            }
            _ => {
                return Err(CodegenError::malformed(
                    "if statement needs one or two branches",
                ));
            }
        }
        Ok(())
    }

    /// `while (c) { S }` re-tests the condition at the top of each pass.
    fn compile_while(&mut self, statement: NodeId) -> Result<(), CodegenError> {
        let condition = self
            .tree
            .first_child(statement, NodeLabel::Expression)
            .ok_or_else(|| CodegenError::malformed("while statement has no condition"))?;
        let body = self
            .tree
            .first_child(statement, NodeLabel::Statements)
            .ok_or_else(|| CodegenError::malformed("while statement has no body"))?;

        let top_label = self.fresh_label();
        let end_label = self.fresh_label();

        self.emit(VmCommand::Label(top_label.clone()));
        self.compile_expression(condition)?;
        self.arith(ArithOp::Not);
        self.emit(VmCommand::IfGoto(end_label.clone()));
        self.compile_statements(body)?;
        self.emit(VmCommand::Goto(top_label));
        self.emit(VmCommand::Label(end_label));
        Ok(())
    }

    /// `do call;` discards the returned value.
    fn compile_do(&mut self, statement: NodeId) -> Result<(), CodegenError> {
        self.compile_call(statement)?;
        self.pop(Segment::Temp, 0);
        Ok(())
    }

    /// `return expr?;` — a void return still pushes a value, because the
    /// caller always pops one.
    fn compile_return(&mut self, statement: NodeId) -> Result<(), CodegenError> {
        match self.tree.first_child(statement, NodeLabel::Expression) {
            Some(expression) => self.compile_expression(expression)?,
            None => self.push(Segment::Constant, 0),
        }
        self.emit(VmCommand::Return);
        Ok(())
    }
}
