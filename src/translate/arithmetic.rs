//! The nine arithmetic-logical commands.
//!
//! Two-operand commands pop the right operand into D and operate on the
//! left operand in place at the new stack top. Comparisons branch to a
//! per-site `PUSHTRUE`/`PUSHFALSE` pair writing `-1`/`0`; the site
//! counter never resets, keeping every label unique.

use super::Translator;
use crate::vm::ArithOp;

impl Translator {
    pub(super) fn write_arithmetic(&mut self, op: ArithOp) {
        match op {
            ArithOp::Add => self.write_binary("M=D+M"),
            ArithOp::Sub => self.write_binary("M=M-D"),
            ArithOp::And => self.write_binary("M=D&M"),
            ArithOp::Or => self.write_binary("M=D|M"),
            ArithOp::Neg => self.write_unary("M=-M"),
            ArithOp::Not => self.write_unary("M=!M"),
            ArithOp::Eq => self.write_comparison("JEQ", "JNE"),
            ArithOp::Gt => self.write_comparison("JGT", "JLE"),
            ArithOp::Lt => self.write_comparison("JLT", "JGE"),
        }
    }

    /// Pops into D, then applies `operation` to M = RAM[SP-1].
    fn write_binary(&mut self, operation: &str) {
        self.emit_all(&["@SP", "AM=M-1", "D=M", "@SP", "A=M-1"]);
        self.emit(operation);
    }

    /// Applies `operation` to the stack top in place.
    fn write_unary(&mut self, operation: &str) {
        self.emit_all(&["@SP", "A=M-1"]);
        self.emit(operation);
    }

    /// Computes M-D and branches on it with the given jump pair.
    fn write_comparison(&mut self, true_jump: &str, false_jump: &str) {
        let site = self.compare_count;
        self.compare_count += 1;

        self.emit_all(&["@SP", "AM=M-1", "D=M", "@SP", "AM=M-1", "D=M-D"]);
        self.emit(format!("@PUSHTRUE_{}", site));
        self.emit(format!("D;{}", true_jump));
        self.emit(format!("@PUSHFALSE_{}", site));
        self.emit(format!("D;{}", false_jump));
        self.emit(format!("(PUSHTRUE_{})", site));
        self.emit_all(&["@SP", "A=M", "M=-1"]);
        self.emit(format!("@END_{}", site));
        self.emit("0;JMP");
        self.emit(format!("(PUSHFALSE_{})", site));
        self.emit_all(&["@SP", "A=M", "M=0"]);
        self.emit(format!("@END_{}", site));
        self.emit("0;JMP");
        self.emit(format!("(END_{})", site));
        self.emit_all(&["@SP", "M=M+1"]);
    }
}
