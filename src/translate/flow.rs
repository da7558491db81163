//! label/goto/if-goto lowering.
//!
//! Labels are prefixed with the current function name (`Func$label`),
//! which gives VM labels function-local scope in the flat assembly
//! namespace. Outside any function the prefix is `null`, matching
//! single-file VM programs that branch before declaring one.

use super::Translator;

impl Translator {
    pub(super) fn write_label(&mut self, label: &str) {
        let scoped = self.scoped_label(label);
        self.emit(format!("({})", scoped));
    }

    pub(super) fn write_goto(&mut self, label: &str) {
        let scoped = self.scoped_label(label);
        self.emit(format!("@{}", scoped));
        self.emit("0;JMP");
    }

    /// Pops the stack top and jumps if it is non-zero.
    pub(super) fn write_if_goto(&mut self, label: &str) {
        let scoped = self.scoped_label(label);
        self.emit_all(&["@SP", "AM=M-1", "D=M"]);
        self.emit(format!("@{}", scoped));
        self.emit("D;JNE");
    }

    fn scoped_label(&self, label: &str) -> String {
        format!(
            "{}${}",
            self.current_function.as_deref().unwrap_or("null"),
            label
        )
    }
}
