//! Function entry, call frames, and return.
//!
//! A call pushes a 5-word frame (return address, LCL, ARG, THIS, THAT),
//! repoints ARG below the pushed arguments, and jumps; return unwinds
//! through the `FRAME`/`RET` scratch words, leaving the return value
//! where the callee's first argument was.

use super::Translator;

impl Translator {
    /// `function F n`: bind the entry label, then zero-fill n locals
    /// with a counted loop.
    pub(super) fn write_function(&mut self, name: &str, locals: u16) {
        self.current_function = Some(name.to_string());

        self.emit(format!("({})", name));
        self.emit(format!("@{}", locals));
        self.emit("D=A");
        self.emit(format!("({}_INIT_LOCALS)", name));
        self.emit(format!("@{}_LOCALS_DONE", name));
        self.emit("D;JEQ");
        self.emit_all(&["@SP", "A=M", "M=0", "@SP", "M=M+1", "D=D-1"]);
        self.emit(format!("@{}_INIT_LOCALS", name));
        self.emit("0;JMP");
        self.emit(format!("({}_LOCALS_DONE)", name));
    }

    /// `call F n`: push the frame, set `ARG = SP - n - 5` and
    /// `LCL = SP`, jump, and bind a per-call-site return label.
    pub(super) fn write_call(&mut self, name: &str, args: u16) {
        let return_label = format!("{}$ret.{}", name, self.return_count);
        self.return_count += 1;

        self.emit(format!("@{}", return_label));
        self.emit("D=A");
        self.write_push_d();
        for saved in ["LCL", "ARG", "THIS", "THAT"] {
            self.emit(format!("@{}", saved));
            self.emit("D=M");
            self.write_push_d();
        }
        // ARG = SP - args - 5
        self.emit_all(&["@SP", "D=M"]);
        self.emit(format!("@{}", args));
        self.emit("D=D-A");
        self.emit_all(&["@5", "D=D-A", "@ARG", "M=D"]);
        // LCL = SP
        self.emit_all(&["@SP", "D=M", "@LCL", "M=D"]);
        self.emit(format!("@{}", name));
        self.emit("0;JMP");
        self.emit(format!("({})", return_label));
    }

    /// `return`: stash the frame base, recover the return address, move
    /// the return value to `*ARG`, rewind SP, restore the four saved
    /// pointers, jump.
    ///
    /// `RET` must be read before the pointer restores: a zero-argument
    /// callee's return address lives in the slot `*ARG` overwrites.
    pub(super) fn write_return(&mut self) {
        // FRAME = LCL
        self.emit_all(&["@LCL", "D=M", "@FRAME", "M=D"]);
        // RET = *(FRAME - 5)
        self.emit_all(&["@5", "D=D-A", "A=D", "D=M", "@RET", "M=D"]);
        // *ARG = pop()
        self.emit_all(&["@SP", "AM=M-1", "D=M", "@ARG", "A=M", "M=D"]);
        // SP = ARG + 1
        self.emit_all(&["@ARG", "D=M", "@SP", "M=D+1"]);
        // THAT = *(FRAME-1), THIS = *(FRAME-2), ARG = *(FRAME-3),
        // LCL = *(FRAME-4)
        for (offset, pointer) in [(1, "THAT"), (2, "THIS"), (3, "ARG"), (4, "LCL")] {
            self.emit_all(&["@FRAME", "D=M"]);
            self.emit(format!("@{}", offset));
            self.emit("D=D-A");
            self.emit_all(&["A=D", "D=M"]);
            self.emit(format!("@{}", pointer));
            self.emit("M=D");
        }
        // goto RET
        self.emit_all(&["@RET", "A=M", "0;JMP"]);
    }
}
