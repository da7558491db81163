//! push/pop lowering for the eight memory segments.
//!
//! For `argument|local|this|that` the segment base is read from the
//! pointer word; for `pointer|temp` the base is the compile-time
//! constant 3 or 5; `static i` addresses the symbol `F.i` of the current
//! file; `constant` is push-only and loads its literal into D.
//!
//! Pops avoid a scratch word: the target address is folded into the
//! popped stack slot and recovered by subtraction.

use super::Translator;
use crate::vm::Segment;

/// Returns the pointer symbol holding a segment's base, if it has one.
fn base_symbol(segment: Segment) -> Option<&'static str> {
    match segment {
        Segment::Argument => Some("ARG"),
        Segment::Local => Some("LCL"),
        Segment::This => Some("THIS"),
        Segment::That => Some("THAT"),
        _ => None,
    }
}

/// Returns a segment's fixed base address, if it has one.
fn fixed_base(segment: Segment) -> Option<u16> {
    match segment {
        Segment::Pointer => Some(3),
        Segment::Temp => Some(5),
        _ => None,
    }
}

impl Translator {
    pub(super) fn write_push(&mut self, segment: Segment, index: u16) {
        if segment == Segment::Constant {
            self.emit(format!("@{}", index));
            self.emit("D=A");
            self.write_push_d();
            return;
        }

        if segment == Segment::Static {
            self.emit(format!("@{}.{}", self.file_name, index));
            self.emit("D=M");
            self.write_push_d();
            return;
        }

        // Compute the address into D, dereference, push the value.
        self.write_address_to_d(segment, index);
        self.emit_all(&["A=D", "D=M"]);
        self.write_push_d();
    }

    pub(super) fn write_pop(&mut self, segment: Segment, index: u16) {
        match segment {
            Segment::Static => {
                self.emit(format!("@{}.{}", self.file_name, index));
                self.emit("D=A");
            }
            Segment::Constant => {
                unreachable!("pop constant is invalid; the VM parser rejects it")
            }
            _ => self.write_address_to_d(segment, index),
        }

        // With the target address in D: fold it into the popped slot,
        // recover value and address by subtraction, store.
        self.emit_all(&[
            "@SP", "AM=M-1", "M=D+M", "D=M-D", "A=M-D", "M=D",
        ]);
    }

    /// Loads `base + index` into D.
    fn write_address_to_d(&mut self, segment: Segment, index: u16) {
        if let Some(symbol) = base_symbol(segment) {
            self.emit(format!("@{}", symbol));
            self.emit("D=M");
        } else if let Some(base) = fixed_base(segment) {
            self.emit(format!("@{}", base));
            self.emit("D=A");
        }
        self.emit(format!("@{}", index));
        self.emit("D=A+D");
    }

    /// Pushes D onto the stack.
    pub(super) fn write_push_d(&mut self) {
        self.emit_all(&["@SP", "A=M", "M=D", "@SP", "M=M+1"]);
    }
}
