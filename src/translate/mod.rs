//! Lowering of VM commands to symbolic Hack assembly.
//!
//! This module implements the stack machine on the Hack memory model.
//! The stack pointer lives at `SP` (RAM[0]); the segment base pointers
//! `LCL`, `ARG`, `THIS`, `THAT` at RAM[1..4]; `temp` is the fixed region
//! RAM[5..12]; `pointer 0/1` alias `THIS`/`THAT`; `static i` of file `F`
//! becomes the assembler symbol `F.i`.
//!
//! A [`Translator`] is fed commands file by file ([`Translator::set_file_name`]
//! scopes static symbols) and produces one assembly program. The output
//! always ends in a terminating loop; [`TranslateOptions::bootstrap`]
//! additionally prepends `SP=256; call Sys.init 0` for full programs.
//!
//! # Example
//!
//! ```
//! use jackc::translate::{TranslateOptions, Translator};
//! use jackc::vm;
//!
//! let commands = vm::parse_source("push constant 7\npush constant 8\nadd").unwrap();
//! let mut translator = Translator::new(TranslateOptions::default());
//! translator.set_file_name("Add");
//! translator.translate(&commands);
//! let assembly = translator.finish();
//! assert_eq!(assembly[0], "@7");
//! ```
//!
//! # Module Structure
//!
//! - `arithmetic` - The nine arithmetic-logical commands
//! - `memory` - push/pop for all eight segments
//! - `flow` - label/goto/if-goto with function-scoped names
//! - `function` - function entry, call frames, and return

mod arithmetic;
mod flow;
mod function;
mod memory;


use crate::vm::VmCommand;

/// Output configuration for the translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslateOptions {
    /// Prepend `SP=256; call Sys.init 0` before the translated commands.
    pub bootstrap: bool,
    /// Bracket each command's assembly with `// start of [...]` /
    /// `// end of [...]` comment lines.
    pub annotate: bool,
}

/// Translates VM commands into symbolic Hack assembly.
///
/// The translator is stateful across files: comparison and call-site
/// label counters never reset, so every generated label is unique within
/// the output program.
pub struct Translator {
    output: Vec<String>,
    /// Stem of the `.vm` file being translated; prefixes static symbols.
    file_name: String,
    /// Set by `function` commands; scopes `label`/`goto`/`if-goto`.
    current_function: Option<String>,
    /// Per-site counter for comparison branch labels.
    compare_count: usize,
    /// Per-site counter for call return labels.
    return_count: usize,
    annotate: bool,
}

impl Translator {
    /// Creates a translator, emitting the bootstrap preamble if requested.
    pub fn new(options: TranslateOptions) -> Self {
        let mut translator = Translator {
            output: Vec::new(),
            file_name: String::new(),
            current_function: None,
            compare_count: 0,
            return_count: 0,
            annotate: options.annotate,
        };
        if options.bootstrap {
            translator.write_bootstrap();
        }
        translator
    }

    /// Sets the stem of the `.vm` file whose commands follow.
    pub fn set_file_name(&mut self, name: &str) {
        self.file_name = name.to_string();
        log::debug!("translating {}", name);
    }

    /// Translates a batch of commands.
    ///
    /// # Panics
    /// Panics on a `pop` from the constant segment. The VM parser never
    /// produces one; constructing it directly is a caller bug.
    pub fn translate(&mut self, commands: &[VmCommand]) {
        for command in commands {
            self.write_command(command);
        }
    }

    /// Translates a single command.
    ///
    /// # Panics
    /// Panics on a `pop` from the constant segment, as for
    /// [`translate`](Self::translate).
    pub fn write_command(&mut self, command: &VmCommand) {
        if self.annotate {
            self.emit(format!("// start of [{}]", command));
        }

        match command {
            VmCommand::Push { segment, index } => self.write_push(*segment, *index),
            VmCommand::Pop { segment, index } => self.write_pop(*segment, *index),
            VmCommand::Arithmetic(op) => self.write_arithmetic(*op),
            VmCommand::Label(name) => self.write_label(name),
            VmCommand::Goto(name) => self.write_goto(name),
            VmCommand::IfGoto(name) => self.write_if_goto(name),
            VmCommand::Function { name, locals } => self.write_function(name, *locals),
            VmCommand::Call { name, args } => self.write_call(name, *args),
            VmCommand::Return => self.write_return(),
        }

        if self.annotate {
            self.emit(format!("// end of [{}]", command));
        }
    }

    /// Appends the terminating loop and returns the assembly lines.
    pub fn finish(mut self) -> Vec<String> {
        self.emit("(END)");
        self.emit("@END");
        self.emit("0;JMP");
        self.output
    }

    /// `SP = 256`, then call `Sys.init` with no arguments.
    fn write_bootstrap(&mut self) {
        self.emit("@256");
        self.emit("D=A");
        self.emit("@SP");
        self.emit("M=D");
        self.write_call("Sys.init", 0);
    }

    pub(super) fn emit(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    pub(super) fn emit_all(&mut self, lines: &[&str]) {
        for line in lines {
            self.emit(*line);
        }
    }
}
