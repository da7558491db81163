//! Two-pass assembler for symbolic Hack assembly.
//!
//! Pass 1 walks the commands and binds every `(NAME)` label to the ROM
//! address of the instruction that follows it; label pseudo-commands
//! occupy no ROM. Pass 2 encodes each instruction into a 16-bit word,
//! resolving `@symbol` operands against the predefined symbols and the
//! pass-1 labels, and allocating RAM addresses from 16 for symbols seen
//! for the first time.
//!
//! Output words are returned as 16-character `0`/`1` strings:
//! A-instructions as `0` + 15-bit big-endian operand, C-instructions as
//! `111` + comp(7) + dest(3) + jump(3).
//!
//! # Example
//!
//! ```
//! use jackc::assemble;
//!
//! let words = assemble::assemble("@2\nD=A\n@3\nD=D+A\n@0\nM=D").unwrap();
//! assert_eq!(words[0], "0000000000000010");
//! assert_eq!(words[1], "1110110000010000");
//! ```
//!
//! # Module Structure
//!
//! - [`parser`] - Line classification (A / C / label)
//! - [`code`] - dest/comp/jump bit tables
//! - [`symbols`] - Predefined symbols, labels, variable allocation
//! - [`error`] - Assembler error type

pub mod code;
pub mod parser;
pub mod symbols;

mod error;


pub use error::{AssembleError, AssembleErrorKind};

use parser::{parse_line, strip_line, AsmCommand};
use symbols::SymbolTable;

/// The largest operand an A-instruction can carry.
const MAX_ADDRESS: u32 = 32767;

/// Assembles a symbolic Hack program into binary words.
///
/// # Errors
///
/// Returns an [`AssembleError`] naming the first offending line if a
/// mnemonic is unknown, a numeric address is out of range, or a label is
/// bound twice.
pub fn assemble(source: &str) -> Result<Vec<String>, AssembleError> {
    // Keep 1-indexed source lines for error reporting.
    let commands: Vec<(usize, AsmCommand)> = source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| strip_line(line).map(|code| (index + 1, parse_line(code))))
        .collect();

    let mut symbols = SymbolTable::new();

    // Pass 1: bind labels to ROM addresses.
    let mut rom_address: u16 = 0;
    for (line, command) in &commands {
        match command {
            AsmCommand::Label(name) => {
                if symbols.contains(name) {
                    return Err(AssembleError::duplicate_label(name, *line));
                }
                symbols.bind_label(name, rom_address);
            }
            _ => rom_address += 1,
        }
    }

    // Pass 2: encode.
    let mut words = Vec::new();
    for (line, command) in &commands {
        match command {
            AsmCommand::Label(_) => {}
            AsmCommand::Address(operand) => {
                words.push(encode_address(operand, &mut symbols, *line)?);
            }
            AsmCommand::Compute { dest, comp, jump } => {
                words.push(encode_compute(dest, comp, jump, *line)?);
            }
        }
    }

    Ok(words)
}

fn encode_address(
    operand: &str,
    symbols: &mut SymbolTable,
    line: usize,
) -> Result<String, AssembleError> {
    let value = if operand.chars().all(|c| c.is_ascii_digit()) {
        let numeric: u32 = operand
            .parse()
            .map_err(|_| AssembleError::address_out_of_range(operand, line))?;
        if numeric > MAX_ADDRESS {
            return Err(AssembleError::address_out_of_range(operand, line));
        }
        numeric as u16
    } else {
        symbols.resolve_or_allocate(operand)
    };

    Ok(format!("{:016b}", value))
}

fn encode_compute(
    dest: &str,
    comp: &str,
    jump: &str,
    line: usize,
) -> Result<String, AssembleError> {
    let comp_bits =
        code::comp_bits(comp).ok_or_else(|| AssembleError::unknown_comp(comp, line))?;
    let dest_bits =
        code::dest_bits(dest).ok_or_else(|| AssembleError::unknown_dest(dest, line))?;
    let jump_bits =
        code::jump_bits(jump).ok_or_else(|| AssembleError::unknown_jump(jump, line))?;

    Ok(format!(
        "111{:07b}{:03b}{:03b}",
        comp_bits, dest_bits, jump_bits
    ))
}
