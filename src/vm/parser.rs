//! Line-oriented parser for `.vm` text.
//!
//! One command per line, tokens space-separated. Blank lines and `//`
//! comments are ignored; a comment may follow a command on the same line
//! and is stripped before parsing.

use super::command::{ArithOp, Segment, VmCommand};
use super::error::VmParseError;

/// Parses a complete `.vm` source into commands.
///
/// # Errors
///
/// Returns a [`VmParseError`] naming the first offending line if any
/// command is unknown or malformed.
pub fn parse_source(source: &str) -> Result<Vec<VmCommand>, VmParseError> {
    let mut commands = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line = strip_comment(raw_line);
        if line.is_empty() {
            continue;
        }
        commands.push(parse_command(line, index + 1)?);
    }

    Ok(commands)
}

/// Removes a trailing `//` comment and surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    let code = match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    };
    code.trim()
}

/// Parses one non-empty, comment-free command line.
fn parse_command(line: &str, line_number: usize) -> Result<VmCommand, VmParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let opcode = words[0];
    let args = &words[1..];

    match opcode {
        "push" | "pop" => parse_push_pop(opcode, args, line_number),
        "label" | "goto" | "if-goto" => {
            let name = expect_args::<1>(opcode, args, line_number)?[0].to_string();
            Ok(match opcode {
                "label" => VmCommand::Label(name),
                "goto" => VmCommand::Goto(name),
                _ => VmCommand::IfGoto(name),
            })
        }
        "function" | "call" => {
            let args = expect_args::<2>(opcode, args, line_number)?;
            let name = args[0].to_string();
            let count = parse_index(args[1], line_number)?;
            Ok(if opcode == "function" {
                VmCommand::Function {
                    name,
                    locals: count,
                }
            } else {
                VmCommand::Call { name, args: count }
            })
        }
        "return" => {
            expect_args::<0>(opcode, args, line_number)?;
            Ok(VmCommand::Return)
        }
        _ => match ArithOp::from_str(opcode) {
            Some(op) => {
                expect_args::<0>(opcode, args, line_number)?;
                Ok(VmCommand::Arithmetic(op))
            }
            None => Err(VmParseError::unknown_command(opcode, line_number)),
        },
    }
}

fn parse_push_pop(
    opcode: &str,
    args: &[&str],
    line_number: usize,
) -> Result<VmCommand, VmParseError> {
    let args = expect_args::<2>(opcode, args, line_number)?;
    let segment = Segment::from_str(args[0])
        .ok_or_else(|| VmParseError::invalid_segment(args[0], line_number))?;
    let index = parse_index(args[1], line_number)?;

    if opcode == "push" {
        Ok(VmCommand::Push { segment, index })
    } else {
        if segment == Segment::Constant {
            return Err(VmParseError::constant_pop(line_number));
        }
        Ok(VmCommand::Pop { segment, index })
    }
}

fn expect_args<'a, const N: usize>(
    opcode: &str,
    args: &[&'a str],
    line_number: usize,
) -> Result<[&'a str; N], VmParseError> {
    <[&str; N]>::try_from(args)
        .map_err(|_| VmParseError::bad_arity(opcode, N, args.len(), line_number))
}

fn parse_index(text: &str, line_number: usize) -> Result<u16, VmParseError> {
    text.parse()
        .map_err(|_| VmParseError::invalid_index(text, line_number))
}
