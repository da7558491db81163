//! File orchestration for the three pipeline stages.
//!
//! Each function takes one file-or-directory path and runs a stage over
//! it, writing outputs next to the inputs:
//!
//! - [`compile`]: every `.jack` file becomes a sibling `.vm` file;
//! - [`translate`]: a `.vm` file becomes a sibling `.asm` file, a
//!   directory of `.vm` files becomes one `<dir>/<dirname>.asm`;
//! - [`assemble`]: an `.asm` file becomes a sibling `.hack` file;
//! - [`build`]: the whole pipeline, `.jack` through `.hack`.
//!
//! Batches are strictly sequential in sorted directory order; the first
//! error aborts the batch and nothing else is written. Every resource is
//! scoped to the file being processed; no state flows between files
//! except the translator's label counters, which keep generated labels
//! unique across one combined `.asm` output.

mod error;

pub use error::{ToolError, ToolErrorWithContext};

use std::path::{Path, PathBuf};

use crate::codegen;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::translate::{TranslateOptions, Translator};
use crate::vm;
use crate::{assemble as assembler, tree::ParseTree};

/// Compiles `.jack` sources to `.vm` files; returns the written paths.
///
/// # Errors
///
/// Returns the first lex, parse, codegen, or I/O error, wrapped with the
/// offending file's context.
pub fn compile(path: &Path) -> Result<Vec<PathBuf>, Box<ToolErrorWithContext>> {
    let targets = find_targets(path, "jack")?;
    let mut outputs = Vec::new();

    for target in targets {
        outputs.push(compile_file(&target)?);
    }
    Ok(outputs)
}

/// Translates `.vm` input(s) into one `.asm` file; returns its path.
///
/// A directory input combines every `.vm` file it holds, in sorted
/// order, into `<dir>/<dirname>.asm`.
///
/// # Errors
///
/// Returns the first VM parse or I/O error, wrapped with the offending
/// file's context.
pub fn translate(
    path: &Path,
    options: TranslateOptions,
) -> Result<PathBuf, Box<ToolErrorWithContext>> {
    let targets = find_targets(path, "vm")?;
    let output_path = if path.is_dir() {
        let dir_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "out".to_string());
        path.join(format!("{}.asm", dir_name))
    } else {
        path.with_extension("asm")
    };

    let mut translator = Translator::new(options);
    for target in targets {
        let source = read_file(&target)?;
        let commands = vm::parse_source(&source).map_err(|e| {
            ToolErrorWithContext::new(target.display().to_string(), source.clone(), ToolError::VmParse(e))
        })?;
        translator.set_file_name(&file_stem(&target));
        translator.translate(&commands);
    }

    write_lines(&output_path, &translator.finish())?;
    log::debug!("wrote {}", output_path.display());
    Ok(output_path)
}

/// Assembles an `.asm` file into a sibling `.hack` file; returns its path.
///
/// # Errors
///
/// Returns the first assembly or I/O error, wrapped with the file's
/// context.
pub fn assemble(path: &Path) -> Result<PathBuf, Box<ToolErrorWithContext>> {
    if !path.is_file() || path.extension().is_none_or(|e| e != "asm") {
        return Err(ToolErrorWithContext::without_source(
            path.display().to_string(),
            ToolError::invalid_target(path.display().to_string(), "Expected an .asm file"),
        ));
    }

    let source = read_file(path)?;
    let words = assembler::assemble(&source).map_err(|e| {
        ToolErrorWithContext::new(path.display().to_string(), source.clone(), ToolError::Assemble(e))
    })?;

    let output_path = path.with_extension("hack");
    write_lines(&output_path, &words)?;
    log::debug!("wrote {}", output_path.display());
    Ok(output_path)
}

/// Runs the whole pipeline: compile, translate, assemble.
///
/// Returns the path of the final `.hack` file.
pub fn build(
    path: &Path,
    options: TranslateOptions,
) -> Result<PathBuf, Box<ToolErrorWithContext>> {
    let vm_outputs = compile(path)?;

    let asm_path = if path.is_dir() {
        translate(path, options)?
    } else {
        // Single-file build: translate just the .vm we produced.
        match vm_outputs.first() {
            Some(vm_path) => translate(vm_path, options)?,
            None => {
                let display = path.display().to_string();
                return Err(ToolErrorWithContext::without_source(
                    display.clone(),
                    ToolError::invalid_target(display, "Nothing to translate"),
                ));
            }
        }
    };

    assemble(&asm_path)
}

/// Compiles one `.jack` file to a sibling `.vm` file.
fn compile_file(path: &Path) -> Result<PathBuf, Box<ToolErrorWithContext>> {
    let filename = path.display().to_string();
    let source = read_file(path)?;
    log::debug!("compiling {}", filename);

    let with_context = |error: ToolError| -> Box<ToolErrorWithContext> {
        ToolErrorWithContext::new(filename.clone(), source.clone(), error)
    };

    let tree = parse_source(&source).map_err(&with_context)?;
    let commands = codegen::generate(&tree).map_err(|e| with_context(ToolError::Codegen(e)))?;

    let lines: Vec<String> = commands.iter().map(|c| c.to_string()).collect();
    let output_path = path.with_extension("vm");
    write_lines(&output_path, &lines)?;
    log::debug!("wrote {}", output_path.display());
    Ok(output_path)
}

/// Lexes and parses Jack source into a tree.
fn parse_source(source: &str) -> Result<ParseTree, ToolError> {
    let tokens = Lexer::new(source).tokenize().map_err(ToolError::Lex)?;
    Parser::new(tokens).parse().map_err(ToolError::Parse)
}

/// Resolves a path into the files a stage should process.
///
/// A file must carry the expected extension; a directory yields its
/// matching files in sorted order. An empty directory is an error.
fn find_targets(path: &Path, extension: &str) -> Result<Vec<PathBuf>, Box<ToolErrorWithContext>> {
    let display = path.display().to_string();
    let invalid = |reason: String| {
        ToolErrorWithContext::without_source(
            display.clone(),
            ToolError::invalid_target(display.clone(), reason),
        )
    };

    if path.is_file() {
        if path.extension().is_none_or(|e| e != extension) {
            return Err(invalid(format!("Expected a .{} file", extension)));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        let entries = std::fs::read_dir(path).map_err(|e| {
            ToolErrorWithContext::without_source(display.clone(), ToolError::io(display.clone(), e))
        })?;
        let mut targets: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == extension))
            .collect();
        targets.sort();

        if targets.is_empty() {
            return Err(invalid(format!("No .{} files found in directory", extension)));
        }
        return Ok(targets);
    }

    Err(invalid("No such file or directory".to_string()))
}

fn read_file(path: &Path) -> Result<String, Box<ToolErrorWithContext>> {
    let display = path.display().to_string();
    std::fs::read_to_string(path).map_err(|e| {
        ToolErrorWithContext::without_source(display.clone(), ToolError::io(display.clone(), e))
    })
}

fn write_lines(path: &Path, lines: &[String]) -> Result<(), Box<ToolErrorWithContext>> {
    let display = path.display().to_string();
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(path, contents).map_err(|e| {
        ToolErrorWithContext::without_source(display.clone(), ToolError::io(display.clone(), e))
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
