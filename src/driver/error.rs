//! Unified pipeline error types.
//!
//! [`ToolError`] collects the per-stage errors plus the I/O and target
//! failures the driver itself can hit; [`ToolErrorWithContext`] pairs an
//! error with the filename and source text needed for reporting.

use crate::assemble::AssembleError;
use crate::codegen::CodegenError;
use crate::lexer::LexError;
use crate::parser::ParseError;
use crate::vm::VmParseError;

/// A failure from any stage of the toolchain.
#[derive(Debug)]
pub enum ToolError {
    /// A lexical error in Jack source.
    Lex(LexError),
    /// A parse error in Jack source.
    Parse(ParseError),
    /// A code generation error.
    Codegen(CodegenError),
    /// A parse error in `.vm` text.
    VmParse(VmParseError),
    /// An assembly error.
    Assemble(AssembleError),
    /// A file could not be read or written.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The given path is not a usable input for the subcommand.
    InvalidTarget { path: String, reason: String },
}

impl ToolError {
    pub(super) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ToolError::Io {
            path: path.into(),
            source,
        }
    }

    pub(super) fn invalid_target(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolError::InvalidTarget {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::Lex(e) => write!(f, "{}", e),
            ToolError::Parse(e) => write!(f, "{}", e),
            ToolError::Codegen(e) => write!(f, "{}", e),
            ToolError::VmParse(e) => write!(f, "{}", e),
            ToolError::Assemble(e) => write!(f, "{}", e),
            ToolError::Io { path, source } => {
                write!(f, "Failed to access '{}': {}", path, source)
            }
            ToolError::InvalidTarget { path, reason } => {
                write!(f, "{}: {}", reason, path)
            }
        }
    }
}

impl std::error::Error for ToolError {}

/// A [`ToolError`] together with the file it occurred in.
///
/// `source_text` holds the file's contents when the error has a source
/// location to render; it is empty for I/O and target errors.
#[derive(Debug)]
pub struct ToolErrorWithContext {
    filename: String,
    source_text: String,
    error: ToolError,
}

impl ToolErrorWithContext {
    pub(super) fn new(
        filename: impl Into<String>,
        source_text: impl Into<String>,
        error: ToolError,
    ) -> Box<Self> {
        Box::new(ToolErrorWithContext {
            filename: filename.into(),
            source_text: source_text.into(),
            error,
        })
    }

    pub(super) fn without_source(filename: impl Into<String>, error: ToolError) -> Box<Self> {
        ToolErrorWithContext::new(filename, "", error)
    }

    /// Returns the file the error occurred in.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the file's source text, or an empty string.
    pub fn source(&self) -> &str {
        &self.source_text
    }

    /// Returns the underlying error.
    pub fn error(&self) -> &ToolError {
        &self.error
    }
}

impl std::fmt::Display for ToolErrorWithContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.filename, self.error)
    }
}
