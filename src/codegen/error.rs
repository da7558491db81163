//! Code generation error types.

/// The kind of code generation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenErrorKind {
    /// An identifier was used that no scope defines.
    UndefinedSymbol,
    /// A subroutine declaration's leading keyword is not
    /// `constructor`, `function`, or `method`.
    UnknownSubroutineKind,
    /// The parse tree does not have the shape its production promises.
    MalformedTree,
}

/// An error that occurred during VM code generation.
///
/// Code generation runs on trees the parser built, so these errors
/// indicate either a semantically invalid program (an undefined symbol)
/// or a compiler bug (a malformed tree). All are fatal; there is no
/// recovery and no partial output.
#[derive(Debug)]
pub struct CodegenError {
    message: String,
    kind: CodegenErrorKind,
}

impl CodegenError {
    /// Creates a new error with the given kind and message.
    pub fn new(kind: CodegenErrorKind, message: impl Into<String>) -> Self {
        CodegenError {
            message: message.into(),
            kind,
        }
    }

    /// Creates an "undefined symbol" error.
    pub fn undefined_symbol(name: &str) -> Self {
        CodegenError::new(
            CodegenErrorKind::UndefinedSymbol,
            format!("Undefined symbol '{}'", name),
        )
    }

    /// Creates an "unknown subroutine kind" error.
    pub fn unknown_subroutine_kind(keyword: &str) -> Self {
        CodegenError::new(
            CodegenErrorKind::UnknownSubroutineKind,
            format!("Unknown subroutine kind '{}'", keyword),
        )
    }

    /// Creates a "malformed parse tree" error.
    pub fn malformed(detail: impl Into<String>) -> Self {
        CodegenError::new(CodegenErrorKind::MalformedTree, detail.into())
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> CodegenErrorKind {
        self.kind
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodegenError {}
