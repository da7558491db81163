//! Assembler error types.

/// The kind of assembler error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssembleErrorKind {
    /// A computation mnemonic is not in the comp table.
    UnknownComp,
    /// A destination mnemonic is not in the dest table.
    UnknownDest,
    /// A jump mnemonic is not in the jump table.
    UnknownJump,
    /// An A-instruction operand is numeric but outside `0..=32767`.
    AddressOutOfRange,
    /// A label was bound twice.
    DuplicateLabel,
}

/// An error that occurred during assembly.
///
/// Carries the 1-indexed source line of the offending command.
#[derive(Debug)]
pub struct AssembleError {
    message: String,
    line: usize,
    kind: AssembleErrorKind,
}

impl AssembleError {
    /// Creates a new error with the given kind, message, and line.
    pub fn new(kind: AssembleErrorKind, message: impl Into<String>, line: usize) -> Self {
        AssembleError {
            message: message.into(),
            line,
            kind,
        }
    }

    /// Creates an "unknown computation" error.
    pub fn unknown_comp(mnemonic: &str, line: usize) -> Self {
        AssembleError::new(
            AssembleErrorKind::UnknownComp,
            format!("Unknown computation '{}'", mnemonic),
            line,
        )
    }

    /// Creates an "unknown destination" error.
    pub fn unknown_dest(mnemonic: &str, line: usize) -> Self {
        AssembleError::new(
            AssembleErrorKind::UnknownDest,
            format!("Unknown destination '{}'", mnemonic),
            line,
        )
    }

    /// Creates an "unknown jump" error.
    pub fn unknown_jump(mnemonic: &str, line: usize) -> Self {
        AssembleError::new(
            AssembleErrorKind::UnknownJump,
            format!("Unknown jump '{}'", mnemonic),
            line,
        )
    }

    /// Creates an "address out of range" error.
    pub fn address_out_of_range(text: &str, line: usize) -> Self {
        AssembleError::new(
            AssembleErrorKind::AddressOutOfRange,
            format!("Address '{}' exceeds 32767", text),
            line,
        )
    }

    /// Creates a "duplicate label" error.
    pub fn duplicate_label(name: &str, line: usize) -> Self {
        AssembleError::new(
            AssembleErrorKind::DuplicateLabel,
            format!("Label '{}' is already defined", name),
            line,
        )
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the 1-indexed source line of the error.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> AssembleErrorKind {
        self.kind
    }
}

impl std::fmt::Display for AssembleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for AssembleError {}
