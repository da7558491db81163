//! VM text parse error types.

/// The kind of VM parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmParseErrorKind {
    /// The first word of a line is not a VM opcode.
    UnknownCommand,
    /// A command has the wrong number of arguments.
    BadArity,
    /// A push/pop names no valid segment, or pops from `constant`.
    InvalidSegment,
    /// An index or count argument is not a number in range.
    InvalidIndex,
}

/// An error that occurred while parsing `.vm` text.
///
/// Carries the 1-indexed line number of the offending command.
#[derive(Debug)]
pub struct VmParseError {
    message: String,
    line: usize,
    kind: VmParseErrorKind,
}

impl VmParseError {
    /// Creates a new error with the given kind, message, and line.
    pub fn new(kind: VmParseErrorKind, message: impl Into<String>, line: usize) -> Self {
        VmParseError {
            message: message.into(),
            line,
            kind,
        }
    }

    /// Creates an "unknown command" error.
    pub fn unknown_command(opcode: &str, line: usize) -> Self {
        VmParseError::new(
            VmParseErrorKind::UnknownCommand,
            format!("Unknown VM command '{}'", opcode),
            line,
        )
    }

    /// Creates a "wrong number of arguments" error.
    pub fn bad_arity(opcode: &str, expected: usize, found: usize, line: usize) -> Self {
        VmParseError::new(
            VmParseErrorKind::BadArity,
            format!(
                "'{}' takes {} argument(s), found {}",
                opcode, expected, found
            ),
            line,
        )
    }

    /// Creates an "invalid segment" error.
    pub fn invalid_segment(segment: &str, line: usize) -> Self {
        VmParseError::new(
            VmParseErrorKind::InvalidSegment,
            format!("Invalid memory segment '{}'", segment),
            line,
        )
    }

    /// Creates a "pop constant" error.
    pub fn constant_pop(line: usize) -> Self {
        VmParseError::new(
            VmParseErrorKind::InvalidSegment,
            "The constant segment is push-only",
            line,
        )
    }

    /// Creates an "invalid index" error.
    pub fn invalid_index(text: &str, line: usize) -> Self {
        VmParseError::new(
            VmParseErrorKind::InvalidIndex,
            format!("Invalid index '{}'", text),
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
    pub fn kind(&self) -> VmParseErrorKind {
        self.kind
    }
}

impl std::fmt::Display for VmParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for VmParseError {}
