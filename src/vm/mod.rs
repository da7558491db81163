//! The stack virtual-machine command model.
//!
//! [`VmCommand`] is the shared currency between the middle of the
//! pipeline: the code generator produces commands, [`VmCommand`]'s
//! `Display` impl prints the canonical `.vm` text form, and
//! [`parse_source`] reads that text back for the translator.
//!
//! # Module Structure
//!
//! - [`command`] - Command, segment, and arithmetic-op types
//! - [`parser`] - Line-oriented `.vm` text parser
//! - [`error`] - Parse error type

mod command;
mod error;
mod parser;

pub use command::{ArithOp, Segment, VmCommand};
pub use error::{VmParseError, VmParseErrorKind};
pub use parser::parse_source;
