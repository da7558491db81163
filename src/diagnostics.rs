//! Error rendering for the CLI.
//!
//! Errors carrying a source span (lex and parse errors) are rendered as
//! ariadne reports against the offending file; everything else falls
//! back to a plain line on stderr. If the report itself cannot be
//! printed, the plain line is emitted instead so the error never
//! disappears.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use jackc::driver::{ToolError, ToolErrorWithContext};
use jackc::token::Span;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn report_spanned(error: &ToolErrorWithContext, span: Span, message: &str) {
    let source_len = error.source().len();
    let range = if span.start < span.end {
        span.start..span.end.min(source_len)
    } else if span.start < source_len {
        span.start..span.start + 1
    } else if source_len > 0 {
        source_len - 1..source_len
    } else {
        0..0
    };
    if let Err(report_err) = print_range_report(error.filename(), error.source(), range, message) {
        eprintln!(
            "Error: {} (at {}:{}:{})",
            message,
            error.filename(),
            span.line,
            span.column
        );
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a pipeline error to stderr.
pub(crate) fn report_error(error: &ToolErrorWithContext) {
    match error.error() {
        ToolError::Lex(lex_error) => {
            report_spanned(error, lex_error.span(), lex_error.message());
        }
        ToolError::Parse(parse_error) => {
            report_spanned(error, parse_error.span(), parse_error.message());
        }
        ToolError::VmParse(vm_error) => {
            eprintln!(
                "Error in {}:{}: {}",
                error.filename(),
                vm_error.line(),
                vm_error.message()
            );
        }
        ToolError::Assemble(asm_error) => {
            eprintln!(
                "Error in {}:{}: {}",
                error.filename(),
                asm_error.line(),
                asm_error.message()
            );
        }
        ToolError::Codegen(codegen_error) => {
            eprintln!("Error in {}: {}", error.filename(), codegen_error.message());
        }
        ToolError::Io { .. } | ToolError::InvalidTarget { .. } => {
            eprintln!("Error: {}", error.error());
        }
    }
}
