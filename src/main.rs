//! The `jackc` toolchain CLI.
//!
//! This binary exposes the three pipeline stages as subcommands
//! (`compile`, `translate`, `assemble`) plus `build`, which runs the
//! whole `.jack` → `.hack` pipeline. Error reporting is delegated to the
//! diagnostics module.

use std::path::Path;

use clap::{Parser, Subcommand};

use jackc::driver;
use jackc::translate::TranslateOptions;

mod diagnostics;

/// Command-line interface for the jackc toolchain.
#[derive(Parser)]
#[command(name = "jackc")]
#[command(about = "A Jack-to-Hack compiler toolchain", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Compile .jack source into stack VM code (.vm, one per input).
    Compile {
        /// A .jack file or a directory of .jack files.
        path: String,
    },
    /// Translate VM code into symbolic Hack assembly (.asm).
    Translate {
        /// A .vm file or a directory of .vm files.
        path: String,

        /// Prepend the SP=256 / Sys.init bootstrap.
        #[arg(long)]
        bootstrap: bool,

        /// Mark each VM command's assembly with comment lines.
        #[arg(long)]
        annotate: bool,
    },
    /// Assemble symbolic Hack assembly into binary words (.hack).
    Assemble {
        /// An .asm file.
        path: String,
    },
    /// Run the whole pipeline: .jack through .vm and .asm to .hack.
    Build {
        /// A .jack file or a directory of .jack files.
        path: String,

        /// Prepend the SP=256 / Sys.init bootstrap.
        #[arg(long)]
        bootstrap: bool,

        /// Mark each VM command's assembly with comment lines.
        #[arg(long)]
        annotate: bool,
    },
}

/// Entry point for the jackc toolchain.
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile { path } => driver::compile(Path::new(&path)).map(|outputs| {
            for output in outputs {
                println!("Compiled: {}", output.display());
            }
        }),
        Commands::Translate {
            path,
            bootstrap,
            annotate,
        } => driver::translate(Path::new(&path), TranslateOptions { bootstrap, annotate })
            .map(|output| println!("Translated: {}", output.display())),
        Commands::Assemble { path } => driver::assemble(Path::new(&path))
            .map(|output| println!("Assembled: {}", output.display())),
        Commands::Build {
            path,
            bootstrap,
            annotate,
        } => driver::build(Path::new(&path), TranslateOptions { bootstrap, annotate })
            .map(|output| println!("Built: {}", output.display())),
    };

    if let Err(error) = result {
        diagnostics::report_error(&error);
        std::process::exit(1);
    }
}
