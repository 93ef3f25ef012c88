// mjc - A MiniJava compiler emitting textual LLVM IR
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! mjc Compiler CLI
//!
//! Compiles MiniJava files to textual LLVM IR, one module per file.

use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use mjc::error::render_report;
use mjc::output::{ll_file_name, write_ll};
use mjc::Compiled;

/// mjc - A MiniJava compiler emitting textual LLVM IR
#[derive(Parser, Debug)]
#[command(name = "mjc")]
#[command(author = "Marcel Joachim Kloubert")]
#[command(version)]
#[command(about = "A MiniJava compiler emitting textual LLVM IR")]
#[command(long_about = r#"
mjc compiles MiniJava source files into textual LLVM IR modules.

Every file is compiled on its own. A file that fails does not stop the
files after it; its error is reported and it is marked as failed.

Example usage:
  mjc Factorial.java
  mjc Factorial.java BinaryTree.java -o build
  mjc Factorial.java --stdout | lli
  mjc Shapes.java --offsets

Set MJC_LOG (e.g. MJC_LOG=debug) to trace the compiler phases.
"#)]
struct Cli {
    /// Source files to compile (.java)
    #[arg(required = true)]
    source_files: Vec<PathBuf>,

    /// Directory the .ll files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the modules to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Print the field and method offsets of every class
    #[arg(long)]
    offsets: bool,
}

fn main() -> ExitCode {
    // Initialize tracing if MJC_LOG is set
    if let Ok(filter) = EnvFilter::try_from_env("MJC_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .without_time()
            .compact()
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing initialized");
    }

    let cli = Cli::parse();

    if cli.verbose {
        println!("{} v{}", mjc::NAME, mjc::VERSION);
        if !cli.stdout {
            println!("Output directory: {}", cli.out_dir.display());
        }
    }

    let mut failed = 0;
    for path in &cli.source_files {
        match compile_file(&cli, path) {
            Some(offsets) => {
                println!("File {} : Pass", path.display());
                if cli.offsets {
                    print!("{}", offsets);
                }
            }
            None => {
                failed += 1;
                println!("File {} : Fail", path.display());
            }
        }
    }

    if cli.verbose {
        println!(
            "{} of {} files compiled",
            cli.source_files.len() - failed,
            cli.source_files.len()
        );
    }

    ExitCode::SUCCESS
}

/// Compile one file with a fresh context.
///
/// Returns the offset report of a passing file, `None` if it failed.
#[tracing::instrument(skip(cli), fields(file = %path.display()))]
fn compile_file(cli: &Cli, path: &Path) -> Option<String> {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    if cli.verbose {
        println!("Compiling {}...", path.display());
    }

    let Compiled { module, offsets } = match mjc::compile_with_offsets(&source) {
        Ok(compiled) => compiled,
        Err(e) => {
            tracing::debug!(code = e.code_str(), "compilation failed");
            let filename = path.display().to_string();
            let color = std::io::stderr().is_terminal();
            eprint!("{}", render_report(&e, &source, &filename, color));
            return None;
        }
    };

    if cli.stdout {
        print!("{}", module);
        return Some(offsets);
    }

    let output_path = cli.out_dir.join(ll_file_name(path));
    if let Err(e) = write_ll(&module, &output_path) {
        eprintln!("Error: Cannot write {}: {}", output_path.display(), e);
        return None;
    }

    if cli.verbose {
        println!("Wrote {}", output_path.display());
    }
    Some(offsets)
}
