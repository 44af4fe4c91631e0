//! CSX CLI - inspect serialized CSX syntax trees

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use csx_ast::{interchange, NodeStats, Program, UnparseConfig, Unparser, Validator};

#[derive(Parser)]
#[command(name = "csx")]
#[command(version = csx_ast::VERSION)]
#[command(about = "Inspect CSX syntax trees stored as JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a tree as CSX source
    Print {
        /// Path to the JSON tree
        file: PathBuf,

        /// Spaces per indentation level
        #[arg(long, default_value_t = 4)]
        indent: usize,

        /// Omit the final newline
        #[arg(long)]
        no_trailing_newline: bool,
    },

    /// Show how many nodes of each tag a tree holds
    Stats {
        /// Path to the JSON tree
        file: PathBuf,
    },

    /// Report structural problems in a tree
    Check {
        /// Path to the JSON tree
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            file,
            indent,
            no_trailing_newline,
        } => {
            let program = load(&file)?;
            let config = UnparseConfig {
                indent_width: indent,
                trailing_newline: !no_trailing_newline,
            };
            print!("{}", Unparser::unparse_program_with(&program, config));
        }

        Commands::Stats { file } => {
            let program = load(&file)?;
            println!("{}", NodeStats::collect(&program));
        }

        Commands::Check { file } => {
            let program = load(&file)?;
            let violations = Validator::check(&program);
            if !violations.is_empty() {
                for violation in &violations {
                    eprintln!("{}: {violation}", file.display());
                }
                bail!("{} violation(s) found", violations.len());
            }
            println!("{}: ok", file.display());
        }
    }

    Ok(())
}

/// Read a program from a JSON file
fn load(path: &Path) -> Result<Program> {
    let file =
        File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    interchange::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read tree from '{}'", path.display()))
}
