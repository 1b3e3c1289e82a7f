//! Command-line argument definitions and parsing
//!
//! Every command takes the target file as its LAST positional argument, after
//! any keys or `key=value` pairs, so positionals are collected together and
//! split afterwards.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "frontmatter",
    version,
    about = "Read and edit YAML front matter in text documents",
    long_about = "frontmatter reads, sets and deletes values in the YAML front matter block \
                  at the top of a document, addressed by dotted key paths. The rest of the \
                  document is left exactly as it was.",
    after_help = "Examples:\n  \
                  frontmatter set message=\"Hello World\" file.md\n  \
                  frontmatter set object.field=5 file.md\n  \
                  frontmatter set a=1 b=value file.md\n  \
                  frontmatter get message file.md\n  \
                  frontmatter get file.md\n  \
                  frontmatter delete file.md"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print what would be written instead of touching the file
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the whole front matter, or the value of one key
    Get(GetArgs),
    /// Set one or more key=value pairs
    Set(SetArgs),
    /// Delete keys, or the whole front matter block when no key is given
    Delete(DeleteArgs),
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Optional dotted key, followed by the file
    #[arg(value_name = "[KEY] FILE", num_args = 1..=2, required = true)]
    pub args: Vec<String>,
}

/// Arguments for the set command
#[derive(Args, Debug)]
pub struct SetArgs {
    /// One or more key=value pairs, followed by the file
    #[arg(value_name = "KEY=VALUE... FILE", num_args = 2.., required = true)]
    pub args: Vec<String>,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Zero or more dotted keys, followed by the file
    #[arg(value_name = "[KEY...] FILE", num_args = 1.., required = true)]
    pub args: Vec<String>,
}

/// Split positionals into leading arguments and the trailing file path
pub fn split_file(args: &[String]) -> Option<(&[String], PathBuf)> {
    args.split_last()
        .map(|(file, rest)| (rest, PathBuf::from(file)))
}
