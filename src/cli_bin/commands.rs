//! CLI command handlers that bridge CLI arguments to library operations
//!
//! Handlers validate every positional argument before touching the file, so a
//! malformed `key=value` pair never leaves a half-edited document behind.

use crate::cli_bin::args::*;
use anyhow::{anyhow, Context, Result};
use frontmatter::ops;
use frontmatter::{Assignment, FrontMatterWriter, KeyPath, Outcome, WriteOptions};
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<Outcome> {
    let options = WriteOptions {
        dry_run: cli.dry_run,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match cli.command {
        Commands::Get(args) => get_command(args, &mut out)?,
        Commands::Set(args) => set_command(args, &options, &mut out)?,
        Commands::Delete(args) => delete_command(args, &options, &mut out)?,
    };
    out.flush()?;
    Ok(outcome)
}

/// Execute the get command
pub fn get_command<W: Write>(args: GetArgs, out: &mut W) -> Result<Outcome> {
    debug!("Executing get command with args: {:?}", args);

    let (keys, file) = target(&args.args)?;
    let key = keys.first().map(|k| KeyPath::parse(k));
    ops::get(&file, key.as_ref(), out).with_context(|| context("read", &file))
}

/// Execute the set command
pub fn set_command<W: Write>(
    args: SetArgs,
    options: &WriteOptions,
    out: &mut W,
) -> Result<Outcome> {
    debug!("Executing set command with args: {:?}", args);

    let (pairs, file) = target(&args.args)?;
    let assignments = pairs
        .iter()
        .map(|pair| Assignment::parse(pair))
        .collect::<frontmatter::Result<Vec<_>>>()?;

    let writer = FrontMatterWriter::new();
    ops::set(&file, &assignments, &writer, options, out).with_context(|| context("update", &file))
}

/// Execute the delete command
pub fn delete_command<W: Write>(
    args: DeleteArgs,
    options: &WriteOptions,
    out: &mut W,
) -> Result<Outcome> {
    debug!("Executing delete command with args: {:?}", args);

    let (keys, file) = target(&args.args)?;
    let keys: Vec<KeyPath> = keys.iter().map(|k| KeyPath::parse(k)).collect();

    let writer = FrontMatterWriter::new();
    ops::delete(&file, &keys, &writer, options, out).with_context(|| context("update", &file))
}

fn target(args: &[String]) -> Result<(&[String], PathBuf)> {
    split_file(args).ok_or_else(|| anyhow!("no file given"))
}

fn context(action: &str, file: &Path) -> String {
    format!("failed to {} {}", action, file.display())
}
