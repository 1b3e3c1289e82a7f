//! The get / set / delete operations behind the command line
//!
//! Each operation reads one document, works on it in memory and either
//! prints or persists the result. Output that a user would see on standard
//! output goes to the `out` stream passed in.

use crate::core::{Assignment, FrontMatter, KeyPath};
use crate::error::Result;
use crate::io::{
    compose, format_front_matter, format_value, read_document, FrontMatterWriter, RawDocument,
    WriteOptions,
};
use log::{debug, warn};
use std::io::Write;
use std::path::Path;

/// How an operation finished when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation did what was asked
    Success,
    /// There was no front matter, or the requested key is absent. Nothing was
    /// written to `out`.
    NotFound,
}

/// Print the whole front matter, or the value at `key`
///
/// Unparseable front matter is an error here; only the editing operations
/// recover from it.
pub fn get<W: Write>(path: &Path, key: Option<&KeyPath>, out: &mut W) -> Result<Outcome> {
    let raw = read_document(path)?;
    if raw.front_matter.trim().is_empty() {
        debug!("no front matter in {}", path.display());
        return Ok(Outcome::NotFound);
    }

    let front_matter = FrontMatter::parse(&raw.front_matter)?;
    let text = match key.filter(|k| !k.is_root()) {
        None if front_matter.is_empty() => {
            debug!("front matter in {} is empty", path.display());
            return Ok(Outcome::NotFound);
        }
        None => format_front_matter(front_matter.as_mapping())?,
        Some(key) => match front_matter.get(key) {
            Some(value) => format_value(value)?,
            None => {
                debug!("'{}' not found in {}", key, path.display());
                return Ok(Outcome::NotFound);
            }
        },
    };

    out.write_all(text.as_bytes())?;
    Ok(Outcome::Success)
}

/// Apply `assignments` in order and write the document back
pub fn set<W: Write>(
    path: &Path,
    assignments: &[Assignment],
    writer: &FrontMatterWriter,
    options: &WriteOptions,
    out: &mut W,
) -> Result<Outcome> {
    let raw = read_document(path)?;
    let mut front_matter = load_for_update(&raw, path);

    for assignment in assignments {
        debug!("setting '{}' in {}", assignment.path, path.display());
        front_matter.set(&assignment.path, assignment.value.clone())?;
    }

    let text = format_front_matter(front_matter.as_mapping())?;
    writer.write(path, &compose(&text, &raw.body), options, out)?;
    Ok(Outcome::Success)
}

/// Remove `keys`, or the whole front matter block when `keys` is empty
///
/// Keys that are not present are skipped. When nothing is left the block is
/// dropped and only the body remains.
pub fn delete<W: Write>(
    path: &Path,
    keys: &[KeyPath],
    writer: &FrontMatterWriter,
    options: &WriteOptions,
    out: &mut W,
) -> Result<Outcome> {
    let raw = read_document(path)?;

    let text = if keys.is_empty() {
        debug!("removing the front matter block from {}", path.display());
        String::new()
    } else {
        let mut front_matter = load_for_update(&raw, path);
        for key in keys {
            if !front_matter.remove(key) {
                debug!("'{}' not present in {}", key, path.display());
            }
        }
        format_front_matter(front_matter.as_mapping())?
    };

    writer.write(path, &compose(&text, &raw.body), options, out)?;
    Ok(Outcome::Success)
}

/// Decode front matter for editing, starting from empty when it is malformed
///
/// The old content is discarded in that case, so a syntax error anywhere in
/// the block loses every existing field.
// TODO: offer a strict mode that refuses to edit unparseable front matter.
fn load_for_update(raw: &RawDocument, path: &Path) -> FrontMatter {
    match FrontMatter::parse(&raw.front_matter) {
        Ok(front_matter) => front_matter,
        Err(err) => {
            warn!(
                "could not parse existing front matter in {}, new values will overwrite or be \
                 added to a new front matter block: {}",
                path.display(),
                err
            );
            FrontMatter::new()
        }
    }
}
