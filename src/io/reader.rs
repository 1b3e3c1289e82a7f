//! Locating the front matter block in a document
//!
//! A line whose trimmed content is `---` is a delimiter, but only the first
//! two such lines in a document count. Later ones are ordinary body text, so
//! a markdown horizontal rule in the body never reopens the block.
//!
//! Documents are handled as bytes. Only the front matter has to be UTF-8;
//! the body is carried through untouched whatever its encoding.

use crate::error::{FrontmatterError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The front matter delimiter line
pub const DELIMITER: &str = "---";

/// A document split into its raw front matter text and body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    /// Lines between the first two delimiters, undecoded
    pub front_matter: String,
    /// Everything else, byte for byte
    pub body: Vec<u8>,
    /// Whether two delimiter lines were found
    pub has_front_matter: bool,
}

/// Split document bytes into front matter and body
///
/// Without two delimiter lines the whole input is the body, unchanged. Lines
/// before the first delimiter are kept in the body, ahead of the lines that
/// follow the closing delimiter. Front matter that is not UTF-8 is an error.
pub fn parse_document(content: &[u8]) -> Result<RawDocument> {
    let mut front_matter = Vec::new();
    let mut body = Vec::new();
    let mut delimiters = 0;

    for line in content.split_inclusive(|&b| b == b'\n') {
        if delimiters < 2 && is_delimiter(line) {
            delimiters += 1;
            continue;
        }
        if delimiters == 1 {
            front_matter.extend_from_slice(line);
        } else {
            body.extend_from_slice(line);
        }
    }

    if delimiters < 2 {
        return Ok(RawDocument {
            front_matter: String::new(),
            body: content.to_vec(),
            has_front_matter: false,
        });
    }

    let front_matter = String::from_utf8(front_matter)
        .map_err(|_| FrontmatterError::invalid_front_matter("front matter is not valid UTF-8"))?;

    Ok(RawDocument {
        front_matter,
        body,
        has_front_matter: true,
    })
}

/// Read and split a document from disk
///
/// A missing file reads as an empty document. Every other I/O failure,
/// including a directory path, is an error.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<RawDocument> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(content) => parse_document(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist, treating it as empty", path.display());
            Ok(RawDocument::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn is_delimiter(line: &[u8]) -> bool {
    std::str::from_utf8(line).is_ok_and(|text| text.trim() == DELIMITER)
}
