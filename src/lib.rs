//! frontmatter: read and edit YAML front matter by dotted key path
//!
//! A document is split into a front matter block, bounded by the first two
//! `---` lines, and a body that is kept byte for byte. The block is decoded
//! into a [`Value`] tree, edited through [`KeyPath`]s, then encoded again and
//! put back in front of the untouched body.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use frontmatter::{read_document, Assignment, FrontMatter, KeyPath, Result};
//!
//! fn main() -> Result<()> {
//!     let raw = read_document("post.md")?;
//!     let mut front_matter = FrontMatter::parse(&raw.front_matter)?;
//!
//!     let title = front_matter.get(&KeyPath::parse("title"));
//!     println!("{:?}", title);
//!
//!     let assignment: Assignment = "meta.draft=false".parse()?;
//!     front_matter.set(&assignment.path, assignment.value)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Editing a file
//!
//! ```rust,no_run
//! use frontmatter::{ops, FrontMatterWriter, KeyPath, WriteOptions, Result};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let writer = FrontMatterWriter::new();
//!     let options = WriteOptions { dry_run: true };
//!     let keys = [KeyPath::parse("draft")];
//!     ops::delete(Path::new("post.md"), &keys, &writer, &options, &mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): the value tree, key paths, literal type inference, path edits
//! - [`io`](crate::io): splitting documents, serializing front matter, writing files
//! - [`ops`]: the get / set / delete operations used by the command line
//! - [`error`]: the library error type

// Public API exports
pub use crate::error::{FrontmatterError, Result};

// Core types
pub use crate::core::{parse_literal, Assignment, FrontMatter, KeyPath, Mapping, Value};

// IO types
pub use crate::io::{
    compose, format_front_matter, format_value, parse_document, read_document, FrontMatterWriter,
    RawDocument, WriteOptions, WriteResult, WriterConfig, DELIMITER,
};

pub use crate::ops::Outcome;

pub mod core;
pub mod error;
pub mod io;
pub mod ops;

// CLI components are available only in the binary, not as part of the library API

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_end_to_end_workflow() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");
        let content = "---\ntitle: Test Document\nauthor: John Doe\ntags: [rust, test]\n---\n# Hello World\n\nThis is the body content.";
        fs::write(&file_path, content).unwrap();

        let raw = read_document(&file_path).unwrap();
        assert!(raw.has_front_matter);
        assert_eq!(raw.body, b"# Hello World\n\nThis is the body content.");

        let mut front_matter = FrontMatter::parse(&raw.front_matter).unwrap();
        front_matter
            .set(&KeyPath::parse("meta.version"), Value::Int(2))
            .unwrap();
        assert!(front_matter.remove(&KeyPath::parse("author")));

        let text = format_front_matter(front_matter.as_mapping()).unwrap();
        FrontMatterWriter::new()
            .write(
                &file_path,
                &compose(&text, &raw.body),
                &WriteOptions::default(),
                &mut Vec::new(),
            )
            .unwrap();

        let updated = read_document(&file_path).unwrap();
        assert_eq!(updated.body, raw.body);
        let reparsed = FrontMatter::parse(&updated.front_matter).unwrap();
        assert_eq!(reparsed, front_matter);
        assert_eq!(
            reparsed.get(&KeyPath::parse("tags")),
            Some(&Value::Sequence(vec![Value::from("rust"), Value::from("test")]))
        );
    }
}
