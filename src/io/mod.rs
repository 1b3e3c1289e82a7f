pub mod formatter;
pub mod reader;
pub mod writer;

pub use formatter::{
    compose, format_front_matter, format_value, indent_sequences, unquote_simple_keys,
};
pub use reader::{parse_document, read_document, RawDocument, DELIMITER};
pub use writer::{FrontMatterWriter, WriteOptions, WriteResult, WriterConfig};
