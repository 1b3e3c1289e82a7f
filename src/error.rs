//! Error types for the frontmatter library
//!
//! Every fallible library operation returns [`Result`]. "Not found" is not an
//! error here: lookups return `Option` and the CLI reports absence through its
//! own outcome type.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum FrontmatterError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Front matter text that does not decode to a mapping
    #[error("invalid front matter: {reason}")]
    InvalidFrontMatter { reason: String },

    /// A `set` argument without a `=` separator or with an empty key
    #[error("invalid key=value format: {input}")]
    InvalidAssignment { input: String },

    /// Key path that cannot address a value
    #[error("invalid key path '{path}': {reason}")]
    InvalidKeyPath { path: String, reason: String },

    /// The temporary file could not be renamed over the target
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FrontmatterError>;

impl FrontmatterError {
    /// Create a new invalid front matter error
    pub fn invalid_front_matter(reason: impl Into<String>) -> Self {
        Self::InvalidFrontMatter {
            reason: reason.into(),
        }
    }

    /// Create a new invalid assignment error
    pub fn invalid_assignment(input: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            input: input.into(),
        }
    }

    /// Create a new invalid key path error
    pub fn invalid_key_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKeyPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new persist error
    pub fn persist(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persist {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from decoding structured text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Yaml(_) | Self::Json(_) | Self::InvalidFrontMatter { .. }
        )
    }
}
