//! Writing documents back, either to a preview stream or to disk
//!
//! Persisted writes go to a temporary file in the target's directory which
//! is then renamed over the target. A reader of the path sees either the old
//! content or the new content, never a partial file. Two writers racing on
//! the same path are not coordinated: the last rename wins.

use crate::error::{FrontmatterError, Result};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Configuration for the front matter writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Write to a temp file first, then rename
    pub atomic_writes: bool,
    /// Carry the existing file's permissions over to the new file
    pub preserve_permissions: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            atomic_writes: true,
            preserve_permissions: true,
        }
    }
}

/// Write operation options for individual operations
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Print the result instead of touching the file
    pub dry_run: bool,
}

/// Result of a write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Whether the file on disk changed
    pub modified: bool,
    /// Path that was written (None for a dry run)
    pub output_path: Option<PathBuf>,
}

/// Front matter writer
#[derive(Debug, Clone, Default)]
pub struct FrontMatterWriter {
    config: WriterConfig,
}

impl FrontMatterWriter {
    /// Create a new writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new writer with custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Get writer configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Emit `content` for `path`
    ///
    /// In dry-run mode the content goes to `preview` and the file is never
    /// opened. Otherwise the file is replaced, or created if missing. A file
    /// that already holds exactly `content` is left alone.
    pub fn write<W: Write>(
        &self,
        path: &Path,
        content: &[u8],
        options: &WriteOptions,
        preview: &mut W,
    ) -> Result<WriteResult> {
        if options.dry_run {
            preview.write_all(content)?;
            preview.flush()?;
            return Ok(WriteResult {
                modified: false,
                output_path: None,
            });
        }

        let unchanged = match fs::read(path) {
            Ok(existing) => existing == content,
            Err(_) => false,
        };
        if unchanged {
            debug!("{} is already up to date", path.display());
            return Ok(WriteResult {
                modified: false,
                output_path: Some(path.to_path_buf()),
            });
        }

        if self.config.atomic_writes {
            self.write_atomic(path, content)?;
        } else {
            fs::write(path, content)?;
        }
        debug!("wrote {} bytes to {}", content.len(), path.display());

        Ok(WriteResult {
            modified: true,
            output_path: Some(path.to_path_buf()),
        })
    }

    /// Write file atomically using a temporary file in the same directory
    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()> {
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let existing = fs::metadata(path).ok();

        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        temp_file.write_all(content)?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;

        if self.config.preserve_permissions {
            match existing {
                Some(metadata) => temp_file.as_file().set_permissions(metadata.permissions())?,
                None => set_new_file_permissions(temp_file.as_file())?,
            }
        }

        temp_file
            .persist(path)
            .map_err(|e| FrontmatterError::persist(path, e.error))?;
        Ok(())
    }
}

/// Temp files are created owner-only; new documents get the usual 0644
#[cfg(unix)]
fn set_new_file_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
