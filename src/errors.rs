use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by readmap operations.
///
/// The analysis pipeline itself is total over its inputs; the only failure
/// path is loading the document.
#[derive(Debug, Error)]
pub enum ReadmapError {
    /// File system I/O errors (missing path, permissions, etc.)
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadmapError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReadmapError::Io {
            path: path.into(),
            source,
        }
    }
}
