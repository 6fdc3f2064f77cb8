//! Error types for loading stylesheet text.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching a file's text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not name an existing file.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other IO failure while reading.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("File is not valid UTF-8: {}", path.display())]
    InvalidUtf8 { path: PathBuf },
}

impl LoadError {
    /// Classify an IO error raised while reading `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the failed load was for.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::InvalidUtf8 { path } => path,
        }
    }
}
