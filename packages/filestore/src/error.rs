//! Error types for storage operations.
//!
//! There are two failure modes a caller needs to tell apart: the named file
//! is absent, or the filesystem refused the operation for any other reason.
//! The underlying `io::Error` is carried unmodified as the error source.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors returned by a [`Storage`](crate::Storage) backend.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// A read targeted a name with no file behind it.
    #[error("no file found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O failure: permission denied, disk full, a parent that
    /// could not be created, a short write.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Wrap an `io::Error` raised by a read, promoting `NotFound` to its own
    /// variant.
    pub fn from_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StorageError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Wrap an `io::Error` raised while writing. Writes never report
    /// `NotFound`, whatever the underlying kind.
    pub fn from_write(path: &Path, source: io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The `io::ErrorKind` this error corresponds to.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            StorageError::NotFound { .. } => io::ErrorKind::NotFound,
            StorageError::Io { source, .. } => source.kind(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }

    /// The name the failed operation was addressing.
    pub fn path(&self) -> &Path {
        match self {
            StorageError::NotFound { path } | StorageError::Io { path, .. } => path,
        }
    }
}
