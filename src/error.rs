//! Error types for the logarch library
//!
//! This module defines all error types that can occur during an archiving run.
//! Errors carry enough context (paths, underlying I/O causes) to produce a
//! useful report at the top level of a run.

use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Results in the logarch library
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Main error type for all archiving operations
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The source log directory does not exist or is not a directory
    #[error("source directory does not exist: {path:?}")]
    SourceNotFound {
        /// Path that was expected to be an existing directory
        path: PathBuf,
    },

    /// The destination directory could not be created
    #[error("failed to create archive directory {path:?}: {source}")]
    DestinationCreate {
        /// Path that could not be created
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The archive file could not be created or finalized
    #[error("failed to write archive {path:?}: {source}")]
    ArchiveWrite {
        /// Path of the archive being written
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Walk directory error from walkdir crate
    #[error("walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// I/O errors during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for unexpected conditions
    #[error("internal error: {0}")]
    Internal(String),
}

impl ArchiveError {
    /// Create a source-not-found error for the given path
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        ArchiveError::SourceNotFound { path: path.into() }
    }

    /// Create an archive-write error for the given path
    pub fn archive_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::ArchiveWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error with a custom message
    pub fn internal(msg: impl Into<String>) -> Self {
        ArchiveError::Internal(msg.into())
    }

    /// Get the user-facing message for this error
    ///
    /// The missing-source case has a dedicated message naming the directory;
    /// every other error is reported through its Display form.
    pub fn user_message(&self) -> String {
        match self {
            ArchiveError::SourceNotFound { path } => {
                format!("Error: The directory '{}' does not exist.", path.display())
            }
            other => format!("An error occurred: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_user_message() {
        let err = ArchiveError::source_not_found("/var/log/missing");
        assert_eq!(
            err.user_message(),
            "Error: The directory '/var/log/missing' does not exist."
        );
    }

    #[test]
    fn test_generic_user_message() {
        let err = ArchiveError::internal("something broke");
        assert_eq!(
            err.user_message(),
            "An error occurred: internal error: something broke"
        );
    }

    #[test]
    fn test_archive_write_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ArchiveError::archive_write("/archives/out.tar.gz", io);
        let msg = err.to_string();
        assert!(msg.contains("out.tar.gz"));
        assert!(msg.contains("denied"));
    }
}
