//! Input validation for an archiving run
//!
//! Confirms the source directory exists and makes sure the destination
//! directory is present before any archive is written.

use crate::error::{ArchiveError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Validate the source directory and ensure the destination directory exists
///
/// Fails with [`ArchiveError::SourceNotFound`] when `source` is missing or is
/// not a directory. The destination is created with any missing parents when
/// absent; creation failure maps to [`ArchiveError::DestinationCreate`].
/// When both directories already exist this has no side effect.
pub fn ensure_directories(source: &Path, destination: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(ArchiveError::source_not_found(source));
    }

    if !destination.exists() {
        debug!("Creating archive directory {:?}", destination);
        fs::create_dir_all(destination).map_err(|e| ArchiveError::DestinationCreate {
            path: destination.to_path_buf(),
            source: e,
        })?;
    }

    Ok(())
}
