//! Archive construction
//!
//! The archiver walks a source directory recursively and streams every
//! regular file into a single gzip-compressed tar archive named after the
//! run's timestamp. Member names are paths relative to the source root, so
//! extracting the archive reproduces the source layout. Empty directories are
//! not recorded and symbolic links are followed and stored as regular files.

use crate::error::{ArchiveError, Result};
use crate::timestamp::generate_timestamp;
use crate::utils::make_relative;
use crate::validate::ensure_directories;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Archives one source directory into one timestamped `.tar.gz` artifact
///
/// The struct only holds the two paths of a run; all state lives on the
/// filesystem. A single instance is meant to drive a single run to
/// completion.
pub struct LogArchiver {
    source: PathBuf,
    destination: PathBuf,
}

impl LogArchiver {
    /// Create an archiver for the given source and destination directories
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        LogArchiver {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Run the full pipeline: validate, stamp, archive
    ///
    /// Returns the absolute path of the created archive. Any failure aborts
    /// the run; nothing under the source directory is ever modified.
    pub fn run(&self) -> Result<PathBuf> {
        ensure_directories(&self.source, &self.destination)?;
        let timestamp = generate_timestamp();
        self.archive(&timestamp)
    }

    /// Path the archive for `timestamp` will be written to
    pub fn archive_path(&self, timestamp: &str) -> PathBuf {
        self.destination
            .join(format!("logs_archive_{}.tar.gz", timestamp))
    }

    /// Build the archive for an already-validated run
    ///
    /// Walks the source tree and appends every regular file under its
    /// source-relative name into a gzip'd tar stream. Mid-walk I/O failures
    /// abort the whole operation; a partial archive file may be left behind
    /// but the error is always surfaced.
    pub fn archive(&self, timestamp: &str) -> Result<PathBuf> {
        let archive_path = self.archive_path(timestamp);
        info!("Creating archive {:?}", archive_path);

        let file = File::create(&archive_path)
            .map_err(|e| ArchiveError::archive_write(&archive_path, e))?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        builder.follow_symlinks(true);

        let mut member_count = 0usize;
        for entry in WalkDir::new(&self.source).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = make_relative(entry.path(), &self.source)?;
            debug!("Adding member {:?}", relative);
            builder
                .append_path_with_name(entry.path(), &relative)
                .map_err(|e| ArchiveError::archive_write(&archive_path, e))?;
            member_count += 1;
        }

        let encoder = builder
            .into_inner()
            .map_err(|e| ArchiveError::archive_write(&archive_path, e))?;
        encoder
            .finish()
            .map_err(|e| ArchiveError::archive_write(&archive_path, e))?
            .sync_all()
            .map_err(|e| ArchiveError::archive_write(&archive_path, e))?;

        info!("Archived {} files to {:?}", member_count, archive_path);

        // The destination exists by now, so this only fails on exotic
        // filesystem races.
        Ok(archive_path.canonicalize()?)
    }
}
