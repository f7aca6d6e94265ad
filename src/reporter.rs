//! Outcome reporting for an archiving run
//!
//! Every run ends in exactly one report: success with the archive path, or
//! failure with the error. The report lands in two places, an append-only
//! activity log file and the user-facing standard output. The activity log is
//! an explicitly constructed object scoped to one run rather than process-wide
//! logging state.

use crate::error::{ArchiveError, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Default activity log filename, resolved against the working directory
pub const ACTIVITY_LOG_NAME: &str = "log_archive.log";

/// Timestamp format for activity log lines, e.g. `2024-08-16 10:06:48,123`
const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Append-only activity log
///
/// Holds the log file open in append mode for the duration of one run. Each
/// recorded event is a single line, `<timestamp> - <message>`, flushed as soon
/// as it is written so the record survives any exit path.
pub struct ActivityLog {
    file: File,
}

impl ActivityLog {
    /// Open (creating if needed) the activity log at `path` for appending
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(ActivityLog { file })
    }

    /// Append one timestamped event line and flush it
    pub fn record(&mut self, message: &str) -> Result<()> {
        let timestamp = Local::now().format(LOG_TIMESTAMP_FORMAT);
        writeln!(self.file, "{} - {}", timestamp, message)?;
        self.file.flush()?;
        Ok(())
    }
}

/// Reports the outcome of a run to the activity log and to standard output
pub struct Reporter {
    log: ActivityLog,
}

impl Reporter {
    /// Build a reporter around an open activity log
    pub fn new(log: ActivityLog) -> Self {
        Reporter { log }
    }

    /// Report a successfully created archive
    pub fn success(&mut self, archive_path: &Path) {
        self.record(&format!("Archived logs to {}", archive_path.display()));
        println!("Log archive created at: {}", archive_path.display());
    }

    /// Report a failed run
    pub fn failure(&mut self, error: &ArchiveError) {
        self.record(&format!("Error during archiving: {}", error));
        println!("{}", error.user_message());
    }

    // A log write failure must not abort reporting; the user-facing message
    // still has to reach stdout.
    fn record(&mut self, message: &str) {
        if let Err(e) = self.log.record(message) {
            warn!("Failed to write activity log entry: {}", e);
        }
    }
}
