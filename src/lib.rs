//! # logarch - Timestamped log directory archiving
//!
//! Archives a directory of log files into a single gzip-compressed tar
//! archive named after the current time, and records the outcome of each run
//! in an append-only activity log.
//!
//! ## Overview
//!
//! One run is a single synchronous pipeline:
//!
//! 1. Validate the source directory and create the destination if absent
//! 2. Generate a `YYYYMMDD_HHMMSS` timestamp from the local clock
//! 3. Walk the source recursively and stream every regular file into
//!    `logs_archive_<timestamp>.tar.gz`, preserving source-relative paths
//! 4. Report the resulting archive path (or the error) to the activity log
//!    and to standard output
//!
//! There is no state across runs beyond the archives themselves and the
//! activity log. Concurrent runs against the same destination are safe as
//! long as they start in different seconds; the timestamp is the only
//! uniqueness in the archive name.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logarch::LogArchiver;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let archiver = LogArchiver::new("/var/log/myapp", "/var/archives");
//! let archive_path = archiver.run()?;
//! println!("archived to {}", archive_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ArchiveError>`. Errors never escape a CLI
//! run unhandled: the binary catches every failure, reports it through the
//! [`reporter::Reporter`], and still exits with a success status. Callers of
//! the library get the error values and decide for themselves.

pub mod archiver;
pub mod error;
pub mod reporter;
pub mod timestamp;
pub mod validate;

mod utils;

// Re-export main types for convenience
pub use archiver::LogArchiver;
pub use error::{ArchiveError, Result};
pub use reporter::{ActivityLog, Reporter, ACTIVITY_LOG_NAME};
pub use timestamp::generate_timestamp;
pub use validate::ensure_directories;
