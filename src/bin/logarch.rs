//! # logarch CLI
//!
//! Archives a directory of log files into a timestamped `.tar.gz` archive.
//!
//! ## Usage
//! ```bash
//! logarch /var/log/myapp /var/archives
//! ```
//!
//! Every run appends its outcome to `log_archive.log` in the working
//! directory. The process exits with a success status whether the run
//! succeeded or failed; the outcome is carried by the printed message, not
//! the exit code. Diagnostics can be enabled through `RUST_LOG`.

use clap::Parser;
use logarch::{ActivityLog, LogArchiver, Reporter, ACTIVITY_LOG_NAME};
use std::path::{Path, PathBuf};

/// Archive logs from a specified directory
#[derive(Parser)]
#[command(name = "logarch")]
#[command(version)]
#[command(about = "Archive logs from a specified directory")]
struct Cli {
    /// Directory containing the logs to archive
    log_directory: PathBuf,

    /// Directory to store the archived logs
    archive_directory: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Without the activity log there is nowhere to record outcomes; report
    // on stdout and end the run, still with a success status.
    let log = match ActivityLog::open(Path::new(ACTIVITY_LOG_NAME)) {
        Ok(log) => log,
        Err(e) => {
            println!("An error occurred: {}", e);
            return;
        }
    };
    let mut reporter = Reporter::new(log);

    let archiver = LogArchiver::new(cli.log_directory, cli.archive_directory);
    match archiver.run() {
        Ok(archive_path) => reporter.success(&archive_path),
        Err(e) => reporter.failure(&e),
    }
}
