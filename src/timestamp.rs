//! Timestamp generation for archive filenames
//!
//! Archive names embed the local wall-clock time as `YYYYMMDD_HHMMSS`, which
//! is sortable and safe on every filesystem. The format is second-granular:
//! two runs started within the same second produce the same name, an accepted
//! limitation of the naming scheme.

use chrono::{DateTime, Local};

/// Format used inside archive filenames, e.g. `20240816_100648`
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Generate a timestamp string for the current local time
pub fn generate_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Format a specific instant as an archive-name timestamp
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
