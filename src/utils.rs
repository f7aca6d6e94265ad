//! Path helpers shared by the archiver

use crate::error::{ArchiveError, Result};
use std::path::{Path, PathBuf};

/// Make a path relative to a base path
///
/// Tries a lexical strip first so symbolic links under the base keep their
/// original spelling; falls back to canonicalizing both paths when the walk
/// hands back a path that does not share the base's normalisation.
pub fn make_relative(path: &Path, base: &Path) -> Result<PathBuf> {
    if let Ok(relative) = path.strip_prefix(base) {
        return Ok(relative.to_path_buf());
    }

    let path_canon = path.canonicalize()?;
    let base_canon = base.canonicalize()?;

    path_canon
        .strip_prefix(&base_canon)
        .map(|p| p.to_path_buf())
        .map_err(|_| {
            ArchiveError::internal(format!(
                "path {:?} is not relative to {:?}",
                path_canon, base_canon
            ))
        })
}
