//! Upward directory search
//!
//! Both the configuration lookup and the hook installer need "the nearest
//! directory above here that contains X". This module is the single place that
//! walks the tree.

use std::path::{Path, PathBuf};

/// Find the nearest directory, starting at `start` and walking towards the
/// filesystem root, that contains an entry named `marker`.
///
/// Returns the path of the marker itself (`<dir>/<marker>`), not the directory.
pub fn find_ancestor_with(start: &Path, marker: &str) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(marker);
        tracing::trace!("Looking for {}", candidate.display());
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

/// Same as [`find_ancestor_with`] but tries several starting points in order.
pub fn find_from_origins(origins: &[PathBuf], marker: &str) -> Option<PathBuf> {
    origins
        .iter()
        .find_map(|origin| find_ancestor_with(origin, marker))
}

/// Directories a sentinel search starts from: the running executable's
/// directory first, then the current working directory.
pub fn search_origins() -> Vec<PathBuf> {
    let mut origins = Vec::with_capacity(2);

    match std::env::current_exe() {
        Ok(exe) => {
            if let Some(dir) = exe.parent() {
                origins.push(dir.to_path_buf());
            }
        }
        Err(e) => tracing::warn!("Cannot determine executable location: {}", e),
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !origins.contains(&cwd) {
            origins.push(cwd);
        }
    }

    origins
}
