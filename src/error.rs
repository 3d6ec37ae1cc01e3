//! Fatal error kinds for a sentinel run
//!
//! Per-command failures are not errors here: they are recorded as
//! [`ErrorRecord`](crate::hooks::ErrorRecord)s and only influence the exit code.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentinelError {
    /// No `sentinel.json` in any searched directory
    #[error("{} not found", crate::config::CONFIG_FILE_NAME)]
    ConfigNotFound,

    /// The configuration file exists but could not be read or parsed
    #[error("malformed configuration {}: {message}", path.display())]
    MalformedConfig { path: PathBuf, message: String },

    /// Change detection failed
    #[error("git repository error: {0}")]
    Repository(#[from] git2::Error),
}

pub type Result<T> = std::result::Result<T, SentinelError>;
