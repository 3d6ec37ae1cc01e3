//! Git integration layer for git-sentinel
//!
//! Change detection and hook installation both go through `git2`; nothing
//! here shells out to the `git` binary.

pub mod hooks;
pub mod operations;

pub use hooks::HookInstaller;
pub use operations::ChangeDetector;

use crate::error::Result;
use git2::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    pub repo: Repository,
}

impl GitRepo {
    /// Discover and open a Git repository from current directory
    pub fn discover() -> Result<Self> {
        Self::discover_from(".")
    }

    /// Discover a repository containing `path`
    pub fn discover_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Working directory the changed paths are relative to.
    ///
    /// Bare repositories have none; the git directory stands in for it.
    pub fn workdir(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }
}
