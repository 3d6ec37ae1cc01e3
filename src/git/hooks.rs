//! Pre-commit hook installation
//!
//! The hook is a small shell script that calls back into this executable.
//! Scripts written by git-sentinel carry a marker line so they can be told
//! apart from hooks installed by other tools.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

use crate::shared::find_from_origins;

pub const HOOK_NAME: &str = "pre-commit";
const HOOK_MARKER: &str = "# installed by git-sentinel";

/// Outcome of [`HookInstaller::install`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(PathBuf),
    Replaced(PathBuf),
    /// A hook from another tool is in place and `force` was not given
    Skipped(PathBuf),
}

/// Outcome of [`HookInstaller::uninstall`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed(PathBuf),
    NotInstalled,
    /// The hook was not written by git-sentinel and was left alone
    Foreign(PathBuf),
}

pub struct HookInstaller {
    hooks_dir: PathBuf,
}

impl HookInstaller {
    /// Locate the hooks directory of the nearest repository above any origin
    pub fn discover(origins: &[PathBuf]) -> Result<Self> {
        let dot_git = find_from_origins(origins, ".git")
            .context(".git directory not found. Maybe not a git repo.")?;
        let repo_root = dot_git
            .parent()
            .context("Repository root has no parent directory")?;

        // `.git` may be a file (worktrees, submodules); let libgit2 resolve it
        let repo = Repository::open(repo_root)
            .with_context(|| format!("Failed to open Git repository at {}", repo_root.display()))?;

        Ok(Self::new(repo.path().join("hooks")))
    }

    pub fn new(hooks_dir: PathBuf) -> Self {
        Self { hooks_dir }
    }

    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    /// Script body invoking `executable run`
    pub fn script(executable: &Path) -> String {
        // git for Windows runs hooks through its bundled sh, which wants forward slashes
        let exe = executable.to_string_lossy().replace('\\', "/");
        format!("#!/bin/sh\n{HOOK_MARKER}\n\nexec \"{exe}\" run\n")
    }

    pub fn is_ours(path: &Path) -> bool {
        std::fs::read_to_string(path)
            .map(|content| content.contains(HOOK_MARKER))
            .unwrap_or(false)
    }

    /// Write the pre-commit hook
    pub fn install(&self, executable: &Path, force: bool) -> Result<InstallOutcome> {
        let hook_path = self.hook_path();
        let existed = hook_path.exists();

        if existed && !force && !Self::is_ours(&hook_path) {
            tracing::warn!("Refusing to overwrite foreign hook {}", hook_path.display());
            return Ok(InstallOutcome::Skipped(hook_path));
        }

        std::fs::create_dir_all(&self.hooks_dir).context("Failed to create hooks directory")?;
        std::fs::write(&hook_path, Self::script(executable))
            .context("Failed to write hook file")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&hook_path)
                .context("Failed to get hook file metadata")?
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&hook_path, perms)
                .context("Failed to set hook file permissions")?;
        }

        tracing::info!("Wrote {}", hook_path.display());
        Ok(if existed {
            InstallOutcome::Replaced(hook_path)
        } else {
            InstallOutcome::Installed(hook_path)
        })
    }

    /// Remove the pre-commit hook if git-sentinel wrote it
    pub fn uninstall(&self) -> Result<UninstallOutcome> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(UninstallOutcome::NotInstalled);
        }
        if !Self::is_ours(&hook_path) {
            return Ok(UninstallOutcome::Foreign(hook_path));
        }

        std::fs::remove_file(&hook_path).context("Failed to remove hook file")?;
        Ok(UninstallOutcome::Removed(hook_path))
    }
}
