use super::GitRepo;
use crate::error::Result;
use git2::{DiffFindOptions, DiffOptions, ErrorCode, Tree};

/// Source of the files changed in the commit being prepared
pub trait ChangeDetector {
    /// Paths that differ between the working tree (index included) and `HEAD`
    fn changed_files(&self) -> Result<Vec<String>>;
}

impl GitRepo {
    /// Tree `HEAD` points at, or `None` before the first commit
    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                tracing::debug!("HEAD is unborn, diffing against the empty tree");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl ChangeDetector for GitRepo {
    fn changed_files(&self) -> Result<Vec<String>> {
        let head_tree = self.head_tree()?;

        let mut diff_opts = DiffOptions::new();
        diff_opts.include_untracked(false).context_lines(0);

        let mut diff = self
            .repo
            .diff_tree_to_workdir_with_index(head_tree.as_ref(), Some(&mut diff_opts))?;

        // git diff detects renames by default; a renamed file is only its new path
        diff.find_similar(Some(DiffFindOptions::new().renames(true)))?;

        let files: Vec<String> = diff
            .deltas()
            .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
            .map(|path| path.to_string_lossy().into_owned())
            .filter(|path| !path.is_empty())
            .collect();

        tracing::debug!("{} file(s) changed relative to HEAD", files.len());
        Ok(files)
    }
}
