use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::Output;
use crate::config::SentinelConfig;
use crate::git::GitRepo;
use crate::hooks::{RuleEngine, ShellExecutor, StderrMode};
use crate::shared::search_origins;

#[derive(Args, Default)]
pub struct RunArgs {
    /// Discard command stderr; failures then report stdout
    #[arg(long)]
    pub discard_stderr: bool,
}

/// Run every rule against the files changed relative to HEAD
pub fn execute(args: RunArgs, config: Option<&Path>, output: &mut Output) -> Result<ExitCode> {
    // Fatal before anything touches the repository
    let loaded = SentinelConfig::locate(config, &search_origins())?;
    output.verbose(&format!("Using configuration {}", loaded.path.display()));

    let repo = GitRepo::discover().context("Failed to open the git repository")?;

    let stderr = if args.discard_stderr {
        StderrMode::Discard
    } else {
        StderrMode::Capture
    };
    let executor = ShellExecutor::new(stderr);

    let summary = RuleEngine::new(&loaded, &repo, &executor, repo.workdir()).fire(output)?;

    tracing::debug!(
        "{} command(s) run, {} failed",
        summary.statuses.len(),
        summary.errors.len()
    );
    Ok(ExitCode::from(summary.exit_code() as u8))
}
