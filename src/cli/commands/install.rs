use anyhow::{Context, Result};
use clap::Args;
use std::process::ExitCode;

use crate::cli::Output;
use crate::git::hooks::{InstallOutcome, UninstallOutcome};
use crate::git::HookInstaller;
use crate::shared::search_origins;

#[derive(Args)]
pub struct InstallArgs {
    /// Overwrite a pre-commit hook installed by another tool
    #[arg(long)]
    pub force: bool,
}

/// The repository being committed to is the one around the working
/// directory, so it is searched before the install location.
fn installer_origins() -> Vec<std::path::PathBuf> {
    let mut origins = search_origins();
    origins.reverse();
    origins
}

pub fn execute(args: InstallArgs, output: &Output) -> Result<ExitCode> {
    let installer = HookInstaller::discover(&installer_origins())?;
    let executable = std::env::current_exe().context("Cannot locate the git-sentinel executable")?;

    output.verbose(&format!("Hook will run {}", executable.display()));

    match installer.install(&executable, args.force)? {
        InstallOutcome::Installed(path) => {
            output.success(&format!("Installed pre-commit hook at {}", path.display()));
        }
        InstallOutcome::Replaced(path) => {
            output.success(&format!("Replaced pre-commit hook at {}", path.display()));
        }
        InstallOutcome::Skipped(path) => {
            output.warning(&format!(
                "{} was not written by git-sentinel; use --force to overwrite it",
                path.display()
            ));
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

pub fn uninstall(output: &Output) -> Result<ExitCode> {
    let installer = HookInstaller::discover(&installer_origins())?;

    match installer.uninstall()? {
        UninstallOutcome::Removed(path) => {
            output.success(&format!("Removed {}", path.display()));
        }
        UninstallOutcome::NotInstalled => output.info("No pre-commit hook installed"),
        UninstallOutcome::Foreign(path) => {
            output.warning(&format!(
                "{} was not written by git-sentinel; leaving it in place",
                path.display()
            ));
        }
    }

    Ok(ExitCode::SUCCESS)
}
