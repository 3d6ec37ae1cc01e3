//! Command-line interface for git-sentinel
//!
//! Without a subcommand the binary behaves as the pre-commit hook itself,
//! which is how the installed hook script invokes it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod commands;
mod output;

pub use output::Output;

/// git-sentinel - rule-driven pre-commit checks
#[derive(Parser)]
#[command(
    name = "git-sentinel",
    version,
    about = "Run shell commands for the files changed in a commit",
    long_about = "git-sentinel matches the files changed relative to HEAD against the rules in \
                  sentinel.json and runs each matching rule's commands. The commit is rejected \
                  when any command fails."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of searching for sentinel.json
    #[arg(long, value_name = "FILE", env = "SENTINEL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the rules against the changed files (default)
    Run(commands::run::RunArgs),
    /// Install the pre-commit hook into the enclosing repository
    Install(commands::install::InstallArgs),
    /// Remove the pre-commit hook written by `install`
    Uninstall,
    /// Load the configuration and list its rules
    Validate,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        setup_logging(self.verbose, self.quiet);

        let mut output = Output::new(self.verbose, self.quiet);
        let config = self.config.as_deref();

        match self.command {
            Some(Commands::Run(args)) => commands::run::execute(args, config, &mut output),
            Some(Commands::Install(args)) => commands::install::execute(args, &output),
            Some(Commands::Uninstall) => commands::install::uninstall(&output),
            Some(Commands::Validate) => commands::validate::execute(config, &output),
            None => commands::run::execute(Default::default(), config, &mut output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // try_init: tests may construct more than one Cli in a process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
