//! Pre-commit rule execution
//!
//! - [`engine`] - walks the rules and fires the matching ones
//! - [`executor`] - runs a single shell command
//! - [`report`] - progress reporting interface
//!
//! A run looks like this:
//!
//! ```rust,no_run
//! use git_sentinel::config::SentinelConfig;
//! use git_sentinel::git::GitRepo;
//! use git_sentinel::hooks::{RuleEngine, ShellExecutor};
//! use git_sentinel::cli::Output;
//!
//! let config = SentinelConfig::locate(None, &git_sentinel::shared::search_origins())?;
//! let repo = GitRepo::discover()?;
//! let executor = ShellExecutor::default();
//! let mut output = Output::new(0, false);
//!
//! let summary = RuleEngine::new(&config, &repo, &executor, repo.workdir()).fire(&mut output)?;
//! std::process::exit(summary.exit_code());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engine;
pub mod executor;
pub mod report;

pub use engine::{ErrorRecord, RuleEngine, RunSummary, exit_code};
pub use executor::{ExecutionStatus, Executor, ShellExecutor, StderrMode};
pub use report::Reporter;
