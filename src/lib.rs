//! # git-sentinel - rule-driven pre-commit checks
//!
//! git-sentinel runs as a git pre-commit hook. It lists the files changed
//! relative to `HEAD`, matches them against the rules in `sentinel.json`, runs
//! the shell commands of every rule that matched, and rejects the commit when
//! any command failed.
//!
//! ## Configuration
//!
//! `sentinel.json` is found by walking up from the installed executable, then
//! from the working directory:
//!
//! ```json
//! {
//!   "rules": [
//!     {
//!       "name": "lint",
//!       "mask": "\\.ts$",
//!       "separate": true,
//!       "commands": ["eslint ${filename}"]
//!     },
//!     {
//!       "name": "test",
//!       "mask": "^src/",
//!       "stopOnErrors": true,
//!       "commands": ["npm run build", "npm test"]
//!     }
//!   ]
//! }
//! ```
//!
//! - `mask` is a regular expression searched (not anchored) in each path
//! - `separate` runs the commands once per matched file, with `${filename}`
//!   bound to it; otherwise they run once and `${filename}` is empty
//! - `stopOnErrors` abandons the rest of the rule after its first failure
//! - `cwd` (optional) runs the rule's commands in a directory relative to
//!   `sentinel.json`
//!
//! ## Quick Start
//!
//! ```bash
//! cargo install git-sentinel
//! git-sentinel install
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::SentinelConfig;
pub use error::SentinelError;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
