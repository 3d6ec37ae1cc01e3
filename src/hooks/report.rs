use super::engine::ErrorRecord;
use super::executor::ExecutionStatus;
use crate::config::Rule;

/// Receives progress of a run.
///
/// The console implementation lives in `cli::output`; tests record calls.
pub trait Reporter {
    /// Files changed relative to `HEAD` (possibly none)
    fn changed_files(&mut self, files: &[String]);

    /// A rule matched `files` and is about to run its commands
    fn rule_fired(&mut self, _rule: &Rule, _files: &[&str]) {}

    /// One command finished
    fn command_finished(&mut self, _status: &ExecutionStatus) {}

    /// All failures of the run (possibly none)
    fn errors(&mut self, errors: &[ErrorRecord]);
}
