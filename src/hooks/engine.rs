//! Rule engine
//!
//! Runs every rule of a configuration against the changed files of one
//! commit. Rules are evaluated in declaration order; within a rule the
//! firing set is walked outer, commands inner. Everything is sequential.

use std::path::{Path, PathBuf};

use super::executor::{ExecutionStatus, Executor};
use super::report::Reporter;
use crate::config::{LoadedConfig, Rule};
use crate::error::Result;
use crate::git::ChangeDetector;
use crate::rules::{expand_command, matching_files};

/// A failed command, kept for the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub command: String,
    pub message: String,
}

/// Everything a run produced
#[derive(Debug, Default)]
pub struct RunSummary {
    pub changed_files: Vec<String>,
    pub statuses: Vec<ExecutionStatus>,
    pub errors: Vec<ErrorRecord>,
}

impl RunSummary {
    fn record(&mut self, status: ExecutionStatus) {
        if !status.success {
            self.errors.push(ErrorRecord {
                command: status.command.clone(),
                message: status.message.clone(),
            });
        }
        self.statuses.push(status);
    }

    pub fn exit_code(&self) -> i32 {
        exit_code(self.errors.len())
    }
}

/// Map the number of failed commands to the hook's exit code
pub fn exit_code(error_count: usize) -> i32 {
    if error_count == 0 { 0 } else { 1 }
}

pub struct RuleEngine<'a> {
    config: &'a LoadedConfig,
    detector: &'a dyn ChangeDetector,
    executor: &'a dyn Executor,
    workdir: PathBuf,
}

impl<'a> RuleEngine<'a> {
    /// `workdir` is where commands run unless a rule sets its own `cwd`
    pub fn new(
        config: &'a LoadedConfig,
        detector: &'a dyn ChangeDetector,
        executor: &'a dyn Executor,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            detector,
            executor,
            workdir: workdir.into(),
        }
    }

    /// Run all rules once.
    ///
    /// Only change detection can fail; command failures end up in the
    /// returned summary.
    pub fn fire(&self, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        let mut summary = RunSummary {
            changed_files: self.detector.changed_files()?,
            ..RunSummary::default()
        };
        reporter.changed_files(&summary.changed_files);

        let changed = std::mem::take(&mut summary.changed_files);
        for rule in &self.config.config.rules {
            let matched = matching_files(&changed, &rule.mask);
            if matched.is_empty() {
                tracing::debug!("Rule '{}' skipped: no file matches {}", rule.name, rule.mask);
                continue;
            }

            tracing::debug!("Rule '{}' fired for {} file(s)", rule.name, matched.len());
            reporter.rule_fired(rule, &matched);
            self.fire_rule(rule, &matched, &mut summary, reporter);
        }
        summary.changed_files = changed;

        reporter.errors(&summary.errors);
        Ok(summary)
    }

    fn fire_rule(
        &self,
        rule: &Rule,
        matched: &[&str],
        summary: &mut RunSummary,
        reporter: &mut dyn Reporter,
    ) {
        let firing_set: &[&str] = if rule.separate { matched } else { &[""] };
        let cwd = rule.working_dir(self.config.base_dir(), &self.workdir);

        for file in firing_set {
            for template in &rule.commands {
                let status = self.run_command(&expand_command(file, template), &cwd);
                let failed = !status.success;

                reporter.command_finished(&status);
                summary.record(status);

                if failed && rule.stop_on_errors {
                    tracing::debug!("Rule '{}' stopped after first failure", rule.name);
                    return;
                }
            }
        }
    }

    fn run_command(&self, command: &str, cwd: &Path) -> ExecutionStatus {
        self.executor.run(command, cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SentinelConfig;
    use std::cell::RefCell;

    struct FakeDetector(Vec<String>);

    impl ChangeDetector for FakeDetector {
        fn changed_files(&self) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingDetector;

    impl ChangeDetector for FailingDetector {
        fn changed_files(&self) -> Result<Vec<String>> {
            Err(git2::Error::from_str("not a repository").into())
        }
    }

    /// Fails every command containing "error", records every invocation
    #[derive(Default)]
    struct FakeExecutor {
        calls: RefCell<Vec<(String, PathBuf)>>,
    }

    impl FakeExecutor {
        fn commands(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
        }
    }

    impl Executor for FakeExecutor {
        fn run(&self, command: &str, cwd: &Path) -> ExecutionStatus {
            self.calls
                .borrow_mut()
                .push((command.to_string(), cwd.to_path_buf()));
            if command.contains("error") {
                ExecutionStatus::failed(command, format!("{command} failed"))
            } else {
                ExecutionStatus::succeeded(command, "ok")
            }
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        changed: Option<Vec<String>>,
        fired: Vec<(String, Vec<String>)>,
        finished: usize,
        errors: Option<Vec<ErrorRecord>>,
    }

    impl Reporter for RecordingReporter {
        fn changed_files(&mut self, files: &[String]) {
            self.changed = Some(files.to_vec());
        }

        fn rule_fired(&mut self, rule: &Rule, files: &[&str]) {
            self.fired.push((
                rule.name.clone(),
                files.iter().map(|f| f.to_string()).collect(),
            ));
        }

        fn command_finished(&mut self, _status: &ExecutionStatus) {
            self.finished += 1;
        }

        fn errors(&mut self, errors: &[ErrorRecord]) {
            self.errors = Some(errors.to_vec());
        }
    }

    fn config(json: &str) -> LoadedConfig {
        let path = PathBuf::from("/repo/sentinel.json");
        LoadedConfig {
            config: SentinelConfig::from_json(json, &path).unwrap(),
            path,
        }
    }

    fn changed(files: &[&str]) -> FakeDetector {
        FakeDetector(files.iter().map(|f| f.to_string()).collect())
    }

    fn run(json: &str, files: &[&str]) -> (RunSummary, FakeExecutor, RecordingReporter) {
        let config = config(json);
        let detector = changed(files);
        let executor = FakeExecutor::default();
        let mut reporter = RecordingReporter::default();

        let summary = RuleEngine::new(&config, &detector, &executor, "/repo")
            .fire(&mut reporter)
            .unwrap();

        (summary, executor, reporter)
    }

    #[test]
    fn test_separate_rule_runs_per_matched_file() {
        let json = r#"{ "rules": [ { "name": "lint", "mask": "\\.ts$", "separate": true,
            "stopOnErrors": false, "commands": ["echo ${filename}"] } ] }"#;

        let (summary, executor, _) = run(json, &["a.ts", "b.js"]);

        assert_eq!(executor.commands(), vec!["echo a.ts"]);
        assert_eq!(summary.statuses.len(), 1);
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_stop_on_errors_halts_rule() {
        let json = r#"{ "rules": [ { "name": "test", "mask": ".*", "separate": false,
            "stopOnErrors": true, "commands": ["cmd-error", "cmd-ok"] } ] }"#;

        let (summary, executor, reporter) = run(json, &["x.txt"]);

        assert_eq!(executor.commands(), vec!["cmd-error"]);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].command, "cmd-error");
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(reporter.errors.unwrap().len(), 1);
    }

    #[test]
    fn test_no_changed_files_runs_nothing() {
        let json = r#"{ "rules": [ { "name": "all", "mask": ".*", "commands": ["cmd-ok"] } ] }"#;

        let (summary, executor, reporter) = run(json, &[]);

        assert!(executor.commands().is_empty());
        assert!(summary.statuses.is_empty());
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(reporter.changed, Some(vec![]));
        assert_eq!(reporter.errors, Some(vec![]));
    }

    #[test]
    fn test_unmatched_rule_records_nothing() {
        let json = r#"{ "rules": [ { "name": "py", "mask": "\\.py$", "commands": ["cmd-error"] } ] }"#;

        let (summary, executor, reporter) = run(json, &["a.rs", "b.toml"]);

        assert!(executor.commands().is_empty());
        assert!(summary.statuses.is_empty());
        assert!(reporter.fired.is_empty());
    }

    #[test]
    fn test_separate_runs_files_times_commands() {
        let json = r#"{ "rules": [ { "name": "fmt", "mask": "\\.rs$", "separate": true,
            "commands": ["fmt ${filename}", "check ${filename}"] } ] }"#;

        let (summary, executor, reporter) = run(json, &["a.rs", "README.md", "b.rs", "c.rs"]);

        assert_eq!(
            executor.commands(),
            vec![
                "fmt a.rs", "check a.rs", "fmt b.rs", "check b.rs", "fmt c.rs", "check c.rs"
            ]
        );
        assert_eq!(summary.statuses.len(), 6);
        assert_eq!(reporter.finished, 6);
        assert_eq!(
            reporter.fired,
            vec![(
                "fmt".to_string(),
                vec!["a.rs".to_string(), "b.rs".to_string(), "c.rs".to_string()]
            )]
        );
    }

    #[test]
    fn test_aggregate_rule_runs_once_with_empty_filename() {
        let json = r#"{ "rules": [ { "name": "build", "mask": ".*",
            "commands": ["build ${filename}", "test"] } ] }"#;

        let (_, executor, _) = run(json, &["a.rs", "b.rs", "c.rs"]);

        assert_eq!(executor.commands(), vec!["build ", "test"]);
    }

    #[test]
    fn test_without_stop_on_errors_all_commands_run() {
        let json = r#"{ "rules": [ { "name": "checks", "mask": ".*", "separate": true,
            "commands": ["first-error ${filename}", "second ${filename}"] } ] }"#;

        let (summary, executor, _) = run(json, &["a", "b"]);

        assert_eq!(executor.commands().len(), 4);
        assert_eq!(summary.errors.len(), 2);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_stop_on_errors_skips_remaining_files() {
        let json = r#"{ "rules": [ { "name": "checks", "mask": ".*", "separate": true,
            "stopOnErrors": true, "commands": ["ok ${filename}", "error ${filename}", "after"] } ] }"#;

        let (summary, executor, _) = run(json, &["a", "b"]);

        assert_eq!(executor.commands(), vec!["ok a", "error a"]);
        // the earlier success is kept
        assert_eq!(summary.statuses.len(), 2);
        assert!(summary.statuses[0].success);
    }

    #[test]
    fn test_stop_on_errors_does_not_affect_later_rules() {
        let json = r#"{ "rules": [
            { "name": "first", "mask": ".*", "stopOnErrors": true, "commands": ["error-1", "skipped"] },
            { "name": "second", "mask": ".*", "commands": ["error-2", "still-runs"] }
        ] }"#;

        let (summary, executor, _) = run(json, &["x"]);

        assert_eq!(executor.commands(), vec!["error-1", "error-2", "still-runs"]);
        assert_eq!(
            summary.errors,
            vec![
                ErrorRecord { command: "error-1".into(), message: "error-1 failed".into() },
                ErrorRecord { command: "error-2".into(), message: "error-2 failed".into() },
            ]
        );
    }

    #[test]
    fn test_rules_run_in_declaration_order() {
        let json = r#"{ "rules": [
            { "name": "b", "mask": "b", "commands": ["second"] },
            { "name": "a", "mask": "a", "commands": ["first"] }
        ] }"#;

        let (_, executor, reporter) = run(json, &["a", "b"]);

        assert_eq!(executor.commands(), vec!["second", "first"]);
        let names: Vec<_> = reporter.fired.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_commands_is_noop() {
        let json = r#"{ "rules": [ { "name": "empty", "mask": ".*", "separate": true, "commands": [] } ] }"#;

        let (summary, executor, reporter) = run(json, &["a", "b"]);

        assert!(executor.commands().is_empty());
        assert!(summary.statuses.is_empty());
        assert_eq!(reporter.fired.len(), 1);
    }

    #[test]
    fn test_commands_run_in_rule_cwd() {
        let json = r#"{ "rules": [
            { "name": "root", "mask": ".*", "commands": ["one"] },
            { "name": "pkg", "mask": ".*", "cwd": "packages/web", "commands": ["two"] }
        ] }"#;

        let (_, executor, _) = run(json, &["x"]);
        let calls = executor.calls.borrow();

        assert_eq!(calls[0].1, PathBuf::from("/repo"));
        assert_eq!(calls[1].1, PathBuf::from("/repo/packages/web"));
    }

    #[test]
    fn test_summary_keeps_changed_files() {
        let json = r#"{ "rules": [] }"#;

        let (summary, _, reporter) = run(json, &["one.rs", "two.rs"]);

        assert_eq!(summary.changed_files, vec!["one.rs", "two.rs"]);
        assert_eq!(reporter.changed.unwrap(), vec!["one.rs", "two.rs"]);
    }

    #[test]
    fn test_detector_failure_is_fatal() {
        let config = config(r#"{ "rules": [ { "name": "a", "mask": ".*", "commands": ["x"] } ] }"#);
        let executor = FakeExecutor::default();
        let mut reporter = RecordingReporter::default();

        let result = RuleEngine::new(&config, &FailingDetector, &executor, "/repo").fire(&mut reporter);

        assert!(result.is_err());
        assert!(executor.commands().is_empty());
        assert!(reporter.changed.is_none());
    }

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code(0), 0);
        assert_eq!(exit_code(1), 1);
        assert_eq!(exit_code(17), 1);
    }
}
