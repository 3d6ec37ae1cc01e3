//! Console output for git-sentinel
//!
//! [`Output`] is the console [`Reporter`]: the changed-files section, optional
//! per-command lines in verbose mode, and the final errors section.

use console::style;

use crate::config::Rule;
use crate::hooks::{ErrorRecord, ExecutionStatus, Reporter};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: u8,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.is_verbose() {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    /// Print a section header
    pub fn section_header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().cyan());
        }
    }

    /// Print a key-value pair
    pub fn key_value(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<14} {}", style(key).dim(), value);
        }
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        if !self.quiet {
            println!("  - {}", item);
        }
    }
}

impl Reporter for Output {
    fn changed_files(&mut self, files: &[String]) {
        if files.is_empty() {
            self.info("No files changed");
            return;
        }

        self.section_header("Changed files");
        for file in files {
            self.list_item(file);
        }
        if !self.quiet {
            println!();
        }
    }

    fn rule_fired(&mut self, rule: &Rule, files: &[&str]) {
        if self.is_verbose() {
            println!(
                "{} {} {}",
                style("❯").cyan(),
                style(&rule.name).bold(),
                style(format!("({} file(s))", files.len())).dim()
            );
        }
    }

    fn command_finished(&mut self, status: &ExecutionStatus) {
        if !self.is_verbose() {
            return;
        }
        if status.success {
            println!("  {} {}", style("✔").green(), status.command);
        } else {
            println!("  {} {}", style("✖").red(), style(&status.command).red());
        }
        if self.verbose > 1 && !status.message.is_empty() {
            for line in status.message.lines() {
                println!("    {}", style(line).dim());
            }
        }
    }

    fn errors(&mut self, errors: &[ErrorRecord]) {
        if errors.is_empty() {
            if !self.quiet {
                println!();
            }
            self.success("No errors");
            return;
        }

        // The failure report is printed even in quiet mode
        println!("\n{}", style("Errors").bold().red());
        for error in errors {
            println!("{} :", style(&error.command).red());
            if !error.message.is_empty() {
                println!("{}", error.message);
            }
            println!();
        }
    }
}
