//! Shell command execution
//!
//! Every command a rule fires goes through an [`Executor`]. The engine only
//! sees the returned [`ExecutionStatus`]; how the command runs (shell, stdio
//! wiring, a future timeout) stays behind the trait.

use std::path::Path;
use std::process::{Command, Stdio};

/// Result of one command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStatus {
    /// Command line actually executed, after placeholder expansion
    pub command: String,
    pub success: bool,
    /// Trimmed stdout on success, trimmed error output on failure
    pub message: String,
}

impl ExecutionStatus {
    pub fn succeeded(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            success: false,
            message: message.into(),
        }
    }
}

/// Runs one command to completion
pub trait Executor {
    fn run(&self, command: &str, cwd: &Path) -> ExecutionStatus;
}

/// What happens to a command's stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StderrMode {
    /// Capture it and use it as the failure message
    #[default]
    Capture,
    /// Discard it; failures report stdout instead
    Discard,
}

/// Executes commands through the platform shell, blocking until they exit.
///
/// There is no timeout: a command that never exits stalls the hook.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    stderr: StderrMode,
}

impl ShellExecutor {
    pub fn new(stderr: StderrMode) -> Self {
        Self { stderr }
    }

    fn shell_command(command: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl Executor for ShellExecutor {
    fn run(&self, command: &str, cwd: &Path) -> ExecutionStatus {
        tracing::info!("Running `{}` in {}", command, cwd.display());

        let stderr = match self.stderr {
            StderrMode::Capture => Stdio::piped(),
            StderrMode::Discard => Stdio::null(),
        };

        let output = Self::shell_command(command)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Failed to spawn `{}`: {}", command, e);
                return ExecutionStatus::failed(command, format!("failed to spawn: {e}"));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if output.status.success() {
            return ExecutionStatus::succeeded(command, stdout);
        }

        tracing::debug!("`{}` exited with {}", command, output.status);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() { stdout } else { stderr };
        ExecutionStatus::failed(command, message)
    }
}
