//! Configuration management for git-sentinel
//!
//! The configuration is a single `sentinel.json` file holding an ordered list
//! of rules. It is found by walking up from the installed executable (and then
//! from the working directory), parsed once, and never modified afterwards.

use crate::error::{Result, SentinelError};
use crate::rules::Mask;
use crate::shared::find_from_origins;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file searched for in ancestor directories
pub const CONFIG_FILE_NAME: &str = "sentinel.json";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct SentinelConfig {
    /// Rules, evaluated in declaration order
    pub rules: Vec<Rule>,
}

/// A named mask plus the commands to run when it matches
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Display name
    pub name: String,

    /// Regex selecting the changed paths this rule applies to
    pub mask: Mask,

    /// Run the commands once per matched file instead of once in total
    #[serde(default)]
    pub separate: bool,

    /// Abandon the rest of this rule after the first failed command
    #[serde(default)]
    pub stop_on_errors: bool,

    /// Directory the commands run in, relative to the configuration file
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    /// Command templates; `${filename}` is replaced by the bound file
    #[serde(default)]
    pub commands: Vec<String>,
}

/// A parsed configuration together with the file it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: SentinelConfig,
}

impl LoadedConfig {
    /// Directory holding the configuration file
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl SentinelConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SentinelError::MalformedConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SentinelError::MalformedConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let config = Self::from_json(&content, path)?;
        tracing::debug!(
            "Loaded {} rule(s) from {}",
            config.rules.len(),
            path.display()
        );
        Ok(config)
    }

    /// Locate and load the configuration.
    ///
    /// An explicit path is used as-is; otherwise each origin is searched
    /// upwards in turn. Fails with [`SentinelError::ConfigNotFound`] when no
    /// candidate exists.
    pub fn locate(explicit: Option<&Path>, origins: &[PathBuf]) -> Result<LoadedConfig> {
        let path = match explicit {
            Some(path) if path.is_file() => path.to_path_buf(),
            Some(path) => {
                tracing::debug!("Explicit config {} does not exist", path.display());
                return Err(SentinelError::ConfigNotFound);
            }
            None => find_from_origins(origins, CONFIG_FILE_NAME)
                .ok_or(SentinelError::ConfigNotFound)?,
        };

        let config = Self::load_from_file(&path)?;
        Ok(LoadedConfig { path, config })
    }
}

impl Rule {
    /// Directory this rule's commands run in.
    ///
    /// `default_dir` is used when the rule sets no `cwd`; a relative `cwd`
    /// is resolved against `base_dir`.
    pub fn working_dir(&self, base_dir: &Path, default_dir: &Path) -> PathBuf {
        match &self.cwd {
            Some(cwd) if cwd.is_absolute() => cwd.clone(),
            Some(cwd) => base_dir.join(cwd),
            None => default_dir.to_path_buf(),
        }
    }
}
