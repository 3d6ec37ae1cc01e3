use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::Output;
use crate::config::SentinelConfig;
use crate::shared::search_origins;

/// Load the configuration (compiling every mask) and summarize its rules
pub fn execute(config: Option<&Path>, output: &Output) -> Result<ExitCode> {
    let loaded = SentinelConfig::locate(config, &search_origins())?;

    output.info(&format!("Configuration: {}", loaded.path.display()));

    if loaded.config.rules.is_empty() {
        output.warning("No rules configured; every commit passes");
    }

    for rule in &loaded.config.rules {
        output.section_header(&rule.name);
        output.key_value("mask", rule.mask.as_str());
        output.key_value("separate", &rule.separate.to_string());
        output.key_value("stopOnErrors", &rule.stop_on_errors.to_string());
        if let Some(cwd) = &rule.cwd {
            output.key_value("cwd", &cwd.display().to_string());
        }
        if rule.commands.is_empty() {
            output.key_value("commands", "(none)");
        }
        for command in &rule.commands {
            output.list_item(command);
        }
    }

    output.success(&format!(
        "Configuration is valid ({} rule(s))",
        loaded.config.rules.len()
    ));
    Ok(ExitCode::SUCCESS)
}
