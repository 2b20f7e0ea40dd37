//! `modelgen config`: inspect the effective configuration.

use clap::ValueEnum;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.payload(&value)?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                let value = serde_json::to_value(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                output.json(&value)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.payload(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.payload(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config
            .output
            .format
            .to_possible_value()
            .map(|v| v.get_name().to_owned())
            .unwrap_or_default()),
        "naming.extension" => Ok(config.naming.extension.clone()),
        "writer.verbose" => Ok(config.writer.verbose.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
