//! Handler functions for `sitedocs config` commands.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::SiteDocsConfig;
use crate::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => {
            let config = SiteDocsConfig::load(config_path)?;
            cmd_config_show(&config)
        }
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            let path = cmd_config_init(target, force)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        ConfigAction::Export { docker_env } => {
            let config = SiteDocsConfig::load(config_path)?;
            cmd_config_export(&config, docker_env)
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match SiteDocsConfig::resolve_config_path(config_path) {
        Some(path) => {
            let marker = if path.exists() { "" } else { " (not found)" };
            println!("{}{marker}", path.display());
            Ok(())
        }
        None => Err(Error::config("could not determine a config file location")),
    }
}

/// Print the effective configuration.
pub fn cmd_config_show(config: &SiteDocsConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Write a default configuration file and return where it went.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = SiteDocsConfig::resolve_config_path(file)
        .ok_or_else(|| Error::config("could not determine a config file location"))?;

    if path.exists() && !force {
        return Err(Error::config(format!(
            "config file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, SiteDocsConfig::default().to_toml_string()?)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(path)
}

/// Print the configuration as environment variables.
pub fn cmd_config_export(config: &SiteDocsConfig, docker_env: bool) -> Result<()> {
    for line in export_lines(config, docker_env) {
        println!("{line}");
    }
    Ok(())
}

fn export_lines(config: &SiteDocsConfig, docker_env: bool) -> Vec<String> {
    config
        .to_env_vars()
        .into_iter()
        .map(|(key, value)| {
            if docker_env {
                format!("{key}={value}")
            } else {
                format!("export {key}=\"{value}\"")
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
