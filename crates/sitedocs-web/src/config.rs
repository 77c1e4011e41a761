//! Configuration for the sitedocs server.
//!
//! Loaded from a TOML file; every key is optional and falls back to its
//! default. The file is found by, in order: an explicit path, the
//! `SITEDOCS_CONFIG` environment variable, then
//! `<config dir>/sitedocs/config.toml`.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [intake]
//! delay_ms = 1000
//! max_upload_bytes = 268435456
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "SITEDOCS_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDocsConfig {
    /// Listener settings
    pub server: ServerConfig,

    /// Document intake settings
    pub intake: IntakeConfig,

    /// Log output settings
    pub logging: LoggingConfig,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind; 0 picks a free port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Document intake settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Simulated upload latency in milliseconds
    pub delay_ms: u64,

    /// Largest accepted upload request body
    pub max_upload_bytes: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            max_upload_bytes: 256 * 1024 * 1024,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SiteDocsConfig {
    /// Default config file location, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sitedocs").join("config.toml"))
    }

    /// Resolve which config file to use, consulting the environment.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        let from_env = std::env::var(CONFIG_ENV_VAR).ok();
        Self::resolve_config_path_with(explicit, from_env.as_deref())
    }

    /// Resolve which config file to use, given the environment value.
    pub fn resolve_config_path_with(
        explicit: Option<&str>,
        from_env: Option<&str>,
    ) -> Option<PathBuf> {
        explicit
            .or(from_env.filter(|v| !v.is_empty()))
            .map(PathBuf::from)
            .or_else(Self::default_config_path)
    }

    /// Load configuration.
    ///
    /// A missing file is an error when it was named explicitly or via the
    /// environment; a missing default file yields the defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_ENV_VAR).ok();
        Self::load_with(explicit, from_env.as_deref())
    }

    /// [`load`](Self::load) with the environment value passed in.
    pub fn load_with(explicit: Option<&str>, from_env: Option<&str>) -> Result<Self> {
        let named = explicit.is_some() || from_env.is_some_and(|v| !v.is_empty());
        let Some(path) = Self::resolve_config_path_with(explicit, from_env) else {
            return Ok(Self::default());
        };

        if !path.exists() {
            if named {
                return Err(Error::config(format!(
                    "config file does not exist: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Load and validate a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config("server.host must not be empty"));
        }
        if self.intake.max_upload_bytes == 0 {
            return Err(Error::config("intake.max_upload_bytes must be positive"));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::config("logging.level must not be empty"));
        }
        Ok(())
    }

    /// Simulated upload latency.
    pub fn intake_delay(&self) -> Duration {
        Duration::from_millis(self.intake.delay_ms)
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Environment-variable view of the config, one `KEY=value` per entry.
    pub fn to_env_vars(&self) -> Vec<(String, String)> {
        vec![
            ("SITEDOCS_SERVER_HOST".to_string(), self.server.host.clone()),
            ("SITEDOCS_SERVER_PORT".to_string(), self.server.port.to_string()),
            (
                "SITEDOCS_INTAKE_DELAY_MS".to_string(),
                self.intake.delay_ms.to_string(),
            ),
            (
                "SITEDOCS_INTAKE_MAX_UPLOAD_BYTES".to_string(),
                self.intake.max_upload_bytes.to_string(),
            ),
            ("SITEDOCS_LOGGING_LEVEL".to_string(), self.logging.level.clone()),
        ]
    }
}
