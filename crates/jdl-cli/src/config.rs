//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `JDL_` prefix, `__` between sections
//!    (`JDL_DEFAULTS__DATABASE=cassandra`)
//! 3. Config file (`--config` or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use jdl_core::domain::DatabaseType;

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a flag is omitted.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Render settings.
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub database: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix exported files with a generated-by header.
    pub header: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            database: DatabaseType::Sql.as_str().into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { header: true }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location). A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some())
    }

    fn load_from(path: &Path, explicit: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to seed default configuration")?,
        );

        if path.is_file() {
            debug!(path = %path.display(), "Reading config file");
            builder = builder.add_source(File::from(path.to_path_buf()));
        } else if explicit {
            warn!(path = %path.display(), "Config file not found, using defaults");
        }

        let config = builder
            .add_source(
                Environment::with_prefix("JDL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.jdl.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "jdl", "jdl")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".jdl.toml"))
    }

    /// The configured default database family.
    pub fn default_database(&self) -> CliResult<DatabaseType> {
        self.defaults
            .database
            .parse()
            .map_err(|e: jdl_core::domain::DomainError| CliError::ConfigError {
                message: format!(
                    "defaults.database is '{}': {e}",
                    self.defaults.database
                ),
                source: Some(Box::new(e)),
            })
    }
}
