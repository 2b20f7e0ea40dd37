//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MODELGEN_<SECTION>__<KEY>`, e.g.
//!    `MODELGEN_NAMING__EXTENSION=rs`
//! 3. `.modelgen.toml` in the current directory
//! 4. The user config file (or the file given with `--config`, which then
//!    replaces 3 and 4 and must exist)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Output file naming.
    pub naming: NamingConfig,
    /// Template writer settings.
    pub writer: WriterConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Extension appended to the snake_case model name.
    pub extension: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            extension: "py".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Emit writer phase messages even without `-v`.
    pub verbose: bool,
}

impl AppConfig {
    pub const ENV_PREFIX: &'static str = "MODELGEN";
    pub const LOCAL_FILE: &'static str = ".modelgen.toml";

    /// Load configuration, layering files and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to encode default config")?,
        );

        let toml_file = |path: &Path, required: bool| {
            File::from(path).format(FileFormat::Toml).required(required)
        };

        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path, true)),
            None => builder
                .add_source(toml_file(&Self::config_path(), false))
                .add_source(toml_file(Path::new(Self::LOCAL_FILE), false)),
        };

        let merged = builder
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        merged
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.modelgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "modelgen", "modelgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(Self::LOCAL_FILE))
    }
}
