//! Generation configuration loading for schemasync.
//!
//! Reads `config.json` (or a `.toml` file with the same keys) and merges it
//! with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use schemasync_types::GenerationConfig;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// The config file read when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Config file contents. Every key is optional so CLI flags can fill gaps.
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for FileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileConfig")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML; everything else is JSON.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Load and parse a config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<FileConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents, ConfigFormat::from_path(path))
        .with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str, format: ConfigFormat) -> anyhow::Result<FileConfig> {
    let config = match format {
        ConfigFormat::Json => serde_json::from_str(contents).context("invalid JSON")?,
        ConfigFormat::Toml => toml::from_str(contents).context("invalid TOML")?,
    };
    Ok(config)
}

/// Load the explicit config path, or `config.json` in `dir` if present.
///
/// An explicit path that does not exist is an error; a missing default is not.
pub fn resolve_config(explicit: Option<&Utf8Path>, dir: &Utf8Path) -> anyhow::Result<FileConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let default_path: Utf8PathBuf = dir.join(CONFIG_FILE_NAME);
    if default_path.exists() {
        debug!("found config file at {}", default_path);
        load_config(&default_path)
    } else {
        debug!("no config file found at {}", default_path);
        Ok(FileConfig::default())
    }
}

/// Values given on the command line for `generate`.
#[derive(Clone, Default)]
pub struct GenerateOverrides {
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Builder for merging the config file with CLI arguments.
pub struct ConfigMerger {
    config: FileConfig,
}

impl ConfigMerger {
    pub fn new(config: FileConfig) -> Self {
        Self { config }
    }

    /// Merge with generate command CLI arguments.
    ///
    /// Fails if neither source supplies `api_url` or `model`.
    pub fn merge_generate_args(self, cli: GenerateOverrides) -> anyhow::Result<GenerationConfig> {
        let api_url = cli.api_url.or(self.config.api_url).context(
            "missing api_url: set it in the config file or pass --api-url",
        )?;
        let model = cli
            .model
            .or(self.config.model)
            .context("missing model: set it in the config file or pass --model")?;

        let mut merged = GenerationConfig::new(api_url, model);
        if let Some(temperature) = cli.temperature.or(self.config.temperature) {
            merged.temperature = temperature;
        }
        merged.api_key = cli.api_key.or(self.config.api_key);
        merged.timeout_secs = cli.timeout_secs.or(self.config.timeout_secs);
        Ok(merged)
    }
}
