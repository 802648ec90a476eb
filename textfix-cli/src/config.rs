//! Configuration file loading for textfix.
//!
//! Discovers and loads `textfix.toml` from the working directory. CLI
//! arguments take precedence over config values; path lists concatenate
//! (config paths first).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "textfix.toml";

/// Top-level configuration from textfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextfixConfig {
    /// Paths to fix, processed before any manifest or CLI-supplied paths.
    pub paths: Vec<String>,

    /// Report settings.
    pub report: ReportConfig,
}

/// Report section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default path for the JSON report artifact (`--report-json` overrides).
    pub json: Option<Utf8PathBuf>,
}

/// Discover the textfix.toml config file in `dir`.
///
/// Returns `None` if no config file is found.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a textfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<TextfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<TextfixConfig> {
    let config: TextfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return defaults if no file is present.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<TextfixConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(TextfixConfig::default()),
    }
}
