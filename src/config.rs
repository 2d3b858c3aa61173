use crate::domain::{ClockStyle, DeadlineFilter, WeekRule};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Filter selected at startup
    pub default_filter: DeadlineFilter,
    pub week_rule: WeekRule,
    pub clock: ClockStyle,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_filter: DeadlineFilter::All,
            week_rule: WeekRule::Legacy,
            clock: ClockStyle::Standard,
            log_level: "info".to_string(),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => load_config(path),
            None => load_config(config_file()?),
        }
    }
}

/// `<config dir>/todue/config.json`
pub fn config_file() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(dir.join("todue").join("config.json"))
}

/// Load settings, falling back to defaults when the file does not exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Write a config file with default settings. Refuses to overwrite.
pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }

    let json = serde_json::to_string_pretty(&AppConfig::default())?;
    atomic_write(path, &json)?;
    Ok(path.to_path_buf())
}

/// Write via a temp file in the same directory, then rename into place
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
