use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level escala configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EscalaConfig {
    /// Target year when the CLI does not supply one.
    #[serde(default)]
    pub year: Option<i32>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    #[serde(default = "default_roster")]
    pub roster: PathBuf,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_roster() -> PathBuf {
    PathBuf::from("roster.toml")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl EscalaConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
    }
}
