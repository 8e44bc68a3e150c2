use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::engine::query::SortKey;

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("vtape"))
        .unwrap_or_else(|| PathBuf::from(".vtape"))
}

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub sort: Option<String>,
}

#[derive(Debug)]
pub struct Config {
    /// Where the persisted sidecar documents live.
    pub data_dir: PathBuf,
    pub sort: SortKey,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            data_dir: args
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or_else(default_data_dir),
            sort: args
                .sort
                .as_deref()
                .or(file.sort.as_deref())
                .map(SortKey::from_name)
                .unwrap_or_default(),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("vtape.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("vtape").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
