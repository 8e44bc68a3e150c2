use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub mod export;
pub mod favorites;
pub mod playlists;
pub mod tags;

/// Locations of the persisted sidecar documents inside the data directory.
/// Folder handles live in their own document — they are capabilities keyed
/// by playlist name, not part of the JSON playlist metadata.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub favorites: PathBuf,
    pub playlists: PathBuf,
    pub tags: PathBuf,
    pub handles: PathBuf,
}

impl StorePaths {
    pub fn in_dir(dir: &Path) -> Self {
        StorePaths {
            favorites: dir.join("favorites.json"),
            playlists: dir.join("playlists.json"),
            tags: dir.join("videoTags.json"),
            handles: dir.join("folderHandles.json"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read store document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse store document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read a JSON document, treating a missing file as the provided default.
pub(crate) fn load_json_or<T: DeserializeOwned>(path: &Path, fallback: T) -> Result<T, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(fallback),
        Err(e) => Err(e.into()),
    }
}

/// Write a JSON document, creating the parent directory on first save.
pub(crate) fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
