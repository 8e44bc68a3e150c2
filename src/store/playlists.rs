use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{load_json_or, save_json, StoreError};

/// A saved playlist. The id is synthetic and stable — every load/delete
/// reference goes through it, never through a name or a positional index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub kind: PlaylistKind,
}

/// Manual playlists carry an explicit id list; folder-backed playlists are
/// re-enumerated from their directory at load time. The directory handle
/// itself is not serialized here — see the handle document.
///
/// Folder must come first: untagged matching tries variants in order, and
/// Manual's defaulted id list would otherwise swallow folder records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaylistKind {
    Folder {
        #[serde(rename = "folderName")]
        folder_name: String,
        #[serde(rename = "savedAt")]
        saved_at_ms: i64,
    },
    Manual {
        #[serde(rename = "videoIds", default)]
        video_ids: Vec<String>,
    },
}

impl Playlist {
    /// The explicit id list, for manual playlists only.
    pub fn manual_ids(&self) -> Option<&[String]> {
        match &self.kind {
            PlaylistKind::Manual { video_ids } => Some(video_ids),
            PlaylistKind::Folder { .. } => None,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, PlaylistKind::Folder { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error("playlist name must not be empty")]
    EmptyName,
    #[error("a playlist named \"{0}\" already exists")]
    DuplicateName(String),
    #[error("playlist not found")]
    NotFound,
    #[error("no folder handle saved for playlist \"{0}\" — re-select the folder")]
    MissingHandle(String),
    #[error("folder access denied for playlist \"{0}\": {1}")]
    PermissionDenied(String, #[source] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Persisted playlist collection plus the separate folder-handle document.
/// Handles (directory paths) are capabilities: they are stored keyed by
/// playlist name and rejoined with the metadata on load.
#[derive(Debug)]
pub struct PlaylistStore {
    path: PathBuf,
    handles_path: PathBuf,
    playlists: Vec<Playlist>,
    handles: BTreeMap<String, PathBuf>,
}

impl PlaylistStore {
    pub fn load(path: PathBuf, handles_path: PathBuf) -> Result<Self, StoreError> {
        let playlists = load_json_or(&path, Vec::new())?;
        let handles = load_json_or(&handles_path, BTreeMap::new())?;
        Ok(PlaylistStore {
            path,
            handles_path,
            playlists,
            handles,
        })
    }

    pub fn list(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn get(&self, id: Uuid) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub fn handle_for(&self, name: &str) -> Option<&Path> {
        self.handles.get(name).map(PathBuf::as_path)
    }

    pub fn create_manual(&mut self, name: &str, video_ids: Vec<String>) -> Result<Uuid, PlaylistError> {
        let name = self.validate_name(name)?;
        let id = Uuid::new_v4();
        self.playlists.push(Playlist {
            id,
            name,
            kind: PlaylistKind::Manual { video_ids },
        });
        self.save()?;
        Ok(id)
    }

    pub fn create_folder(&mut self, name: &str, folder: &Path) -> Result<Uuid, PlaylistError> {
        let name = self.validate_name(name)?;
        let folder_name = folder
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .unwrap_or_else(|| folder.to_string_lossy().into_owned());
        let id = Uuid::new_v4();
        self.playlists.push(Playlist {
            id,
            name: name.clone(),
            kind: PlaylistKind::Folder {
                folder_name,
                saved_at_ms: chrono::Utc::now().timestamp_millis(),
            },
        });
        self.handles.insert(name, folder.to_path_buf());
        self.save()?;
        self.save_handles()?;
        Ok(id)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Playlist, PlaylistError> {
        let index = self
            .playlists
            .iter()
            .position(|p| p.id == id)
            .ok_or(PlaylistError::NotFound)?;
        let removed = self.playlists.remove(index);
        if removed.is_folder() && self.handles.remove(&removed.name).is_some() {
            self.save_handles()?;
        }
        self.save()?;
        Ok(removed)
    }

    /// Replace all playlist metadata (import path). Handles are left as-is;
    /// folder playlists rejoin whatever handle still matches their name.
    pub fn replace(&mut self, playlists: Vec<Playlist>) -> Result<(), StoreError> {
        self.playlists = playlists;
        self.save()
    }

    fn validate_name(&self, name: &str) -> Result<String, PlaylistError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlaylistError::EmptyName);
        }
        if self.playlists.iter().any(|p| p.name == name) {
            return Err(PlaylistError::DuplicateName(name.to_owned()));
        }
        Ok(name.to_owned())
    }

    fn save(&self) -> Result<(), StoreError> {
        save_json(&self.path, &self.playlists)
    }

    fn save_handles(&self) -> Result<(), StoreError> {
        save_json(&self.handles_path, &self.handles)
    }
}
