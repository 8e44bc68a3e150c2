use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::favorites::FavoriteStore;
use super::playlists::{Playlist, PlaylistStore};
use super::tags::TagStore;
use super::StoreError;

/// User-facing backup document. Absent keys are skipped on export and left
/// untouched on import. Folder handles are never part of this document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LibraryExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlists: Option<Vec<Playlist>>,
    #[serde(rename = "videoTags", skip_serializing_if = "Option::is_none")]
    pub video_tags: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("malformed library document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn export_document(
    favorites: &FavoriteStore,
    playlists: &PlaylistStore,
    tags: &TagStore,
) -> LibraryExport {
    LibraryExport {
        favorites: Some(favorites.ids().to_vec()),
        playlists: Some(playlists.list().to_vec()),
        video_tags: Some(tags.all().clone()),
    }
}

pub fn export_json(
    favorites: &FavoriteStore,
    playlists: &PlaylistStore,
    tags: &TagStore,
) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(&export_document(
        favorites, playlists, tags,
    ))?)
}

/// Import a backup document: each store present in the document is replaced
/// wholesale, absent stores are untouched. The whole document is parsed
/// before any store is mutated, so malformed input changes nothing.
pub fn import_json(
    json: &str,
    favorites: &mut FavoriteStore,
    playlists: &mut PlaylistStore,
    tags: &mut TagStore,
) -> Result<(), ImportError> {
    let doc: LibraryExport = serde_json::from_str(json)?;

    if let Some(ids) = doc.favorites {
        favorites.replace(ids)?;
    }
    if let Some(lists) = doc.playlists {
        playlists.replace(lists)?;
    }
    if let Some(map) = doc.video_tags {
        tags.replace(map)?;
    }
    Ok(())
}
