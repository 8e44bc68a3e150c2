use std::path::{Path, PathBuf};

use uuid::Uuid;
use walkdir::WalkDir;

use crate::media::formats::is_video_path;
use crate::store::playlists::{PlaylistError, PlaylistKind, PlaylistStore};

/// What loading a playlist means for the catalog.
#[derive(Debug)]
pub enum PlaylistAction {
    /// Folder-backed: rebuild the catalog from these files, discarding the
    /// current one.
    ReplaceCatalog(Vec<PathBuf>),
    /// Manual: filter the current catalog to these ids. Catalog untouched.
    ActivateFilter(Vec<String>),
}

/// Resolve a playlist reference into its catalog action. Folder playlists
/// get their directory capability checked before any enumeration; denial
/// aborts with the catalog untouched.
pub fn resolve(store: &PlaylistStore, id: Uuid) -> Result<PlaylistAction, PlaylistError> {
    let playlist = store.get(id).ok_or(PlaylistError::NotFound)?;
    match &playlist.kind {
        PlaylistKind::Manual { video_ids } => {
            Ok(PlaylistAction::ActivateFilter(video_ids.clone()))
        }
        PlaylistKind::Folder { .. } => {
            let folder = store
                .handle_for(&playlist.name)
                .ok_or_else(|| PlaylistError::MissingHandle(playlist.name.clone()))?;
            let files = enumerate_folder(folder)
                .map_err(|e| PlaylistError::PermissionDenied(playlist.name.clone(), e))?;
            Ok(PlaylistAction::ReplaceCatalog(files))
        }
    }
}

/// List the video files directly inside `folder` — one directory level only.
/// Sub-directories and non-whitelisted extensions are skipped silently;
/// individual unreadable entries log a warning and are skipped.
pub fn enumerate_folder(folder: &Path) -> std::io::Result<Vec<PathBuf>> {
    // capability probe: a revoked, moved, or deleted folder fails here,
    // before any catalog work starts
    std::fs::read_dir(folder)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        match entry {
            Err(e) => {
                tracing::warn!("Cannot access entry: {}", e);
            }
            Ok(entry) if entry.file_type().is_file() && is_video_path(entry.path()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {} // sub-directories and non-video files
        }
    }
    Ok(files)
}
