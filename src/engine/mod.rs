//! The library engine proper: one process-scoped instance owning the
//! catalog, the three sidecar stores, and the transient view state. All
//! mutation flows through its methods; the presentation layer re-queries
//! after every command.

pub mod batch;
pub mod catalog;
pub mod playlist;
pub mod query;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::media::entry::VideoEntry;
use crate::media::probe::{HeaderProbe, MediaProbe};
use crate::store::export::{self, ImportError};
use crate::store::favorites::FavoriteStore;
use crate::store::playlists::{Playlist, PlaylistError, PlaylistStore};
use crate::store::tags::TagStore;
use crate::store::{StoreError, StorePaths};

use batch::{BatchError, Selection};
use catalog::{Catalog, CommitOutcome};
use playlist::PlaylistAction;
use query::QuerySpec;

pub struct Engine {
    catalog: Catalog,
    favorites: FavoriteStore,
    tags: TagStore,
    playlists: PlaylistStore,
    selection: Selection,
    active_playlist: Option<Uuid>,
    current: Option<String>,
    probe: Arc<dyn MediaProbe>,
}

impl Engine {
    /// Load the persisted sidecar state (missing documents are empty
    /// stores) and start with an empty catalog.
    pub fn init(paths: StorePaths) -> Result<Engine, StoreError> {
        Ok(Engine {
            catalog: Catalog::default(),
            favorites: FavoriteStore::load(paths.favorites)?,
            tags: TagStore::load(paths.tags)?,
            playlists: PlaylistStore::load(paths.playlists, paths.handles)?,
            selection: Selection::default(),
            active_playlist: None,
            current: None,
            probe: Arc::new(HeaderProbe),
        })
    }

    /// Swap in a different extraction collaborator, e.g. one that decodes
    /// poster frames.
    pub fn with_probe(mut self, probe: Arc<dyn MediaProbe>) -> Engine {
        self.probe = probe;
        self
    }

    // ── Catalog ───────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn entries(&self) -> &[VideoEntry] {
        self.catalog.entries()
    }

    /// Replace the catalog with the video files directly inside `folder`.
    pub async fn load_folder(&mut self, folder: &Path) -> std::io::Result<CommitOutcome> {
        let files = playlist::enumerate_folder(folder)?;
        Ok(self.build_from_files(files).await)
    }

    /// Replace the catalog from an explicit file batch (the drop path).
    /// A build superseded by a newer one while probing commits as `Stale`
    /// and leaves the newer snapshot in place.
    pub async fn build_from_files(&mut self, files: Vec<PathBuf>) -> CommitOutcome {
        let ticket = self.catalog.begin_build();
        let entries = catalog::build_entries(files, Arc::clone(&self.probe)).await;
        self.catalog.commit(ticket, entries, &self.favorites)
    }

    /// Flip one entry's favorite state in the store and its catalog mirror
    /// as a single logical operation. Returns the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, StoreError> {
        let state = self.favorites.toggle(id)?;
        self.catalog.set_favorite(id, state);
        Ok(state)
    }

    pub fn favorites(&self) -> &FavoriteStore {
        &self.favorites
    }

    // ── Query ─────────────────────────────────────────────────────────────

    /// Project the catalog through a spec. The active manual playlist, if
    /// any, is folded in as an additional membership predicate.
    pub fn query(&self, spec: &QuerySpec) -> Vec<&VideoEntry> {
        let mut effective = spec.clone();
        if effective.playlist_ids.is_none() {
            effective.playlist_ids = self
                .active_playlist
                .and_then(|id| self.playlists.get(id))
                .and_then(Playlist::manual_ids)
                .map(<[String]>::to_vec);
        }
        query::project(self.catalog.entries(), &effective)
    }

    // ── Playlists ─────────────────────────────────────────────────────────

    pub fn playlists(&self) -> &[Playlist] {
        self.playlists.list()
    }

    pub fn create_manual_playlist(
        &mut self,
        name: &str,
        video_ids: Vec<String>,
    ) -> Result<Uuid, PlaylistError> {
        self.playlists.create_manual(name, video_ids)
    }

    pub fn create_folder_playlist(
        &mut self,
        name: &str,
        folder: &Path,
    ) -> Result<Uuid, PlaylistError> {
        self.playlists.create_folder(name, folder)
    }

    pub fn delete_playlist(&mut self, id: Uuid) -> Result<(), PlaylistError> {
        self.playlists.delete(id)?;
        if self.active_playlist == Some(id) {
            self.active_playlist = None;
        }
        Ok(())
    }

    /// Load a playlist: a manual one activates the id filter, a
    /// folder-backed one rebuilds the catalog from its directory. On any
    /// error both the catalog and the active filter are untouched.
    pub async fn load_playlist(&mut self, id: Uuid) -> Result<(), PlaylistError> {
        match playlist::resolve(&self.playlists, id)? {
            PlaylistAction::ActivateFilter(_) => {
                self.active_playlist = Some(id);
                Ok(())
            }
            PlaylistAction::ReplaceCatalog(files) => {
                self.active_playlist = None;
                self.build_from_files(files).await;
                Ok(())
            }
        }
    }

    /// Return to "no active playlist filter". The catalog is untouched.
    pub fn clear_playlist_filter(&mut self) {
        self.active_playlist = None;
    }

    pub fn active_playlist(&self) -> Option<Uuid> {
        self.active_playlist
    }

    // ── Tags ──────────────────────────────────────────────────────────────

    pub fn add_tags(&mut self, id: &str, tags: &[String]) -> Result<usize, StoreError> {
        self.tags.add_tags(id, tags)
    }

    pub fn tags_for(&self, id: &str) -> &[String] {
        self.tags.tags_for(id)
    }

    pub fn popular_tags(&self, limit: usize) -> Vec<(String, usize)> {
        self.tags.popular_tags(limit)
    }

    // ── Selection & batch operations ──────────────────────────────────────

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn toggle_selected(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Entering or leaving batch mode always drops the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn favorite_selected(&mut self) -> Result<usize, BatchError> {
        batch::add_favorites(&self.selection, &mut self.catalog, &mut self.favorites)
    }

    pub fn unfavorite_selected(&mut self) -> Result<usize, BatchError> {
        batch::remove_favorites(&self.selection, &mut self.catalog, &mut self.favorites)
    }

    pub fn tag_selected(&mut self, tags: &[String]) -> Result<usize, BatchError> {
        batch::add_tags(&self.selection, &mut self.tags, tags)
    }

    pub fn delete_selected(&mut self) -> Result<usize, BatchError> {
        batch::delete_selected(&mut self.selection, &mut self.catalog)
    }

    // ── Current entry (playback reference) ────────────────────────────────

    /// Point the playback collaborator at an entry. Ids without a catalog
    /// entry clear the reference.
    pub fn set_current(&mut self, id: &str) {
        self.current = self.catalog.get(id).map(|e| e.id.clone());
    }

    pub fn current_entry(&self) -> Option<&VideoEntry> {
        self.current.as_deref().and_then(|id| self.catalog.get(id))
    }

    // ── Export / import ───────────────────────────────────────────────────

    pub fn export_json(&self) -> Result<String, StoreError> {
        export::export_json(&self.favorites, &self.playlists, &self.tags)
    }

    /// Import a backup document. Stores named in the document are replaced
    /// wholesale; malformed JSON leaves everything untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        export::import_json(
            json,
            &mut self.favorites,
            &mut self.playlists,
            &mut self.tags,
        )?;
        self.catalog.sync_favorites(&self.favorites);
        Ok(())
    }
}
