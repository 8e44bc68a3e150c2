use std::collections::HashSet;

use crate::engine::catalog::Catalog;
use crate::store::favorites::FavoriteStore;
use crate::store::tags::TagStore;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("no entries selected")]
    EmptySelection,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Transient id set for batch mode. Cleared whenever the mode is toggled;
/// never persisted.
#[derive(Debug, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    /// Flip an id in or out; returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in a stable order, so store writes are deterministic.
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

/// Favorite every selected entry. Idempotent set-union; re-syncs the
/// catalog mirrors. No-op on an empty selection. Returns how many entries
/// actually changed.
pub fn add_favorites(
    selection: &Selection,
    catalog: &mut Catalog,
    favorites: &mut FavoriteStore,
) -> Result<usize, BatchError> {
    let mut changed = 0;
    for id in selection.sorted_ids() {
        if favorites.add(&id)? {
            changed += 1;
        }
    }
    catalog.sync_favorites(favorites);
    Ok(changed)
}

/// Unfavorite every selected entry. Idempotent set-difference; re-syncs the
/// catalog mirrors. No-op on an empty selection.
pub fn remove_favorites(
    selection: &Selection,
    catalog: &mut Catalog,
    favorites: &mut FavoriteStore,
) -> Result<usize, BatchError> {
    let mut changed = 0;
    for id in selection.sorted_ids() {
        if favorites.remove(&id)? {
            changed += 1;
        }
    }
    catalog.sync_favorites(favorites);
    Ok(changed)
}

/// Apply a tag batch to every selected entry. Returns the total number of
/// tags added across the selection.
pub fn add_tags(
    selection: &Selection,
    tags_store: &mut TagStore,
    tags: &[String],
) -> Result<usize, BatchError> {
    let mut added = 0;
    for id in selection.sorted_ids() {
        added += tags_store.add_tags(&id, tags)?;
    }
    Ok(added)
}

/// Remove the selected entries from the catalog only — their favorite and
/// tag records stay behind for when the same files are reloaded. Unlike the
/// other batch operations, an empty selection is refused rather than
/// silently succeeding.
pub fn delete_selected(
    selection: &mut Selection,
    catalog: &mut Catalog,
) -> Result<usize, BatchError> {
    if selection.is_empty() {
        return Err(BatchError::EmptySelection);
    }
    let ids = selection.sorted_ids();
    let removed = catalog.remove_entries(&ids);
    selection.clear();
    Ok(removed)
}
