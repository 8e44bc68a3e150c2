use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::media::deriver;
use crate::media::entry::VideoEntry;
use crate::media::probe::MediaProbe;
use crate::store::favorites::FavoriteStore;

/// Claim on a future catalog snapshot. Only the most recently issued ticket
/// may commit; an overtaken build must never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Snapshot installed wholesale.
    Installed { entries: usize },
    /// A newer build was issued after this ticket; its result is discarded.
    Stale,
}

/// The in-memory collection of entries for the currently loaded source
/// (folder, drop batch, or folder playlist). Replaced wholesale on every
/// (re)build; volatile apart from the sidecar stores.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<VideoEntry>,
    issued: u64,
}

impl Catalog {
    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&VideoEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start a new build generation. Issuing a ticket immediately marks any
    /// still-in-flight older build as stale.
    pub fn begin_build(&mut self) -> BuildTicket {
        self.issued += 1;
        BuildTicket {
            generation: self.issued,
        }
    }

    /// Install a finished build. Entries get their favorite mirror set from
    /// the store before becoming visible — partial catalogs are never
    /// observable.
    pub fn commit(
        &mut self,
        ticket: BuildTicket,
        mut entries: Vec<VideoEntry>,
        favorites: &FavoriteStore,
    ) -> CommitOutcome {
        if ticket.generation != self.issued {
            tracing::debug!(
                "Discarding stale build (generation {} superseded by {})",
                ticket.generation,
                self.issued
            );
            return CommitOutcome::Stale;
        }
        for entry in &mut entries {
            entry.is_favorite = favorites.contains(&entry.id);
        }
        let count = entries.len();
        self.entries = entries;
        CommitOutcome::Installed { entries: count }
    }

    /// Re-derive every entry's favorite mirror from the store.
    pub fn sync_favorites(&mut self, favorites: &FavoriteStore) {
        for entry in &mut self.entries {
            entry.is_favorite = favorites.contains(&entry.id);
        }
    }

    /// Flip one entry's mirror. The store side of the same logical
    /// operation is the caller's responsibility.
    pub(crate) fn set_favorite(&mut self, id: &str, state: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.is_favorite = state;
        }
    }

    /// Drop matching entries from the snapshot. Sidecar state for the
    /// removed ids is untouched. Returns how many were removed.
    pub fn remove_entries(&mut self, ids: &[String]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !ids.contains(&e.id));
        before - self.entries.len()
    }
}

/// Derive entries for a batch of files. Per-file probes fan out on the
/// blocking pool; the result exists only once every probe has settled, in
/// input order. A single failed file degrades, it never aborts the batch.
pub async fn build_entries(files: Vec<PathBuf>, probe: Arc<dyn MediaProbe>) -> Vec<VideoEntry> {
    let start = Instant::now();

    let handles: Vec<_> = files
        .into_iter()
        .map(|path| {
            let probe = Arc::clone(&probe);
            let task_path = path.clone();
            (
                path,
                tokio::task::spawn_blocking(move || deriver::derive(&task_path, probe.as_ref())),
            )
        })
        .collect();

    let mut entries = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        match handle.await {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                // a panicked probe still must not drop the file
                tracing::warn!("Probe task for {} failed: {}", path.display(), e);
                entries.push(deriver::degraded(&path));
            }
        }
    }

    tracing::info!(
        "Derived {} entries in {:.1}s",
        entries.len(),
        start.elapsed().as_secs_f64()
    );
    entries
}
