use std::path::PathBuf;

use super::{load_json_or, save_json, StoreError};

/// Persisted set of favorited entry ids, written through on every mutation.
/// Kept insertion-ordered so the document round-trips unchanged.
#[derive(Debug)]
pub struct FavoriteStore {
    path: PathBuf,
    ids: Vec<String>,
}

impl FavoriteStore {
    pub fn load(path: PathBuf) -> Result<Self, StoreError> {
        let ids = load_json_or(&path, Vec::new())?;
        Ok(FavoriteStore { path, ids })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Add an id. Idempotent; returns whether membership changed.
    pub fn add(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.contains(id) {
            return Ok(false);
        }
        self.ids.push(id.to_owned());
        self.save()?;
        Ok(true)
    }

    /// Remove an id. Idempotent; returns whether membership changed.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        if self.ids.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Flip membership; returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Replace the whole set (import path). Duplicates in the incoming list
    /// are collapsed, first occurrence wins.
    pub fn replace(&mut self, ids: Vec<String>) -> Result<(), StoreError> {
        self.ids.clear();
        for id in ids {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        save_json(&self.path, &self.ids)
    }
}
