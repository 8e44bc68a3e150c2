use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{load_json_or, save_json, StoreError};

/// Persisted mapping from entry id to its ordered-unique tag list.
/// Tags for ids no longer in the catalog are retained — they come back when
/// the same file is reloaded.
#[derive(Debug)]
pub struct TagStore {
    path: PathBuf,
    tags: BTreeMap<String, Vec<String>>,
}

impl TagStore {
    pub fn load(path: PathBuf) -> Result<Self, StoreError> {
        let tags = load_json_or(&path, BTreeMap::new())?;
        Ok(TagStore { path, tags })
    }

    /// Merge tags into an id's list: trimmed, empties dropped, duplicates
    /// rejected case-sensitively, insertion order kept. Returns how many
    /// tags were actually added.
    pub fn add_tags(&mut self, id: &str, tags: &[String]) -> Result<usize, StoreError> {
        let cleaned: Vec<&str> = tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if cleaned.is_empty() {
            return Ok(0);
        }

        let list = self.tags.entry(id.to_owned()).or_default();
        let mut added = 0;
        for tag in cleaned {
            if !list.iter().any(|t| t == tag) {
                list.push(tag.to_owned());
                added += 1;
            }
        }

        if added > 0 {
            self.save()?;
        }
        Ok(added)
    }

    pub fn tags_for(&self, id: &str) -> &[String] {
        self.tags.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Global tag ranking: descending occurrence count across all ids, ties
    /// kept in the order first encountered while counting.
    pub fn popular_tags(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for tags in self.tags.values() {
            for tag in tags {
                match counts.iter_mut().find(|(t, _)| t == tag) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((tag.clone(), 1)),
                }
            }
        }
        // stable sort: ties stay in first-encountered order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(limit);
        counts
    }

    pub fn all(&self) -> &BTreeMap<String, Vec<String>> {
        &self.tags
    }

    /// Replace the whole map (import path).
    pub fn replace(&mut self, tags: BTreeMap<String, Vec<String>>) -> Result<(), StoreError> {
        self.tags = tags;
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        save_json(&self.path, &self.tags)
    }
}
