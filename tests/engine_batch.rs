use std::path::Path;
use std::sync::Arc;

use vtape::engine::batch::BatchError;
use vtape::engine::query::QuerySpec;
use vtape::engine::Engine;
use vtape::media::probe::{MediaProbe, ProbeData};
use vtape::store::StorePaths;

struct FixedProbe;

impl MediaProbe for FixedProbe {
    fn probe(&self, _path: &Path) -> Option<ProbeData> {
        Some(ProbeData::default())
    }
}

fn engine_in(data_dir: &Path) -> Engine {
    Engine::init(StorePaths::in_dir(data_dir))
        .unwrap()
        .with_probe(Arc::new(FixedProbe))
}

fn media_dir(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        std::fs::write(dir.path().join(name), b"bytes").unwrap();
    }
    dir
}

async fn loaded_engine(data: &Path, media: &Path) -> Engine {
    let mut engine = engine_in(data);
    engine.load_folder(media).await.unwrap();
    engine
}

// ── selection ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn selection_toggles_in_and_out() {
    let data = tempfile::tempdir().unwrap();
    let media = media_dir(&["a.mp4"]);
    let mut engine = loaded_engine(data.path(), media.path()).await;

    let id = engine.entries()[0].id.clone();
    assert!(engine.toggle_selected(&id));
    assert!(engine.selection().contains(&id));
    assert!(!engine.toggle_selected(&id));
    assert!(engine.selection().is_empty());
}

#[tokio::test]
async fn mode_toggle_clears_the_selection() {
    let data = tempfile::tempdir().unwrap();
    let media = media_dir(&["a.mp4", "b.mp4"]);
    let mut engine = loaded_engine(data.path(), media.path()).await;

    for id in engine
        .entries()
        .iter()
        .map(|e| e.id.clone())
        .collect::<Vec<_>>()
    {
        engine.toggle_selected(&id);
    }
    assert_eq!(engine.selection().len(), 2);

    engine.clear_selection();
    assert!(engine.selection().is_empty());
}

// ── favorites ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn favorite_selected_is_idempotent() {
    let data = tempfile::tempdir().unwrap();
    let media = media_dir(&["a.mp4", "b.mp4", "c.mp4"]);
    let mut engine = loaded_engine(data.path(), media.path()).await;

    let ids: Vec<String> = engine
        .entries()
        .iter()
        .take(2)
        .map(|e| e.id.clone())
        .collect();
    for id in &ids {
        engine.toggle_selected(id);
    }

    assert_eq!(engine.favorite_selected().unwrap(), 2);
    let spec = QuerySpec {
        favorites_only: true,
        sort: vtape::engine::query::SortKey::Unsorted,
        ..Default::default()
    };
    assert_eq!(engine.query(&spec).len(), 2);

    // union with the same set changes nothing
    assert_eq!(engine.favorite_selected().unwrap(), 0);
    assert_eq!(engine.query(&spec).len(), 2);

    assert_eq!(engine.unfavorite_selected().unwrap(), 2);
    assert_eq!(engine.query(&spec).len(), 0);
    assert_eq!(engine.unfavorite_selected().unwrap(), 0);
}

#[tokio::test]
async fn favorite_ops_are_noops_on_empty_selection() {
    let data = tempfile::tempdir().unwrap();
    let media = media_dir(&["a.mp4"]);
    let mut engine = loaded_engine(data.path(), media.path()).await;

    assert_eq!(engine.favorite_selected().unwrap(), 0);
    assert_eq!(engine.unfavorite_selected().unwrap(), 0);
    assert_eq!(engine.tag_selected(&["x".to_owned()]).unwrap(), 0);
}

// ── tags ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn tag_selected_normalizes_and_applies_to_each_entry() {
    let data = tempfile::tempdir().unwrap();
    let media = media_dir(&["a.mp4", "b.mp4"]);
    let mut engine = loaded_engine(data.path(), media.path()).await;

    let ids: Vec<String> = engine.entries().iter().map(|e| e.id.clone()).collect();
    for id in &ids {
        engine.toggle_selected(id);
    }

    let tags = vec!["action".to_owned(), " drama ".to_owned(), "".to_owned()];
    assert_eq!(engine.tag_selected(&tags).unwrap(), 4); // 2 tags x 2 entries

    for id in &ids {
        assert_eq!(engine.tags_for(id), ["action", "drama"]);
    }

    // merging the same tags again adds nothing
    assert_eq!(engine.tag_selected(&tags).unwrap(), 0);
}

// ── delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_refuses_an_empty_selection() {
    let data = tempfile::tempdir().unwrap();
    let media = media_dir(&["a.mp4"]);
    let mut engine = loaded_engine(data.path(), media.path()).await;

    let result = engine.delete_selected();
    assert!(matches!(result, Err(BatchError::EmptySelection)));
    assert_eq!(engine.entries().len(), 1);
}

#[tokio::test]
async fn delete_removes_entries_but_never_sidecar_state() {
    let data = tempfile::tempdir().unwrap();
    let media = media_dir(&["a.mp4", "b.mp4", "c.mp4", "d.mp4"]);
    let mut engine = loaded_engine(data.path(), media.path()).await;

    let ids: Vec<String> = engine
        .entries()
        .iter()
        .take(3)
        .map(|e| e.id.clone())
        .collect();
    for id in &ids {
        engine.toggle_selected(id);
    }
    engine.favorite_selected().unwrap();
    engine.tag_selected(&["road trip".to_owned()]).unwrap();

    assert_eq!(engine.delete_selected().unwrap(), 3);
    assert_eq!(engine.entries().len(), 1);
    assert!(engine.selection().is_empty());

    // favorites and tags for the removed ids are retained
    for id in &ids {
        assert!(engine.favorites().contains(id));
        assert_eq!(engine.tags_for(id), ["road trip"]);
    }
}

#[tokio::test]
async fn deleted_entries_come_back_annotated_on_reload() {
    let data = tempfile::tempdir().unwrap();
    let media = media_dir(&["a.mp4", "b.mp4"]);
    let mut engine = loaded_engine(data.path(), media.path()).await;

    let id = engine.entries()[0].id.clone();
    engine.toggle_selected(&id);
    engine.favorite_selected().unwrap();
    engine.delete_selected().unwrap();
    assert_eq!(engine.entries().len(), 1);

    // same files reloaded: the favorite mirror is re-derived from the store
    engine.load_folder(media.path()).await.unwrap();
    let entry = engine.entries().iter().find(|e| e.id == id).unwrap();
    assert!(entry.is_favorite);
}
