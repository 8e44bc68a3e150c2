use std::path::Path;

use vtape::store::export::{export_json, import_json, ImportError};
use vtape::store::favorites::FavoriteStore;
use vtape::store::playlists::PlaylistStore;
use vtape::store::tags::TagStore;

struct Stores {
    favorites: FavoriteStore,
    playlists: PlaylistStore,
    tags: TagStore,
}

fn stores_in(dir: &Path) -> Stores {
    Stores {
        favorites: FavoriteStore::load(dir.join("favorites.json")).unwrap(),
        playlists: PlaylistStore::load(
            dir.join("playlists.json"),
            dir.join("folderHandles.json"),
        )
        .unwrap(),
        tags: TagStore::load(dir.join("videoTags.json")).unwrap(),
    }
}

fn populated_stores(dir: &Path) -> Stores {
    let mut s = stores_in(dir);
    s.favorites.add("a_1_1").unwrap();
    s.favorites.add("b_2_2").unwrap();
    s.playlists
        .create_manual("watch later", vec!["a_1_1".to_owned(), "c_3_3".to_owned()])
        .unwrap();
    s.tags
        .add_tags("a_1_1", &["drama".to_owned(), "indie".to_owned()])
        .unwrap();
    s
}

#[test]
fn export_emits_all_three_keys() {
    let dir = tempfile::tempdir().unwrap();
    let s = populated_stores(dir.path());

    let json = export_json(&s.favorites, &s.playlists, &s.tags).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(doc.get("favorites").unwrap().is_array());
    assert!(doc.get("playlists").unwrap().is_array());
    assert!(doc.get("videoTags").unwrap().is_object());
}

#[test]
fn export_import_round_trips_into_fresh_stores() {
    let src_dir = tempfile::tempdir().unwrap();
    let dst_dir = tempfile::tempdir().unwrap();
    let src = populated_stores(src_dir.path());
    let mut dst = stores_in(dst_dir.path());

    let json = export_json(&src.favorites, &src.playlists, &src.tags).unwrap();
    import_json(
        &json,
        &mut dst.favorites,
        &mut dst.playlists,
        &mut dst.tags,
    )
    .unwrap();

    assert_eq!(dst.favorites.ids(), src.favorites.ids());
    assert_eq!(dst.tags.all(), src.tags.all());
    assert_eq!(dst.playlists.list().len(), 1);
    let playlist = &dst.playlists.list()[0];
    assert_eq!(playlist.name, "watch later");
    assert_eq!(playlist.id, src.playlists.list()[0].id);
    assert_eq!(
        playlist.manual_ids(),
        Some(&["a_1_1".to_owned(), "c_3_3".to_owned()][..])
    );
}

#[test]
fn import_replaces_named_stores_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = populated_stores(dir.path());

    import_json(
        r#"{"favorites": ["z_9_9"]}"#,
        &mut s.favorites,
        &mut s.playlists,
        &mut s.tags,
    )
    .unwrap();

    assert_eq!(s.favorites.ids(), ["z_9_9"]);
}

#[test]
fn import_leaves_absent_keys_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = populated_stores(dir.path());

    import_json(
        r#"{"favorites": ["z_9_9"]}"#,
        &mut s.favorites,
        &mut s.playlists,
        &mut s.tags,
    )
    .unwrap();

    // tags and playlists were not named in the document
    assert_eq!(s.tags.tags_for("a_1_1"), ["drama", "indie"]);
    assert_eq!(s.playlists.list().len(), 1);
}

#[test]
fn malformed_document_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = populated_stores(dir.path());

    let result = import_json(
        "{ favorites: not json",
        &mut s.favorites,
        &mut s.playlists,
        &mut s.tags,
    );
    assert!(matches!(result, Err(ImportError::Parse(_))));

    assert_eq!(s.favorites.ids(), ["a_1_1", "b_2_2"]);
    assert_eq!(s.tags.tags_for("a_1_1"), ["drama", "indie"]);
    assert_eq!(s.playlists.list().len(), 1);
}

#[test]
fn imported_playlists_without_ids_get_generated_ones() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = stores_in(dir.path());

    // a document produced by an older build carries no playlist ids
    import_json(
        r#"{"playlists": [{"name": "legacy", "videoIds": ["a_1_1"]}]}"#,
        &mut s.favorites,
        &mut s.playlists,
        &mut s.tags,
    )
    .unwrap();

    let playlist = &s.playlists.list()[0];
    assert_eq!(playlist.name, "legacy");
    assert_eq!(playlist.manual_ids(), Some(&["a_1_1".to_owned()][..]));
}

#[test]
fn import_is_persisted_immediately() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut s = stores_in(dir.path());
        import_json(
            r#"{"favorites": ["a_1_1"], "videoTags": {"a_1_1": ["keeper"]}}"#,
            &mut s.favorites,
            &mut s.playlists,
            &mut s.tags,
        )
        .unwrap();
    }

    let s = stores_in(dir.path());
    assert!(s.favorites.contains("a_1_1"));
    assert_eq!(s.tags.tags_for("a_1_1"), ["keeper"]);
}
