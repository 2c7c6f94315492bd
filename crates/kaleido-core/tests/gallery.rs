// File: crates/kaleido-core/tests/gallery.rs
// Purpose: Gallery ordering, erase, persistence across reopen, and corrupt-store handling.

use kaleido_core::{FileStore, Gallery, KaleidoError, KeyValueStore, MemoryStore};

#[test]
fn empty_when_key_absent() {
    let gallery = Gallery::new(MemoryStore::new());
    assert!(gallery.entries().unwrap().is_empty());
    assert!(gallery.is_empty().unwrap());
}

#[test]
fn newest_snapshot_first() {
    let mut gallery = Gallery::new(MemoryStore::new());
    assert_eq!(gallery.save("first".into()).unwrap(), 1);
    assert_eq!(gallery.save("second".into()).unwrap(), 2);
    assert_eq!(gallery.save("third".into()).unwrap(), 3);
    assert_eq!(gallery.entries().unwrap(), vec!["third", "second", "first"]);
}

#[test]
fn erase_leaves_empty_list() {
    let mut gallery = Gallery::new(MemoryStore::new());
    gallery.save("a".into()).unwrap();
    gallery.erase().unwrap();
    assert_eq!(gallery.len().unwrap(), 0);
    assert_eq!(gallery.store().get("gallery").unwrap().as_deref(), Some("[]"));
}

#[test]
fn stored_as_json_string_list_under_key() {
    let mut gallery = Gallery::with_key(MemoryStore::new(), "shots");
    gallery.save("x".into()).unwrap();
    gallery.save("y".into()).unwrap();
    assert_eq!(gallery.key(), "shots");
    assert_eq!(gallery.store().get("shots").unwrap().as_deref(), Some(r#"["y","x"]"#));
    assert_eq!(gallery.store().get("gallery").unwrap(), None);
}

#[test]
fn corrupt_entry_is_an_error() {
    let mut store = MemoryStore::new();
    store.set("gallery", "{not json".into()).unwrap();
    let gallery = Gallery::new(store);
    assert!(matches!(gallery.entries(), Err(KaleidoError::GalleryFormat { .. })));
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep/gallery.json");
    {
        let mut gallery = Gallery::new(FileStore::open(&path).unwrap());
        gallery.save("older".into()).unwrap();
        gallery.save("newer".into()).unwrap();
    }
    let gallery = Gallery::new(FileStore::open(&path).unwrap());
    assert_eq!(gallery.entries().unwrap(), vec!["newer", "older"]);
    assert_eq!(gallery.store().path(), path.as_path());
}

#[test]
fn file_store_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    std::fs::write(&path, "[1, 2").unwrap();
    assert!(matches!(FileStore::open(&path), Err(KaleidoError::StoreFormat { .. })));
}

#[test]
fn file_store_treats_blank_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    std::fs::write(&path, "\n").unwrap();
    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("gallery").unwrap(), None);
}

#[test]
fn null_value_reads_as_empty() {
    let mut store = MemoryStore::new();
    store.set("gallery", "null".into()).unwrap();
    let mut gallery = Gallery::new(store);
    assert!(gallery.entries().unwrap().is_empty());
    assert_eq!(gallery.save("first".into()).unwrap(), 1);
    assert_eq!(gallery.entries().unwrap(), vec!["first"]);
}

#[test]
fn failed_file_write_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let mut store = FileStore::open(blocker.join("gallery.json")).unwrap();

    assert!(store.set("gallery", "[\"lost\"]".into()).is_err());
    assert_eq!(store.get("gallery").unwrap(), None);
    assert!(!blocker.join("gallery.json").exists());
}
