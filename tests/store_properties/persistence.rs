//! What lands on disk, and when.

use std::fs;

use serde_json::json;

use crate::common::*;

#[test]
fn read_on_missing_file_creates_directory_only() {
    let store = TestStore::new();

    let out = store.read("k");
    assert_eq!(out.to_json(), json!({ "success": false, "key": "k", "value": "" }));
    assert!(store.path().parent().unwrap().is_dir());
    assert!(!store.path().exists());
}

#[test]
fn save_is_visible_to_fresh_load() {
    let store = TestStore::new();
    store.save("x", "1");

    let reopened = JsonFileStore::open(store.path()).unwrap();
    assert_eq!(reopened.get("x"), Some("1".to_string()));
}

#[test]
fn values_are_base64_on_disk() {
    let store = TestStore::new();
    store.save("x", "1");
    store.save("greeting", "hello");

    assert_eq!(
        store.on_disk(),
        json!({ "greeting": "aGVsbG8=", "x": "MQ==" })
    );
}

#[test]
fn file_is_pretty_printed() {
    let store = TestStore::new();
    store.save("x", "1");

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "{\n  \"x\": \"MQ==\"\n}"
    );
}

#[test]
fn delete_keeps_file() {
    let store = TestStore::new();
    store.save("x", "1");
    store.delete("x");

    assert!(store.path().exists());
    assert_eq!(store.on_disk(), json!({}));
}

#[test]
fn separate_paths_are_independent() {
    let a = TestStore::new();
    let b = TestStore::new();
    a.save("k", "from a");

    assert!(!b.read("k").success());
    assert!(a.read("k").success());
}

#[test]
fn batch_reflects_final_state() {
    let store = TestStore::new();
    store.run(
        Operation::Save,
        vec![
            Item::pair("x", "1"),
            Item::pair("y", "2"),
            Item::pair("x", "3"),
        ],
    );

    assert_eq!(store.on_disk(), json!({ "x": "Mw==", "y": "Mg==" }));
}
