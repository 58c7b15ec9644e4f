//! Save/read round trips, overwrites and deletes.

use proptest::prelude::*;

use crate::common::*;

#[test]
fn save_then_read_returns_value() {
    let store = TestStore::new();
    store.save("greeting", "hello, world");

    assert_eq!(
        store.read("greeting"),
        Output::Value {
            key: "greeting".into(),
            value: Some("hello, world".into())
        }
    );
}

#[test]
fn empty_string_round_trips() {
    let store = TestStore::new();
    store.save("empty", "");

    let out = store.read("empty");
    assert!(out.success());
    assert_eq!(out.to_json()["value"], "");
}

#[test]
fn multibyte_text_round_trips() {
    let store = TestStore::new();
    let value = "naïve café — 日本語 🚀\n\ttabs";
    store.save("text", value);

    assert_eq!(store.read("text").to_json()["value"], value);
}

#[test]
fn overwrite_keeps_last_value() {
    let store = TestStore::new();
    store.save("k", "a");
    store.save("k", "b");

    assert_eq!(store.read("k").to_json()["value"], "b");
}

#[test]
fn delete_twice_second_is_miss() {
    let store = TestStore::new();
    store.save("k", "v");

    assert_eq!(
        store.delete("k"),
        Output::Deleted {
            key: "k".into(),
            deleted: true
        }
    );
    assert_eq!(
        store.delete("k"),
        Output::Deleted {
            key: "k".into(),
            deleted: false
        }
    );
    assert!(!store.read("k").success());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_text_round_trips(key in "\\PC*", value in "\\PC*") {
        let store = TestStore::new();
        store.save(&key, &value);
        let out = store.read(&key);
        prop_assert_eq!(out, Output::Value { key: key.clone(), value: Some(value) });
    }
}
