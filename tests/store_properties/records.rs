//! Shape and order of result records.

use serde_json::json;

use crate::common::*;

#[test]
fn batch_order_and_independent_outcomes() {
    let store = TestStore::new();
    store.save("b", "2");

    let records = store.run(Operation::Read, vec![Item::key("a"), Item::key("b")]);
    assert_eq!(
        serde_json::to_value(&records).unwrap(),
        json!([
            { "success": false, "key": "a", "value": "" },
            { "success": true, "key": "b", "value": "2" }
        ])
    );
}

#[test]
fn save_echoes_original_value() {
    let store = TestStore::new();
    assert_eq!(
        store.save("k", "plain text").to_json(),
        json!({ "success": true, "key": "k", "value": "plain text" })
    );
}

#[test]
fn delete_records() {
    let store = TestStore::new();
    store.save("k", "v");

    let records = store.run(Operation::Delete, vec![Item::key("k"), Item::key("k")]);
    assert_eq!(
        serde_json::to_value(&records).unwrap(),
        json!([
            { "success": true, "key": "k", "deleted": true },
            { "success": false, "key": "k", "deleted": false, "message": "Key not found" }
        ])
    );
}
