//! Corrupt store files.

use std::fs;

use jsonstore::Error;
use serde_json::json;

use crate::common::*;

fn corrupt(store: &TestStore) {
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "<<< not json >>>").unwrap();
}

#[test]
fn every_operation_fails_with_parse_error() {
    let store = TestStore::new();
    corrupt(&store);

    for op in [Operation::Save, Operation::Read, Operation::Delete] {
        let err = Executor::new(Invocation::new(op, store.path()))
            .execute_batch(vec![Item::pair("k", "v")])
            .unwrap_err();
        assert!(err.is_parse(), "{}: {:?}", op, err);
        assert!(matches!(err, Error::Parse { .. }));
    }
}

#[test]
fn continue_on_fail_emits_single_error_record() {
    let store = TestStore::new();
    corrupt(&store);

    let records = Executor::new(
        Invocation::new(Operation::Delete, store.path()).with_continue_on_fail(true),
    )
    .execute_batch(vec![Item::key("a"), Item::key("b")])
    .unwrap();

    assert_eq!(records.len(), 1);
    let record = records[0].to_json();
    assert_eq!(record["success"], json!(false));
    assert!(record["error"].as_str().unwrap().contains("failed to parse store"));
    assert_eq!(record.as_object().unwrap().len(), 2);
}

#[test]
fn hand_edited_values_never_fail_a_read() {
    let store = TestStore::new();
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(
        store.path(),
        r#"{"x": "MQ", "y": "aGVs\nbG8=", "bad": "%%%"}"#,
    )
    .unwrap();

    let records = store.run(
        Operation::Read,
        vec![Item::key("x"), Item::key("y"), Item::key("bad")],
    );
    let records: Vec<_> = records.iter().map(Output::to_json).collect();
    assert_eq!(
        records,
        vec![
            json!({"success": true, "key": "x", "value": "1"}),
            json!({"success": true, "key": "y", "value": "hello"}),
            json!({"success": true, "key": "bad", "value": ""}),
        ]
    );
}
