//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub use jsonstore::{Executor, Invocation, Item, JsonFileStore, Operation, Output};
use tempfile::TempDir;

/// Temporary store location; the `data/` directory does not exist yet.
pub struct TestStore {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("data").join("custom_json.json");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one batch and unwrap the records.
    pub fn run(&self, op: Operation, items: Vec<Item>) -> Vec<Output> {
        Executor::new(Invocation::new(op, self.path.clone()))
            .execute_batch(items)
            .expect("batch should succeed")
    }

    pub fn save(&self, key: &str, value: &str) -> Output {
        self.run(Operation::Save, vec![Item::pair(key, value)]).remove(0)
    }

    pub fn read(&self, key: &str) -> Output {
        self.run(Operation::Read, vec![Item::key(key)]).remove(0)
    }

    pub fn delete(&self, key: &str) -> Output {
        self.run(Operation::Delete, vec![Item::key(key)]).remove(0)
    }

    /// Raw file content as JSON.
    pub fn on_disk(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(&self.path).expect("read store file");
        serde_json::from_str(&content).expect("store file is JSON")
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
