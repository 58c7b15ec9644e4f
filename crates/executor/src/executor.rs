//! The Executor - batch driver over one store file.
//!
//! The operation, path and failure policy are resolved once per batch as an
//! [`Invocation`]. A single batch therefore never mixes operations or targets
//! more than one file.

use std::path::{Path, PathBuf};

use jsonstore_core::{Item, Operation};
use jsonstore_storage::JsonFileStore;
use tracing::{debug, info, warn};

use crate::config::JsonStoreConfig;
use crate::{Command, Output, Result};

/// Per-batch configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Operation applied to every item
    pub operation: Operation,
    /// Store file
    pub path: PathBuf,
    /// Swallow a failure into a single `{success: false, error}` record
    pub continue_on_fail: bool,
}

impl Invocation {
    /// Invocation that propagates failures.
    pub fn new(operation: Operation, path: impl Into<PathBuf>) -> Self {
        Self {
            operation,
            path: path.into(),
            continue_on_fail: false,
        }
    }

    /// Invocation using the path and failure policy from `config`.
    pub fn from_config(config: &JsonStoreConfig, operation: Operation) -> Self {
        Self {
            operation,
            path: config.file_path.clone(),
            continue_on_fail: config.continue_on_fail,
        }
    }

    /// Set the failure policy.
    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }
}

/// The batch executor.
///
/// # Example
///
/// ```
/// use jsonstore_executor::{Executor, Invocation, Item, Operation, Output};
///
/// # fn main() -> jsonstore_executor::Result<()> {
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("custom_json.json");
/// let executor = Executor::new(Invocation::new(Operation::Read, &path));
/// let results = executor.execute_batch(vec![Item::key("a"), Item::key("b")])?;
///
/// // results[0] corresponds to "a", etc.; both are misses on a fresh store
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].key(), Some("a"));
/// assert!(matches!(results[1], Output::Value { value: None, .. }));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    invocation: Invocation,
}

impl Executor {
    /// Create an executor for one invocation.
    pub fn new(invocation: Invocation) -> Self {
        Self { invocation }
    }

    /// The invocation this executor runs.
    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Store file this executor targets.
    pub fn path(&self) -> &Path {
        &self.invocation.path
    }

    /// Execute a single command against an open store.
    pub fn execute(store: &mut JsonFileStore, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Save { key, value } => crate::handlers::kv::kv_save(store, key, value),
            Command::Read { key } => crate::handlers::kv::kv_read(store, key),
            Command::Delete { key } => crate::handlers::kv::kv_delete(store, key),
        }
    }

    /// Execute the invocation's operation for every item, in order.
    ///
    /// The store is loaded once; every mutating hit rewrites the file before
    /// the next item runs. Returns one output per item in input order.
    ///
    /// On failure the behaviour depends on `continue_on_fail`: when set, the
    /// whole batch collapses to a single [`Output::Failed`] record and any
    /// outputs already produced are dropped; otherwise the error is returned.
    /// Writes made before the failure stay on disk either way.
    pub fn execute_batch(&self, items: Vec<Item>) -> Result<Vec<Output>> {
        info!(
            target: "jsonstore::executor",
            operation = %self.invocation.operation,
            path = %self.invocation.path.display(),
            items = items.len(),
            "Executing batch"
        );

        match self.run_batch(items) {
            Ok(outputs) => Ok(outputs),
            Err(e) if self.invocation.continue_on_fail => {
                warn!(
                    target: "jsonstore::executor",
                    path = %self.invocation.path.display(),
                    error = %e,
                    "Batch failed, continuing with error record"
                );
                Ok(vec![Output::Failed {
                    error: e.to_string(),
                }])
            }
            Err(e) => Err(e),
        }
    }

    fn run_batch(&self, items: Vec<Item>) -> Result<Vec<Output>> {
        let mut store = JsonFileStore::open(&self.invocation.path)?;
        let operation = self.invocation.operation;

        items
            .into_iter()
            .map(|item| -> Result<Output> {
                let cmd = Command::from_item(operation, item);
                let output = Self::execute(&mut store, cmd)?;
                debug!(
                    target: "jsonstore::executor",
                    key = output.key().unwrap_or_default(),
                    success = output.success(),
                    "Item done"
                );
                Ok(output)
            })
            .collect()
    }
}
