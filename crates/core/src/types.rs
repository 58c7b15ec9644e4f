//! Batch types
//!
//! - Operation: which key-value operation a batch runs
//! - Item: one input of a batch

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Key-value operation selected once per batch.
///
/// Parsed case-sensitively from `"save"`, `"read"` and `"delete"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Store a value under a key, overwriting any previous value
    #[default]
    Save,
    /// Look up the value stored under a key
    Read,
    /// Remove a key
    Delete,
}

impl Operation {
    /// Whether this operation rewrites the store file on a hit.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::Save | Operation::Delete)
    }

    /// Wire name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Save => "save",
            Operation::Read => "read",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "save" => Ok(Operation::Save),
            "read" => Ok(Operation::Read),
            "delete" => Ok(Operation::Delete),
            other => Err(Error::invalid_input(format!(
                "unknown operation '{}', expected \"save\", \"read\" or \"delete\"",
                other
            ))),
        }
    }
}

/// One unit of a batch.
///
/// `value` is only consulted by [`Operation::Save`]; it defaults to the
/// empty string when the input omits it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    /// Store key, treated as an opaque string
    pub key: String,
    /// Value to save
    #[serde(default)]
    pub value: String,
}

impl Item {
    /// Item carrying only a key (read, delete).
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
        }
    }

    /// Item carrying a key and a value (save).
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
