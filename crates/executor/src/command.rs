//! Command enum defining all store operations.
//!
//! Commands are self-contained: all parameters needed for execution are in
//! the variant. They are pure data with no closures or executable code.

use jsonstore_core::{Item, Operation};

/// A command is a self-contained operation on one key.
///
/// The batch driver builds one command per input item from the batch's
/// [`Operation`]; commands never carry a path.
///
/// # Example
///
/// ```
/// use jsonstore_executor::{Command, Item, Operation};
///
/// let cmd = Command::from_item(Operation::Save, Item::pair("foo", "bar"));
/// assert_eq!(cmd, Command::Save { key: "foo".into(), value: "bar".into() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a value under a key.
    /// Returns: `Output::Saved`
    Save {
        /// Store key
        key: String,
        /// Plain (undecoded) value
        value: String,
    },

    /// Read a value by key.
    /// Returns: `Output::Value`
    Read {
        /// Store key
        key: String,
    },

    /// Delete a key.
    /// Returns: `Output::Deleted`
    Delete {
        /// Store key
        key: String,
    },
}

impl Command {
    /// Build the command `operation` runs for `item`.
    ///
    /// The item's value is dropped for read and delete.
    pub fn from_item(operation: Operation, item: Item) -> Self {
        let Item { key, value } = item;
        match operation {
            Operation::Save => Command::Save { key, value },
            Operation::Read => Command::Read { key },
            Operation::Delete => Command::Delete { key },
        }
    }
}

