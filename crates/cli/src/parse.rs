//! ArgMatches → Invocation + items conversion.
//!
//! - `save KEY VALUE` → one save item
//! - `read KEY...` / `delete KEY...` → one item per key
//! - `batch OPERATION` → items parsed from a JSON array on stdin
//! - `init` → handled by [`init_config`] before any batch is built

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use jsonstore_executor::{
    Error, Invocation, Item, JsonStoreConfig, Operation, Result, CONFIG_FILE_NAME,
};

/// A fully resolved batch, ready for the executor.
#[derive(Debug)]
pub struct CliAction {
    /// Operation, path and failure policy
    pub invocation: Invocation,
    /// Items in input order
    pub items: Vec<Item>,
}

/// Resolve the invocation and items from parsed arguments.
///
/// `stdin` is only read by the `batch` subcommand.
pub fn matches_to_action(matches: &ArgMatches, stdin: impl Read) -> Result<CliAction> {
    let config = load_config(matches)?;

    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| Error::invalid_input("missing subcommand"))?;

    let (operation, items) = match name {
        "save" => {
            let key = required(sub, "key")?;
            let value = required(sub, "value")?;
            (Operation::Save, vec![Item::pair(key, value)])
        }
        "read" => (Operation::Read, keys(sub)),
        "delete" => (Operation::Delete, keys(sub)),
        "batch" => {
            let operation: Operation = required(sub, "operation")?.parse()?;
            (operation, parse_items(stdin)?)
        }
        other => {
            return Err(Error::invalid_input(format!(
                "unknown subcommand '{}'",
                other
            )))
        }
    };

    let mut invocation = Invocation::from_config(&config, operation);
    if let Some(file) = matches.get_one::<String>("file") {
        invocation.path = PathBuf::from(file);
    }
    if matches.get_flag("continue-on-fail") {
        invocation.continue_on_fail = true;
    }

    Ok(CliAction { invocation, items })
}

/// Parse a JSON array of `{key, value}` items.
pub fn parse_items(mut reader: impl Read) -> Result<Vec<Item>> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io("<stdin>", e))?;
    serde_json::from_str(&input)
        .map_err(|e| Error::invalid_input(format!("invalid items on stdin: {}", e)))
}

/// Write the commented default config to the config path unless a file is
/// already there. Returns the path.
pub fn init_config(matches: &ArgMatches) -> Result<PathBuf> {
    let path = config_path(matches);
    JsonStoreConfig::write_default_if_missing(&path)?;
    Ok(path)
}

/// `--config` if given, else `./jsonstore.toml`.
fn config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// `--config` if given (must exist), else `./jsonstore.toml` if present, else defaults.
fn load_config(matches: &ArgMatches) -> Result<JsonStoreConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => JsonStoreConfig::from_file(Path::new(path)),
        None => JsonStoreConfig::from_file_or_default(Path::new(CONFIG_FILE_NAME)),
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| Error::invalid_input(format!("missing argument '{}'", name)))
}

fn keys(matches: &ArgMatches) -> Vec<Item> {
    matches
        .get_many::<String>("keys")
        .map(|keys| keys.map(|k| Item::key(k.as_str())).collect())
        .unwrap_or_default()
}
