//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("jsonstore")
        .about("Key-value store backed by a flat JSON file with base64-encoded values")
        .subcommand_required(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Store file (default: from jsonstore.toml, else ./data/custom_json.json)")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: ./jsonstore.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("continue-on-fail")
                .long("continue-on-fail")
                .help("Report a failure as a single error record instead of exiting non-zero")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print records on a single line")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("save")
                .about("Save a key-value pair")
                .arg(Arg::new("key").required(true).help("Key to save"))
                .arg(Arg::new("value").required(true).help("Value to save")),
        )
        .subcommand(
            Command::new("read")
                .about("Read values by key")
                .arg(
                    Arg::new("keys")
                        .required(true)
                        .num_args(1..)
                        .help("Keys to read, one record each"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete keys")
                .arg(
                    Arg::new("keys")
                        .required(true)
                        .num_args(1..)
                        .help("Keys to delete, one record each"),
                ),
        )
        .subcommand(
            Command::new("batch")
                .about("Run one operation over a JSON array of {key, value} items read from stdin")
                .arg(
                    Arg::new("operation")
                        .required(true)
                        .value_parser(["save", "read", "delete"])
                        .help("Operation applied to every item"),
                ),
        )
        .subcommand(
            Command::new("init")
                .about("Write a default config file (./jsonstore.toml or --config) if none exists"),
        )
}
