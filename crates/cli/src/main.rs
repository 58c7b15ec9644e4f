//! jsonstore CLI: run one batch against a JSON store file.
//!
//! ```text
//! jsonstore save greeting hello
//! jsonstore read greeting missing
//! jsonstore init
//! echo '[{"key":"a","value":"1"}]' | jsonstore --file /tmp/kv.json batch save
//! ```
//!
//! Records go to stdout as JSON. Logs go to stderr, filtered by `RUST_LOG`.

mod commands;
mod format;
mod parse;

use std::io;
use std::process;

use jsonstore_executor::Executor;
use tracing_subscriber::{fmt, EnvFilter};

use commands::build_cli;
use format::{format_error, format_records, OutputMode};
use parse::{init_config, matches_to_action};

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("compact") {
        OutputMode::Compact
    } else {
        OutputMode::Pretty
    };

    // `init` writes the config file and never touches a store.
    if matches.subcommand_name() == Some("init") {
        match init_config(&matches) {
            Ok(path) => eprintln!("Config file ready at {}", path.display()),
            Err(e) => {
                eprintln!("{}", format_error(&e, output_mode));
                process::exit(1);
            }
        }
        return;
    }

    let action = match matches_to_action(&matches, io::stdin().lock()) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(2);
        }
    };

    let executor = Executor::new(action.invocation);
    match executor.execute_batch(action.items) {
        Ok(outputs) => println!("{}", format_records(&outputs, output_mode)),
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }
}

/// Install a stderr `fmt` subscriber.
/// - Respects `RUST_LOG` if set
/// - Falls back to `warn` so stdout carries only records
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
