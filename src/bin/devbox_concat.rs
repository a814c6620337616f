//! devbox-concat CLI Binary
//!
//! Merges devbox JSON files and prints the result.

use clap::Parser;
use gitignored::cli::{exit_on_parse_error, map_error, run_devbox_concat, DevboxConcatCli};
use gitignored::config::ConfigLoader;
use gitignored::logging::{init_logging, LoggingConfig};
use std::io;
use std::process;
use tracing::error;

fn main() {
    let cli = DevboxConcatCli::try_parse().unwrap_or_else(|e| exit_on_parse_error(e));

    if let Err(e) = init_logging(Some(&build_logging_config(&cli))) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let stdout = io::stdout();
    if let Err(e) = run_devbox_concat(&cli, &mut stdout.lock()) {
        error!("devbox-concat failed: {}", e);
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }
}

/// Logging section of the shared config file, with CLI flags on top.
fn build_logging_config(cli: &DevboxConcatCli) -> LoggingConfig {
    let mut config = ConfigLoader::load()
        .ok()
        .map(|c| c.logging)
        .unwrap_or_default();
    cli.log.apply(&mut config);
    config
}
