//! gitignored CLI Binary
//!
//! Lists every git-ignored path under a directory, one per line, sorted.

use clap::Parser;
use gitignored::cli::{exit_on_parse_error, load_config, map_error, GitignoredCli, RunContext};
use gitignored::logging::init_logging;
use std::io;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = GitignoredCli::try_parse().unwrap_or_else(|e| exit_on_parse_error(e));

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging early
    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(directory = %cli.directory.display(), "gitignored starting");

    let context = match RunContext::new(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = context.execute(
        &cli.directory,
        cli.debug,
        &mut stdout.lock(),
        &mut stderr.lock(),
    ) {
        error!("Listing failed: {}", e);
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }
}
