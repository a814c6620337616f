//! CLI domain: parse, route, and output only.
//! Domain work lives in the library modules; the binaries stay thin.

mod output;
mod parse;
mod route;

pub use output::{exit_on_parse_error, map_error};
pub use parse::{DevboxConcatCli, DiffpathCli, GitignoredCli, LogArgs};
pub use route::{load_config, run_devbox_concat, run_diffpath, RunContext};
