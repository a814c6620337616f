//! CLI output: error mapping from domain errors to a stable CLI surface.

use crate::error::ToolError;
use std::process;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ToolError) -> String {
    format!("error: {}", e)
}

/// Print a clap error and exit: status 0 for help output, 1 for bad usage.
pub fn exit_on_parse_error(e: clap::Error) -> ! {
    let code = if e.use_stderr() { 1 } else { 0 };
    let _ = e.print();
    process::exit(code)
}
