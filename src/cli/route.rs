//! CLI route: run context and per-binary entry points. Dispatches to domain
//! services and writes results to the given sinks.

use crate::cli::parse::{DevboxConcatCli, DiffpathCli, GitignoredCli};
use crate::config::{ConfigLoader, ToolConfig};
use crate::devbox::concat_files;
use crate::diffpath::diff_search_paths;
use crate::error::ToolError;
use crate::ignored::IgnoredFiles;
use crate::listing::{render_listing, write_listing, ListingSummary};
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Load configuration for `gitignored` and fold the CLI flags over it.
/// Precedence: CLI flags override environment override config file override defaults.
pub fn load_config(cli: &GitignoredCli) -> Result<ToolConfig, ToolError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(version) = cli.porcelain_version {
        config.status.version = version;
    }
    if cli.expand_directory {
        config.status.expand_directory = true;
    }
    if let Some(jobs) = cli.jobs {
        config.execution.jobs = jobs as usize;
    }
    cli.log.apply(&mut config.logging);

    Ok(config)
}

/// Runtime context for `gitignored`: the validated enumerator.
pub struct RunContext {
    enumerator: IgnoredFiles,
}

impl RunContext {
    /// Validate `config` and build the enumerator it describes.
    pub fn new(config: &ToolConfig) -> Result<Self, ToolError> {
        if let Err(errors) = config.validate() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(ToolError::Config(format!(
                "Configuration validation failed: {}",
                messages.join("; ")
            )));
        }
        let enumerator = IgnoredFiles::new(
            config.status.to_options()?,
            config.execution.to_strategy()?,
        );
        Ok(Self { enumerator })
    }

    pub fn enumerator(&self) -> &IgnoredFiles {
        &self.enumerator
    }

    /// Sorted, formatted, deduplicated ignored paths under `directory`.
    pub fn list(&self, directory: &Path) -> Result<Vec<OsString>, ToolError> {
        let paths = self.enumerator.collect_blocking(directory)?;
        Ok(render_listing(paths))
    }

    /// List `directory` into `out`; with `verify`, missing paths go to `err`.
    pub fn execute<O, E>(
        &self,
        directory: &Path,
        verify: bool,
        out: &mut O,
        err: &mut E,
    ) -> Result<ListingSummary, ToolError>
    where
        O: Write,
        E: Write,
    {
        let lines = self.list(directory)?;
        let summary = write_listing(&lines, verify, out, err)?;
        info!(
            listed = summary.listed,
            missing = summary.missing,
            "Listing complete"
        );
        Ok(summary)
    }
}

/// Print the commands unique to either search path.
pub fn run_diffpath<O: Write>(cli: &DiffpathCli, out: &mut O) -> Result<usize, ToolError> {
    let unique = diff_search_paths(&cli.path1, &cli.path2);
    for command in &unique {
        writeln!(out, "{}", command.render())?;
    }
    out.flush()?;
    Ok(unique.len())
}

/// Print the merged JSON document.
pub fn run_devbox_concat<O: Write>(cli: &DevboxConcatCli, out: &mut O) -> Result<(), ToolError> {
    let merged = concat_files(&cli.files)?;
    writeln!(out, "{}", merged)?;
    out.flush()?;
    Ok(())
}
