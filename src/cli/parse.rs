//! CLI parse: clap types for the toolkit binaries. No behavior; definitions only.

use crate::logging::LoggingConfig;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Logging flags shared by every binary.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    /// Fold the flags into `config`; flags win.
    pub fn apply(&self, config: &mut LoggingConfig) {
        if let Some(ref level) = self.log_level {
            config.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            config.format = format.clone();
        }
        if let Some(ref file) = self.log_file {
            config.file = Some(file.clone());
            config.output = "file".to_string();
        }
    }
}

/// List all git-ignored files under the given directory.
#[derive(Parser, Debug)]
#[command(name = "gitignored")]
#[command(about = "List all git-ignored files under the given directory.")]
pub struct GitignoredCli {
    /// The directory to list git-ignored files. Default is the current directory.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// The version of the git status --porcelain format to use.
    #[arg(short = 'v', long = "version", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub porcelain_version: Option<u8>,

    /// List files in a git-ignored directory. If not specified, only the directory itself is listed.
    #[arg(short, long)]
    pub expand_directory: bool,

    /// Verify paths exist, print to stderr if not.
    #[arg(short, long)]
    pub debug: bool,

    /// Maximum number of git status queries to run at once (1 = sequential)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub jobs: Option<u32>,

    /// Configuration file path (overrides the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Show commands found in only one of two colon-separated search paths.
///
/// Commands unique to PATH1 are printed as-is; those unique to PATH2 are
/// indented with a tab.
#[derive(Parser, Debug)]
#[command(name = "diffpath")]
pub struct DiffpathCli {
    /// First colon-separated list of directories
    #[arg(value_name = "PATH1")]
    pub path1: String,

    /// Second colon-separated list of directories
    #[arg(value_name = "PATH2")]
    pub path2: String,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Merge devbox JSON files
#[derive(Parser, Debug)]
#[command(name = "devbox-concat")]
pub struct DevboxConcatCli {
    /// JSON files to merge
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}
