//! Configuration System
//!
//! Layered configuration for the toolkit: built-in defaults, then the user's
//! global config file, then `GITIGNORED_*` environment variables. CLI flags
//! are applied last by the binaries.

use crate::error::ToolError;
use crate::git::status::{PorcelainVersion, StatusOptions};
use crate::logging::LoggingConfig;
use crate::strategy::ExecutionStrategy;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// How `git status` is invoked
    #[serde(default)]
    pub status: StatusConfig,

    /// How status queries are scheduled
    #[serde(default)]
    pub execution: ExecutionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Status query settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Porcelain format version (1 or 2)
    #[serde(default = "default_porcelain_version")]
    pub version: u8,

    /// List files inside ignored directories instead of the directory itself
    #[serde(default)]
    pub expand_directory: bool,

    /// Program used to run `git`
    #[serde(default = "default_git_program")]
    pub git_program: String,
}

fn default_porcelain_version() -> u8 {
    1
}

fn default_git_program() -> String {
    "git".to_string()
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            version: default_porcelain_version(),
            expand_directory: false,
            git_program: default_git_program(),
        }
    }
}

/// Execution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Maximum number of status queries in flight; 1 runs them sequentially
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

/// Available parallelism, or 1 when it cannot be determined.
pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
        }
    }
}

impl StatusConfig {
    /// Validate and convert into the options a status query runs with.
    pub fn to_options(&self) -> Result<StatusOptions, ToolError> {
        if self.git_program.trim().is_empty() {
            return Err(ToolError::Config("git_program cannot be empty".to_string()));
        }
        Ok(StatusOptions {
            version: PorcelainVersion::try_from(self.version)?,
            expand_directory: self.expand_directory,
            git_program: self.git_program.clone(),
        })
    }
}

impl ExecutionConfig {
    /// Map the job count onto an execution strategy.
    pub fn to_strategy(&self) -> Result<ExecutionStrategy, ToolError> {
        let jobs = NonZeroUsize::new(self.jobs)
            .ok_or_else(|| ToolError::Config("jobs must be at least 1".to_string()))?;
        Ok(ExecutionStrategy::from_jobs(jobs))
    }
}

impl ToolConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ToolError>> {
        let mut errors = Vec::new();
        if let Err(e) = self.status.to_options() {
            errors.push(e);
        }
        if let Err(e) = self.execution.to_strategy() {
            errors.push(e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
