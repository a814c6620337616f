//! Merge rules: defaults, override order, conflict handling.

use crate::config::default_jobs;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key, so a file that only sets
/// `status.version` keeps every other default.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    let jobs = i64::try_from(default_jobs()).unwrap_or(1);
    Config::builder()
        .set_default("status.version", 1)?
        .set_default("status.expand_directory", false)?
        .set_default("status.git_program", "git")?
        .set_default("execution.jobs", jobs)
}
