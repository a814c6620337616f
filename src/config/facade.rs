//! Config loading facade: one entry point that assembles every source.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file};
use super::ToolConfig;
use crate::error::ToolError;
use std::path::Path;
use tracing::debug;

/// Loads [`ToolConfig`] from defaults, files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file, then environment variables.
    pub fn load() -> Result<ToolConfig, ToolError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        let config: ToolConfig = builder.build()?.try_deserialize()?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Defaults, then the given file (instead of the global one), then
    /// environment variables.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, ToolError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_explicit_to_builder(builder, path)?;
        let builder = environment::add_to_builder(builder);
        let config: ToolConfig = builder.build()?.try_deserialize()?;
        debug!(?config, config_path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}
