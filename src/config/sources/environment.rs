//! Environment source: `GITIGNORED_<SECTION>__<KEY>`, e.g.
//! `GITIGNORED_STATUS__VERSION=2` or `GITIGNORED_EXECUTION__JOBS=1`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "GITIGNORED";

/// Add the environment source to the builder.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
