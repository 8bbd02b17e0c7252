//! Environment variable source: VX_REBUILD prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
///
/// Overrides scalar `RebuildConfig` keys and the `[logging]` table, e.g.
/// `VX_REBUILD__SIDECAR_FILE_NAME=vx.json`, `VX_REBUILD__NOTE_SUFFIX=md`,
/// `VX_REBUILD__DEFAULT_VERSION=3`, `VX_REBUILD__ASSETS_SUFFIX=_assets`,
/// `VX_REBUILD__LOGGING__LEVEL=debug`. The list keys (`built_in_dir_names`,
/// `attachment_roots`) are only settable from a config file.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("VX_REBUILD")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
