//! ConfigLoader facade: defaults, optional file, environment overlay.

use super::sources::environment;
use super::RebuildConfig;
use crate::error::Result;
use config::{Config, File};
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults and environment.
    pub fn load() -> Result<RebuildConfig> {
        let builder = Config::builder().add_source(Config::try_from(&RebuildConfig::default())?);
        let builder = environment::add_to_builder(builder)?;
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from a specific file with environment overlay.
    ///
    /// Format is picked from the file extension (toml, json, yaml, ...).
    pub fn load_from_file(path: &Path) -> Result<RebuildConfig> {
        let builder = Config::builder()
            .add_source(Config::try_from(&RebuildConfig::default())?)
            .add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;
        Ok(builder.build()?.try_deserialize()?)
    }
}
