//! Configuration for the rebuild run.
//!
//! Every field has a default matching the notebook application's own layout,
//! so a run without any config file behaves identically to a stock notebook.

mod facade;
pub(crate) mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Rebuild configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildConfig {
    /// Sidecar file written into every included directory
    #[serde(default = "default_sidecar_file_name")]
    pub sidecar_file_name: String,

    /// Extension (without the dot) identifying note files, compared lowercased
    #[serde(default = "default_note_suffix")]
    pub note_suffix: String,

    /// Version written when existing state carries no integer version
    #[serde(default = "default_version")]
    pub default_version: i64,

    /// Suffix marking per-note resource folders, compared lowercased
    #[serde(default = "default_assets_suffix")]
    pub assets_suffix: String,

    /// Directory names the notebook application reserves for itself
    #[serde(default = "default_built_in_dir_names")]
    pub built_in_dir_names: Vec<String>,

    /// Attachment root names looked up inside a note's assets folder, in order
    #[serde(default = "default_attachment_roots")]
    pub attachment_roots: Vec<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_sidecar_file_name() -> String {
    "vx.json".to_string()
}

fn default_note_suffix() -> String {
    "md".to_string()
}

fn default_version() -> i64 {
    3
}

fn default_assets_suffix() -> String {
    "_assets".to_string()
}

fn default_built_in_dir_names() -> Vec<String> {
    [
        "vx_notebook",
        "vx_recycle_bin",
        "vx_images",
        "vx_attachments",
        "_v_images",
        "_v_attachments",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_attachment_roots() -> Vec<String> {
    vec!["vx_attachments".to_string(), "_v_attachments".to_string()]
}

impl Default for RebuildConfig {
    fn default() -> Self {
        Self {
            sidecar_file_name: default_sidecar_file_name(),
            note_suffix: default_note_suffix(),
            default_version: default_version(),
            assets_suffix: default_assets_suffix(),
            built_in_dir_names: default_built_in_dir_names(),
            attachment_roots: default_attachment_roots(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RebuildConfig {
    /// Whether `name` is one of the reserved built-in directory names.
    pub fn is_built_in_dir(&self, name: &str) -> bool {
        let low = name.to_lowercase();
        self.built_in_dir_names
            .iter()
            .any(|reserved| reserved.to_lowercase() == low)
    }
}
