//! Core types for the vx.json sidecar document.
//!
//! Field order in these structs is the key order written to disk.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Optional visual styling carried by folders, notes and node configs.
///
/// Values are only ever passed through from existing state; absent keys are
/// omitted from output rather than written as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_color: Option<String>,
}

/// One note file listed in a folder's sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub id: String,
    pub signature: String,
    pub created_time: String,
    pub modified_time: String,
    pub tags: Vec<String>,
    pub attachment_folder: String,
    #[serde(flatten)]
    pub style: VisualStyle,
}

/// One included sub-folder. Identity and timestamps live in the
/// sub-folder's own [`NodeConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub name: String,
    #[serde(flatten)]
    pub style: VisualStyle,
}

/// The per-directory sidecar document (`vx.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Any JSON integer, signed or unsigned
    pub version: Number,
    pub id: String,
    pub signature: String,
    pub created_time: String,
    pub modified_time: String,
    pub files: Vec<FileEntry>,
    pub folders: Vec<FolderEntry>,
    #[serde(flatten)]
    pub style: VisualStyle,
}
