//! Sidecar file I/O: loading prior state and writing the rebuilt document.

use crate::error::{RebuildError, Result};
use crate::types::NodeConfig;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Previously persisted sidecar contents, kept loosely typed so that
/// malformed fields can be validated one by one.
#[derive(Debug, Clone, Default)]
pub struct ExistingState {
    root: Map<String, Value>,
}

impl ExistingState {
    /// Load the sidecar at `path`.
    ///
    /// Missing, unreadable, unparseable and non-object files all yield an
    /// empty state.
    pub fn load(path: &Path) -> Self {
        if !path.is_file() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to read sidecar {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(root)) => Self { root },
            Ok(_) => {
                debug!("Sidecar {} is not a JSON object, ignoring", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Failed to parse sidecar {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Index the entries of the `files` list by name.
    pub fn files_by_name(&self) -> HashMap<&str, &Map<String, Value>> {
        map_entries_by_name(self.root.get("files"))
    }

    /// Index the entries of the `folders` list by name.
    pub fn folders_by_name(&self) -> HashMap<&str, &Map<String, Value>> {
        map_entries_by_name(self.root.get("folders"))
    }
}

/// Index a list of entries by their `name`. Non-object items and items
/// without a non-empty string name are skipped; the first entry for a
/// duplicated name wins.
fn map_entries_by_name(entries: Option<&Value>) -> HashMap<&str, &Map<String, Value>> {
    let mut result = HashMap::new();
    let Some(Value::Array(items)) = entries else {
        return result;
    };
    for item in items {
        let Value::Object(entry) = item else {
            continue;
        };
        if let Some(Value::String(name)) = entry.get("name") {
            if !name.is_empty() {
                result.entry(name.as_str()).or_insert(entry);
            }
        }
    }
    result
}

/// Render a node config as pretty JSON with a trailing newline.
pub fn render_node_config(config: &NodeConfig) -> Result<String> {
    let mut text = serde_json::to_string_pretty(config)?;
    text.push('\n');
    Ok(text)
}

/// Overwrite the sidecar at `path` with `config`.
pub fn write_node_config(path: &Path, config: &NodeConfig) -> Result<()> {
    let text = render_node_config(config)?;
    std::fs::write(path, text).map_err(|source| RebuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
