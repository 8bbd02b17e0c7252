//! Reconciliation of scanned filesystem state with existing sidecar state.
//!
//! Stable fields (ids, signatures, creation times, tags, styling) are carried
//! forward when valid; derived fields (child lists, modification times) are
//! always recomputed.

use crate::attachments::infer_attachment_folder;
use crate::config::RebuildConfig;
use crate::scanner::{ScanResult, ScannedEntry};
use crate::sidecar::ExistingState;
use crate::signature::{generate_signature, parse_id_like, parse_signature_like, SignatureSource};
use crate::types::{FileEntry, FolderEntry, NodeConfig, VisualStyle};
use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Format a point in time as ISO-8601 UTC at second precision with a `Z` suffix.
pub fn iso_utc(time: SystemTime) -> String {
    let dt: DateTime<Utc> = time.into();
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Modification time of `path`, or now if it cannot be read.
pub fn safe_mtime(path: &Path) -> SystemTime {
    match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(e) => {
            debug!("Falling back to current time for {}: {}", path.display(), e);
            SystemTime::now()
        }
    }
}

fn existing_time(existing: &Map<String, Value>, key: &str, fallback: SystemTime) -> String {
    match existing.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => iso_utc(fallback),
    }
}

fn non_empty_string(existing: &Map<String, Value>, key: &str) -> Option<String> {
    match existing.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Copy visual keys that hold non-empty strings.
pub fn visual_style(existing: &Map<String, Value>) -> VisualStyle {
    VisualStyle {
        background_color: non_empty_string(existing, "background_color"),
        border_color: non_empty_string(existing, "border_color"),
        name_color: non_empty_string(existing, "name_color"),
    }
}

/// Keep only non-empty string tags, in order.
pub fn clean_tags(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|tag| match tag {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .collect()
}

pub fn build_folder_entry(name: &str, existing: &Map<String, Value>) -> FolderEntry {
    FolderEntry {
        name: name.to_string(),
        style: visual_style(existing),
    }
}

pub fn build_file_entry(
    note: &ScannedEntry,
    existing: &Map<String, Value>,
    config: &RebuildConfig,
    signatures: &mut dyn SignatureSource,
) -> FileEntry {
    let mtime = safe_mtime(&note.path);
    let attachment_folder = non_empty_string(existing, "attachment_folder")
        .unwrap_or_else(|| infer_attachment_folder(&note.path, config));

    FileEntry {
        name: note.name.clone(),
        id: parse_id_like(existing.get("id")).unwrap_or_else(|| "0".to_string()),
        signature: parse_signature_like(existing.get("signature"))
            .unwrap_or_else(|| generate_signature(signatures)),
        created_time: existing_time(existing, "created_time", mtime),
        modified_time: iso_utc(mtime),
        tags: clean_tags(existing.get("tags")),
        attachment_folder,
        style: visual_style(existing),
    }
}

/// Build the new sidecar document for `dir`.
pub fn build_node_config(
    dir: &Path,
    scan: &ScanResult,
    existing: &ExistingState,
    config: &RebuildConfig,
    signatures: &mut dyn SignatureSource,
) -> NodeConfig {
    let empty = Map::new();
    let mtime = safe_mtime(dir);
    let existing_files = existing.files_by_name();
    let existing_folders = existing.folders_by_name();

    let folders = scan
        .folders
        .iter()
        .map(|folder| {
            let prior = existing_folders.get(folder.name.as_str()).copied();
            build_folder_entry(&folder.name, prior.unwrap_or(&empty))
        })
        .collect();
    let files = scan
        .notes
        .iter()
        .map(|note| {
            let prior = existing_files.get(note.name.as_str()).copied();
            build_file_entry(note, prior.unwrap_or(&empty), config, signatures)
        })
        .collect();

    let version = match existing.get("version") {
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => n.clone(),
        _ => Number::from(config.default_version),
    };

    NodeConfig {
        version,
        id: parse_id_like(existing.get("id")).unwrap_or_else(|| "0".to_string()),
        signature: parse_signature_like(existing.get("signature"))
            .unwrap_or_else(|| generate_signature(signatures)),
        created_time: existing_time(existing.fields(), "created_time", mtime),
        modified_time: iso_utc(mtime),
        files,
        folders,
        style: visual_style(existing.fields()),
    }
}
