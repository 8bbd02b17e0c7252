//! Single-level directory scanning.
//!
//! Classifies the children of one directory into included sub-folders and
//! included notes. Never recurses.

use crate::config::RebuildConfig;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// A child kept by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Included children of one directory, each list in case-insensitive name order.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub folders: Vec<ScannedEntry>,
    pub notes: Vec<ScannedEntry>,
}

/// Whether a directory named `name` is left out of the notebook.
pub fn should_exclude_dir(name: &str, config: &RebuildConfig) -> bool {
    if name.starts_with('.') {
        return true;
    }
    if name.to_lowercase().ends_with(&config.assets_suffix.to_lowercase()) {
        return true;
    }
    config.is_built_in_dir(name)
}

/// Whether a regular file at `path` is a note.
pub fn is_note_file(path: &Path, config: &RebuildConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase() == config.note_suffix.to_lowercase())
        .unwrap_or(false)
}

/// Case-insensitive name order, ties broken by the raw name.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Scan the immediate children of `dir`.
///
/// A listing failure is logged and yields whatever was read so far.
pub fn scan_dir(dir: &Path, config: &RebuildConfig) -> ScanResult {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read directory entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => {
                warn!("Skipping non UTF8 name: {:?}", entry.path());
                continue;
            }
        };
        if name == config.sidecar_file_name {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            continue;
        }

        if file_type.is_dir() {
            if !should_exclude_dir(&name, config) {
                result.folders.push(ScannedEntry {
                    name,
                    path: entry.into_path(),
                });
            }
        } else if file_type.is_file() && is_note_file(entry.path(), config) {
            result.notes.push(ScannedEntry {
                name,
                path: entry.into_path(),
            });
        }
    }

    result.folders.sort_by(|a, b| compare_names(&a.name, &b.name));
    result.notes.sort_by(|a, b| compare_names(&a.name, &b.name));
    result
}
