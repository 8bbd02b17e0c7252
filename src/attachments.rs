//! Attachment folder inference for notes that have none recorded.

use crate::config::RebuildConfig;
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

/// Infer a note's attachment folder from `<stem><assets_suffix>/<root>/<single dir>`.
///
/// Roots are tried in configured order and the first one holding exactly one
/// sub-directory wins. Returns an empty string when nothing unambiguous is found.
pub fn infer_attachment_folder(note_path: &Path, config: &RebuildConfig) -> String {
    let (Some(parent), Some(stem)) = (note_path.parent(), note_path.file_stem()) else {
        return String::new();
    };
    let mut assets_name = stem.to_os_string();
    assets_name.push(&config.assets_suffix);
    let assets_root = parent.join(assets_name);
    if !assets_root.is_dir() {
        return String::new();
    }

    for root_name in &config.attachment_roots {
        let root = assets_root.join(root_name);
        if !root.is_dir() {
            continue;
        }
        let subdirs = list_subdirs(&root);
        if let [only] = subdirs.as_slice() {
            match only.to_str() {
                Some(name) => return name.to_string(),
                None => {
                    debug!("Attachment folder name is not UTF8: {:?}", only);
                    return String::new();
                }
            }
        }
        debug!(
            "Ambiguous attachment root {} ({} candidates)",
            root.display(),
            subdirs.len()
        );
    }
    String::new()
}

/// Every sub-directory name under `dir`, UTF8 or not, so that the candidate
/// count is never understated.
fn list_subdirs(dir: &Path) -> Vec<OsString> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name())
        .collect()
}
