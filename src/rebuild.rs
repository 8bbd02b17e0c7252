//! Recursive rebuild of every sidecar under a notebook root.
//!
//! Pre-order, depth-first: a directory is loaded, scanned, reconciled and
//! written before any of its sub-folders are visited.

use crate::config::RebuildConfig;
use crate::error::{RebuildError, Result};
use crate::reconcile::build_node_config;
use crate::scanner::scan_dir;
use crate::sidecar::{write_node_config, ExistingState};
use crate::signature::SignatureSource;
use std::io::{ErrorKind, Write};
use std::ops::AddAssign;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Run options taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RebuildOptions {
    /// Scan and reconcile, but write nothing
    pub dry_run: bool,
    /// Report every visited directory
    pub verbose: bool,
}

/// Totals accumulated over a (sub)tree.
///
/// `configs` counts sidecars actually written (or, in a dry run, that would
/// have been); a directory whose write failed still contributes its scanned
/// folders and notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    pub configs: usize,
    pub folders: usize,
    pub notes: usize,
}

impl AddAssign for RebuildSummary {
    fn add_assign(&mut self, other: Self) {
        self.configs += other.configs;
        self.folders += other.folders;
        self.notes += other.notes;
    }
}

/// Resolve the notebook root to an absolute directory path.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let resolved = dunce::canonicalize(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RebuildError::RootNotDirectory {
            path: path.to_path_buf(),
        },
        _ => RebuildError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    if !resolved.is_dir() {
        return Err(RebuildError::RootNotDirectory { path: resolved });
    }
    Ok(resolved)
}

/// Drives load, scan, reconcile and write over a whole tree.
pub struct Rebuilder<'a> {
    config: &'a RebuildConfig,
    options: RebuildOptions,
    signatures: &'a mut dyn SignatureSource,
    report: &'a mut dyn Write,
}

impl<'a> Rebuilder<'a> {
    pub fn new(
        config: &'a RebuildConfig,
        options: RebuildOptions,
        signatures: &'a mut dyn SignatureSource,
        report: &'a mut dyn Write,
    ) -> Self {
        Self {
            config,
            options,
            signatures,
            report,
        }
    }

    /// Rebuild the tree rooted at `root`, which must be an existing directory.
    ///
    /// Only a non-directory root or a broken report stream ends the run early.
    pub fn run(&mut self, root: &Path) -> Result<RebuildSummary> {
        if !root.is_dir() {
            return Err(RebuildError::RootNotDirectory {
                path: root.to_path_buf(),
            });
        }
        let summary = self.rebuild_dir(root)?;
        info!(
            configs = summary.configs,
            folders = summary.folders,
            notes = summary.notes,
            dry_run = self.options.dry_run,
            "Rebuild finished"
        );
        Ok(summary)
    }

    fn rebuild_dir(&mut self, dir: &Path) -> Result<RebuildSummary> {
        let sidecar_path = dir.join(&self.config.sidecar_file_name);
        let existing = ExistingState::load(&sidecar_path);
        let scan = scan_dir(dir, self.config);
        let node = build_node_config(dir, &scan, &existing, self.config, &mut *self.signatures);

        debug!(
            path = %sidecar_path.display(),
            folders = scan.folders.len(),
            notes = scan.notes.len(),
            had_existing = !existing.is_empty(),
            "Reconciled directory"
        );

        if self.options.verbose || self.options.dry_run {
            writeln!(
                self.report,
                "{}  folders={} md={}",
                sidecar_path.display(),
                scan.folders.len(),
                scan.notes.len()
            )
            .map_err(RebuildError::Report)?;
        }
        let mut configs = 1;
        if !self.options.dry_run {
            if let Err(e) = write_node_config(&sidecar_path, &node) {
                warn!("Failed to write sidecar {}: {}", sidecar_path.display(), e);
                configs = 0;
            }
        }

        let mut summary = RebuildSummary {
            configs,
            folders: scan.folders.len(),
            notes: scan.notes.len(),
        };
        for folder in &scan.folders {
            summary += self.rebuild_dir(&folder.path)?;
        }
        Ok(summary)
    }
}
