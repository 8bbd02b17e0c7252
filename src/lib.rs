//! vx-rebuild: regenerate notebook sidecar metadata
//!
//! Walks a notebook tree and rewrites each folder's `vx.json`, merging the
//! folders and notes found on disk with identifiers, signatures, timestamps,
//! tags and styling already recorded in the previous sidecar.

pub mod attachments;
pub mod config;
pub mod error;
pub mod logging;
pub mod rebuild;
pub mod reconcile;
pub mod scanner;
pub mod sidecar;
pub mod signature;
pub mod tooling;
pub mod types;

pub use error::{RebuildError, Result};
pub use rebuild::{RebuildOptions, RebuildSummary, Rebuilder};
pub use types::{FileEntry, FolderEntry, NodeConfig, VisualStyle};
