//! Tooling & Integration Layer
//!
//! Command-line entry points over the rebuild library.

pub mod cli;

pub use cli::{execute, format_summary, run, Cli};
