//! CLI Tooling
//!
//! Command-line surface for rebuilding a notebook's sidecar files.

use crate::config::{ConfigLoader, RebuildConfig};
use crate::error::{RebuildError, Result};
use crate::rebuild::{resolve_root, RebuildOptions, RebuildSummary, Rebuilder};
use crate::signature::{OsSignatureSource, SignatureSource};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Rebuild vx.json recursively by scanning folders and markdown files
#[derive(Parser, Debug)]
#[command(name = "vx-rebuild")]
#[command(about = "Rebuild vx.json recursively by scanning folders and markdown files")]
pub struct Cli {
    /// Notebook root directory path
    pub notebook_root: PathBuf,

    /// Only print what would be generated, without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print each generated vx.json path with counters
    #[arg(long)]
    pub verbose: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load configuration and fold CLI logging overrides into it.
    pub fn load_config(&self) -> Result<RebuildConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(config)
    }

    pub fn options(&self) -> RebuildOptions {
        RebuildOptions {
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

/// Format the three closing summary lines.
pub fn format_summary(summary: &RebuildSummary, dry_run: bool) -> String {
    let mode = if dry_run { "Dry-run" } else { "Rebuilt" };
    format!(
        "{} vx.json count: {}\nScanned folder count: {}\nScanned markdown count: {}",
        mode, summary.configs, summary.folders, summary.notes
    )
}

/// Resolve the root and run the rebuild, writing the report and summary to `out`.
pub fn execute(
    cli: &Cli,
    config: &RebuildConfig,
    signatures: &mut dyn SignatureSource,
    out: &mut dyn Write,
) -> Result<RebuildSummary> {
    let root = resolve_root(&cli.notebook_root)?;
    info!(root = %root.display(), dry_run = cli.dry_run, "Rebuilding sidecars");

    let summary = Rebuilder::new(config, cli.options(), signatures, &mut *out).run(&root)?;
    writeln!(out, "{}", format_summary(&summary, cli.dry_run)).map_err(RebuildError::Report)?;
    Ok(summary)
}

/// Entry point used by the binary: OS randomness, report to stdout.
pub fn run(cli: &Cli, config: &RebuildConfig) -> Result<RebuildSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, config, &mut OsSignatureSource, &mut out)
}
