use std::fs;
use std::path::Path;

use clap::Parser;
use vx_rebuild::config::RebuildConfig;
use vx_rebuild::signature::SignatureSource;
use vx_rebuild::tooling::cli::{execute, Cli};
use vx_rebuild::RebuildSummary;

/// Deterministic signature source counting upward from a seed.
pub struct CountingSource(pub u64);

impl SignatureSource for CountingSource {
    fn next_u64(&mut self) -> u64 {
        self.0 += 2;
        self.0
    }
}

/// Run the CLI against `root` with extra flags, returning the summary and stdout text.
pub fn run_cli(root: &Path, flags: &[&str]) -> (RebuildSummary, String) {
    let mut args = vec!["vx-rebuild".to_string(), root.display().to_string()];
    args.extend(flags.iter().map(|f| f.to_string()));
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let summary = execute(
        &cli,
        &RebuildConfig::default(),
        &mut CountingSource(1_000),
        &mut out,
    )
    .unwrap();
    (summary, String::from_utf8(out).unwrap())
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

pub fn names(list: &serde_json::Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}
