//! vx-rebuild CLI Binary
//!
//! Rebuilds every vx.json under a notebook root.

use clap::Parser;
use std::process;
use vx_rebuild::logging::init_logging;
use vx_rebuild::tooling::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&cli, &config) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
