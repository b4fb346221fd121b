//! Command-line entry point shared by the augmentation binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::exit_codes;
use crate::io::config::{DEFAULT_CONFIG, load_config};
use crate::logging;
use crate::presets::Preset;
use crate::run::run_preset;

#[derive(Parser, Debug)]
#[command(version, about = "Append synthetic columns to the TEST_CSV_RAW fixture")]
pub struct Cli {
    /// Optional TOML settings file.
    #[arg(long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Fixture file to rewrite (overrides the config's `resource`).
    #[arg(long)]
    pub resource: Option<PathBuf>,
}

/// Parse arguments, run `preset`, and exit with a stable code.
pub fn main(preset: Preset) -> ! {
    logging::init();
    let cli = Cli::parse();
    let code = match run(&cli, preset) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILED
        }
    };
    std::process::exit(code)
}

fn run(cli: &Cli, preset: Preset) -> Result<()> {
    let cfg = load_config(&cli.config).context("load config")?;
    let resource = cli.resource.clone().unwrap_or(cfg.resource);
    debug!(?preset, resource = %resource.display(), "starting augmentation");

    let summary = run_preset(&resource, preset, &cfg.vocabulary, &mut rand::thread_rng())?;
    for line in summary.report_lines() {
        println!("{line}");
    }
    for warning in summary.warning_lines(cfg.warn_malformed) {
        eprintln!("warning: {warning}");
    }
    Ok(())
}
