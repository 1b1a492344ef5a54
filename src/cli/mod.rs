//! Command-line front end: config resolution, logging setup and the run itself.

pub mod args;
pub mod exit_status;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::pipeline;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (tests, embedding); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the config file (explicit, or the default one in `dir`) and apply CLI overrides.
pub fn resolve_config(args: &Arguments, dir: &Path) -> Result<Config> {
    let mut config =
        Config::load(args.config.as_deref(), dir).context("Failed to load configuration")?;

    if let Some(manifest) = &args.manifest {
        config.base_report_class_info_path = Some(manifest.clone());
    }
    if let Some(output_folder) = &args.output_folder {
        config.output_folder = Some(output_folder.clone());
    }
    if let Some(policy) = args.on_parse_failure {
        config.on_parse_failure = policy;
    }
    if args.strict_syntax {
        config.strict_syntax = true;
    }
    if args.parallel {
        config.parallel = true;
    }

    Ok(config)
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = resolve_config(&args, &cwd)?;
    let summary = pipeline::run(&config)?;

    info!(
        "Done: {} manifest entries, {} processed, {} missing, {} skipped, {} controls in {} reports",
        summary.manifest_entries,
        summary.processed_files,
        summary.missing_files,
        summary.failed_files,
        summary.control_records,
        summary.report_entries
    );
    Ok(ExitStatus::Success)
}
