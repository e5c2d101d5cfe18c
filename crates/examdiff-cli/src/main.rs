//! examdiff CLI
//!
//! Command-line interface for exam session snapshot diffs

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use examdiff_core::config::CONFIG_FILE_NAME;
use examdiff_core::errors::ExError;
use examdiff_core::{logging_facility, DiffConfig};
use examdiff_core_types::RequestContext;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "examdiff")]
#[command(about = "examdiff - Change reports between exam session snapshots", long_about = None)]
struct Cli {
    /// Configuration file (default: ./examdiff.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two snapshot files
    Diff(commands::diff::DiffArgs),
    /// Check that a snapshot file parses and has unique candidate ids
    Validate(commands::validate::ValidateArgs),
}

/// Exit status for any failure; 1 is reserved for `diff --exit-code`
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = RequestContext::new();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(e.into(), &ctx),
    };
    logging_facility::init(config.logging.profile);

    let span = tracing::info_span!("request", request_id = %ctx.request_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, &config),
        Commands::Validate(args) => commands::validate::execute(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => report_error(e, &ctx),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<DiffConfig, ExError> {
    let config = match explicit {
        Some(path) => DiffConfig::load(path)?,
        None => DiffConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?,
    };
    Ok(config)
}

fn report_error(e: Box<dyn std::error::Error>, ctx: &RequestContext) -> ExitCode {
    match e.downcast::<ExError>() {
        Ok(ex) => {
            let ex = (*ex).with_request_id(ctx.request_id.clone());
            eprintln!("Error: {}", ex);
        }
        Err(other) => eprintln!("Error: {}", other),
    }
    ExitCode::from(EXIT_FAILURE)
}
