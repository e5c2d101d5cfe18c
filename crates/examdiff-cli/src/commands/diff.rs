//! Diff command
//!
//! Usage: examdiff diff --before <FILE> --after <FILE> [--format json|pretty|summary] [--output <FILE>]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, ValueEnum};
use examdiff_core::diff::{compute_diff, render_human_summary, DuplicateIdPolicy};
use examdiff_core::display::ZonedRenderer;
use examdiff_core::errors::{ExError, ExamDiffError};
use examdiff_core::{DiffConfig, DifferenceReport};

use super::{read_input, write_output};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON report
    #[default]
    Json,
    /// Indented JSON report
    Pretty,
    /// Markdown summary for humans
    Summary,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Snapshot before the change
    #[arg(long)]
    pub before: PathBuf,

    /// Snapshot after the change
    #[arg(long)]
    pub after: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// IANA zone for changed timestamps; overrides `display.timezone`
    #[arg(long)]
    pub timezone: Option<String>,

    /// Reconcile even if a candidate id repeats within one snapshot
    #[arg(long)]
    pub allow_duplicate_ids: bool,

    /// Compare metadata and reconcile candidates on separate threads
    #[arg(long)]
    pub parallel: bool,

    /// Exit with status 1 when the report is not empty
    #[arg(long)]
    pub exit_code: bool,
}

/// Execute diff command
pub fn execute(args: DiffArgs, config: &DiffConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut options = config.diff_options();
    if args.allow_duplicate_ids {
        options.duplicate_ids = DuplicateIdPolicy::Ignore;
    }
    options.parallel |= args.parallel;

    let renderer = match &args.timezone {
        Some(name) => ZonedRenderer::from_name(name),
        None => config.renderer(),
    }
    .map_err(ExError::from)?;

    let before = read_input(&args.before)?;
    let after = read_input(&args.after)?;
    let report = compute_diff(&before, &after, &options, &renderer)?;

    let rendered = render(&report, args.format)?;
    if let Some(output_path) = &args.output {
        write_output(output_path, &rendered)?;
        eprintln!("Report written to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }

    if args.exit_code && !report.is_empty() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn render(report: &DifferenceReport, format: OutputFormat) -> Result<String, ExError> {
    let encoded = match format {
        OutputFormat::Json => serde_json::to_string(report),
        OutputFormat::Pretty => serde_json::to_string_pretty(report),
        OutputFormat::Summary => return Ok(render_human_summary(report)),
    };
    let mut out = encoded
        .map_err(|e| ExError::from(ExamDiffError::from(e)).with_op("render_report"))?;
    out.push('\n');
    Ok(out)
}
