//! Validate command
//!
//! Usage: examdiff validate <FILE>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use examdiff_core::diff::reconcile::find_duplicate_ids;
use examdiff_core::errors::{ExError, ExErrorKind};
use examdiff_core::parse::parse_snapshot_bytes;

use super::read_input;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Snapshot file to check
    pub file: PathBuf,
}

/// Execute validate command
pub fn execute(args: ValidateArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let bytes = read_input(&args.file)?;
    let snapshot = parse_snapshot_bytes(&bytes)?;

    let duplicates = find_duplicate_ids(&snapshot.candidates);
    if let Some(&(first, _)) = duplicates.first() {
        let listed: Vec<String> = duplicates
            .iter()
            .map(|(id, n)| format!("{} (x{})", id, n))
            .collect();
        return Err(ExError::new(ExErrorKind::DuplicateCandidateId)
            .with_op("validate")
            .with_entity_id(first.to_string())
            .with_message(format!("repeated candidate ids: {}", listed.join(", ")))
            .into());
    }

    tracing::debug!(file = %args.file.display(), "snapshot validated");
    println!(
        "OK {}: \"{}\", {} candidates",
        args.file.display(),
        snapshot.meta.title,
        snapshot.candidates.len()
    );
    Ok(ExitCode::SUCCESS)
}
