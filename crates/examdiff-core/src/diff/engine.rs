//! Diff engine entry points.
//!
//! [`diff_snapshots`] is the canonical path: precondition check, metadata
//! comparison, candidate reconciliation, report assembly. [`compute_diff`]
//! and [`diff_json`] add the parsing boundary in front of it.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging (`log_op_start!` / `log_op_end!` /
//! `log_op_error!`). The comparator and reconciler only emit `debug!`.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diff::meta::compare_meta;
use crate::diff::model::{CandidateDiffBuckets, DifferenceReport, FieldDiff};
use crate::diff::reconcile::{reconcile_candidates, validate_unique_ids};
use crate::diff::report::build_report;
use crate::display::TimestampRenderer;
use crate::errors::{ExError, ExErrorKind};
use crate::model::{CandidateSide, Snapshot};
use crate::parse::{parse_snapshot_bytes, parse_snapshot_value};
use crate::{log_op_end, log_op_error, log_op_start};

/// What to do when a candidate id repeats within one snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Fail the diff with `ERR_DUPLICATE_CANDIDATE_ID`
    #[default]
    Reject,
    /// Reconcile anyway; the repeated id gets no report entry
    Ignore,
}

/// Knobs for a single diff request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub duplicate_ids: DuplicateIdPolicy,
    /// Run the comparator and reconciler on separate threads
    pub parallel: bool,
}

/// Diff two parsed snapshots.
///
/// # Errors
///
/// - `DuplicateCandidateId`: an id repeats within one side and the policy
///   is [`DuplicateIdPolicy::Reject`]
/// - `DeterminismViolation`: the report failed its JSON round-trip guard
///   (unreachable for the current report types)
/// - `Internal`: a worker thread panicked in parallel mode
pub fn diff_snapshots(
    before: &Snapshot,
    after: &Snapshot,
    options: &DiffOptions,
    renderer: &dyn TimestampRenderer,
) -> Result<DifferenceReport, ExError> {
    log_op_start!(
        "diff_snapshots",
        before_candidates = before.candidates.len() as u64,
        after_candidates = after.candidates.len() as u64,
        parallel = options.parallel
    );
    let start = Instant::now();

    let report = diff_snapshots_impl(before, after, options, renderer).map_err(|e| {
        log_op_error!(
            "diff_snapshots",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "diff_snapshots",
        duration_ms = start.elapsed().as_millis() as u64,
        meta_changes = report.meta.len() as u64,
        added = report.candidates.added.len() as u64,
        removed = report.candidates.removed.len() as u64,
        edited = report.candidates.edited.len() as u64
    );

    Ok(report)
}

fn diff_snapshots_impl(
    before: &Snapshot,
    after: &Snapshot,
    options: &DiffOptions,
    renderer: &dyn TimestampRenderer,
) -> Result<DifferenceReport, ExError> {
    if options.duplicate_ids == DuplicateIdPolicy::Reject {
        for (side, snapshot) in [(CandidateSide::Before, before), (CandidateSide::After, after)] {
            validate_unique_ids(side, &snapshot.candidates)
                .map_err(|e| ExError::from(e).with_op("diff_snapshots"))?;
        }
    }

    let (meta, candidates) = run_components(before, after, options.parallel, renderer)?;
    let report = build_report(meta, candidates);

    check_round_trip(&report)?;
    Ok(report)
}

fn run_components(
    before: &Snapshot,
    after: &Snapshot,
    parallel: bool,
    renderer: &dyn TimestampRenderer,
) -> Result<(Vec<FieldDiff>, CandidateDiffBuckets), ExError> {
    if !parallel {
        let meta = compare_meta(&before.meta, &after.meta, renderer);
        let candidates = reconcile_candidates(&before.candidates, &after.candidates);
        return Ok((meta, candidates));
    }

    std::thread::scope(|scope| {
        let meta_worker = scope.spawn(|| compare_meta(&before.meta, &after.meta, renderer));
        let candidates = reconcile_candidates(&before.candidates, &after.candidates);
        let meta = meta_worker.join().map_err(|_| {
            ExError::new(ExErrorKind::Internal)
                .with_op("diff_snapshots")
                .with_message("metadata comparison worker panicked")
        })?;
        Ok((meta, candidates))
    })
}

/// Determinism guard: the report must survive a JSON round-trip unchanged.
///
/// Every current report field (strings, `i64` ids, unit enums) round-trips
/// exactly, so this never fails today. It trips if a report field with a
/// lossy JSON form (floats, non-string map keys, skipped fields) is added.
fn check_round_trip(report: &DifferenceReport) -> Result<(), ExError> {
    let serialized = serde_json::to_string(report).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("diff_snapshots")
            .with_message(format!("failed to serialize report: {}", e))
    })?;
    let reparsed: DifferenceReport = serde_json::from_str(&serialized).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("diff_snapshots")
            .with_message(format!("failed to re-parse report: {}", e))
    })?;
    if &reparsed != report {
        return Err(ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("diff_snapshots")
            .with_message("report is not deterministic: round-trip produced different struct"));
    }
    Ok(())
}

/// Parse two raw snapshot documents and diff them.
///
/// # Errors
///
/// Any parsing error from [`parse_snapshot_bytes`] (tagged with the side it
/// came from), plus everything [`diff_snapshots`] can return.
pub fn compute_diff(
    before_bytes: &[u8],
    after_bytes: &[u8],
    options: &DiffOptions,
    renderer: &dyn TimestampRenderer,
) -> Result<DifferenceReport, ExError> {
    let before = parse_snapshot_bytes(before_bytes).map_err(|e| e.with_side(CandidateSide::Before))?;
    let after = parse_snapshot_bytes(after_bytes).map_err(|e| e.with_side(CandidateSide::After))?;
    diff_snapshots(&before, &after, options, renderer)
}

/// JSON in, JSON out: diff two snapshot documents already held as values.
///
/// # Errors
///
/// Same as [`compute_diff`], plus `Serialization` if the report cannot be
/// converted back into a JSON value.
pub fn diff_json(
    before: &Value,
    after: &Value,
    options: &DiffOptions,
    renderer: &dyn TimestampRenderer,
) -> Result<Value, ExError> {
    let before = parse_snapshot_value(before).map_err(|e| e.with_side(CandidateSide::Before))?;
    let after = parse_snapshot_value(after).map_err(|e| e.with_side(CandidateSide::After))?;
    let report = diff_snapshots(&before, &after, options, renderer)?;
    serde_json::to_value(&report).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("diff_json")
            .with_message(format!("failed to encode report: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::{CandidateChange, MetaField};

    #[test]
    fn test_round_trip_guard_accepts_populated_report() {
        let mut candidates = CandidateDiffBuckets::default();
        candidates.push(CandidateChange::Added, i64::MAX);
        candidates.push(CandidateChange::Removed, i64::MIN);
        candidates.push(CandidateChange::Edited, 0);
        let report = build_report(
            vec![FieldDiff::new(MetaField::Title, "a | \"b\"", "ø\n")],
            candidates,
        );
        assert!(check_round_trip(&report).is_ok());
        assert!(check_round_trip(&DifferenceReport::default()).is_ok());
    }
}
