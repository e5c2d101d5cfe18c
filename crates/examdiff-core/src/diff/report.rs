//! Report assembly.

use crate::diff::model::{CandidateDiffBuckets, DifferenceReport, FieldDiff};

/// Combine comparator and reconciler output into one report.
///
/// Both inputs are already in their final order; nothing is re-sorted here.
pub fn build_report(meta: Vec<FieldDiff>, candidates: CandidateDiffBuckets) -> DifferenceReport {
    DifferenceReport { meta, candidates }
}
