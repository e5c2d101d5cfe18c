//! Candidate reconciliation.
//!
//! Candidates from both snapshots are tagged with the side they came from,
//! grouped by id, and each group is classified on its own:
//!
//! | occurrences | classification |
//! |---|---|
//! | one, `Before` | removed |
//! | one, `After` | added |
//! | two, field-wise equal | unchanged (no entry) |
//! | two, different | edited |
//! | anything else | no entry |
//!
//! The last row only happens when an id repeats within one snapshot. The
//! reconciler stays total in that case and drops the id; callers that want a
//! hard failure run [`validate_unique_ids`] first.

use std::collections::BTreeMap;

use crate::diff::model::{CandidateChange, CandidateDiffBuckets};
use crate::errors::{ExamDiffError, Result};
use crate::model::{Candidate, CandidateId, CandidateSide};

/// One candidate occurrence tagged with its snapshot side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged<'a> {
    pub side: CandidateSide,
    pub candidate: &'a Candidate,
}

/// Group tagged occurrences from both sides by candidate id.
///
/// Within a group, `Before` occurrences precede `After` ones, each in input
/// order.
pub fn group_by_id<'a>(
    before: &'a [Candidate],
    after: &'a [Candidate],
) -> BTreeMap<CandidateId, Vec<Tagged<'a>>> {
    let tagged_before = before.iter().map(|candidate| Tagged {
        side: CandidateSide::Before,
        candidate,
    });
    let tagged_after = after.iter().map(|candidate| Tagged {
        side: CandidateSide::After,
        candidate,
    });

    let mut groups: BTreeMap<CandidateId, Vec<Tagged<'a>>> = BTreeMap::new();
    for tagged in tagged_before.chain(tagged_after) {
        groups.entry(tagged.candidate.id).or_default().push(tagged);
    }
    groups
}

/// Classify one id's group of occurrences. `None` means no report entry.
pub fn classify_group(group: &[Tagged<'_>]) -> Option<CandidateChange> {
    match group {
        [only] => Some(match only.side {
            CandidateSide::Before => CandidateChange::Removed,
            CandidateSide::After => CandidateChange::Added,
        }),
        [first, second] => {
            (first.candidate != second.candidate).then_some(CandidateChange::Edited)
        }
        _ => None,
    }
}

/// Match candidates across two snapshots by id and bucket the changes.
///
/// Every bucket is sorted by ascending id.
pub fn reconcile_candidates(before: &[Candidate], after: &[Candidate]) -> CandidateDiffBuckets {
    let mut buckets = CandidateDiffBuckets::default();

    for (id, group) in group_by_id(before, after) {
        match classify_group(&group) {
            Some(change) => {
                if change == CandidateChange::Edited {
                    let changed = group[0].candidate.changed_fields(group[1].candidate);
                    tracing::debug!(candidate_id = id, ?change, ?changed, "candidate classified");
                } else {
                    tracing::debug!(candidate_id = id, ?change, "candidate classified");
                }
                buckets.push(change, id);
            }
            None if group.len() > 2 => {
                tracing::debug!(
                    candidate_id = id,
                    occurrences = group.len(),
                    "candidate id repeated within a snapshot; no entry emitted"
                );
            }
            None => {}
        }
    }

    buckets
}

/// Ids that occur more than once in `candidates`, ascending, with counts.
pub fn find_duplicate_ids(candidates: &[Candidate]) -> Vec<(CandidateId, usize)> {
    let mut counts: BTreeMap<CandidateId, usize> = BTreeMap::new();
    for c in candidates {
        *counts.entry(c.id).or_insert(0) += 1;
    }
    counts.into_iter().filter(|(_, n)| *n > 1).collect()
}

/// Check that candidate ids are unique within one snapshot.
///
/// # Errors
///
/// `DuplicateCandidateId` for the smallest repeated id.
pub fn validate_unique_ids(side: CandidateSide, candidates: &[Candidate]) -> Result<()> {
    match find_duplicate_ids(candidates).first() {
        Some(&(candidate_id, occurrences)) => Err(ExamDiffError::DuplicateCandidateId {
            candidate_id,
            side,
            occurrences,
        }),
        None => Ok(()),
    }
}
