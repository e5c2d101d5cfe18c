//! Difference report types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Every `Vec` is kept in a documented deterministic order so that the
//! serialized report is byte-stable for identical inputs.

use serde::{Deserialize, Serialize};

use crate::model::CandidateId;

/// A metadata field that participates in the diff.
///
/// Declaration order is the order of entries in [`DifferenceReport::meta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetaField {
    Title,
    StartTime,
    EndTime,
}

impl MetaField {
    pub const ALL: [MetaField; 3] = [MetaField::Title, MetaField::StartTime, MetaField::EndTime];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetaField::Title => "title",
            MetaField::StartTime => "startTime",
            MetaField::EndTime => "endTime",
        }
    }
}

impl std::fmt::Display for MetaField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One changed metadata field with its rendered old and new value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: MetaField,
    pub before: String,
    pub after: String,
}

impl FieldDiff {
    pub fn new(field: MetaField, before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            field,
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Bucket entry; serializes as `{ "id": <integer> }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateRef {
    pub id: CandidateId,
}

impl From<CandidateId> for CandidateRef {
    fn from(id: CandidateId) -> Self {
        Self { id }
    }
}

/// How a single candidate id changed between the two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateChange {
    Added,
    Removed,
    Edited,
}

/// Candidate ids classified by change kind.
///
/// Buckets are pairwise disjoint and each is sorted by ascending id.
/// Unchanged candidates appear in none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDiffBuckets {
    pub edited: Vec<CandidateRef>,
    pub added: Vec<CandidateRef>,
    pub removed: Vec<CandidateRef>,
}

impl CandidateDiffBuckets {
    /// Record one classified id. Callers push ids in ascending order.
    pub fn push(&mut self, change: CandidateChange, id: CandidateId) {
        let bucket = match change {
            CandidateChange::Added => &mut self.added,
            CandidateChange::Removed => &mut self.removed,
            CandidateChange::Edited => &mut self.edited,
        };
        bucket.push(CandidateRef { id });
    }

    pub fn ids(&self, change: CandidateChange) -> Vec<CandidateId> {
        let bucket = match change {
            CandidateChange::Added => &self.added,
            CandidateChange::Removed => &self.removed,
            CandidateChange::Edited => &self.edited,
        };
        bucket.iter().map(|r| r.id).collect()
    }

    pub fn added_ids(&self) -> Vec<CandidateId> {
        self.ids(CandidateChange::Added)
    }

    pub fn removed_ids(&self) -> Vec<CandidateId> {
        self.ids(CandidateChange::Removed)
    }

    pub fn edited_ids(&self) -> Vec<CandidateId> {
        self.ids(CandidateChange::Edited)
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.edited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full change report between two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceReport {
    /// Changed metadata fields in `title`, `startTime`, `endTime` order
    pub meta: Vec<FieldDiff>,
    pub candidates: CandidateDiffBuckets,
}

impl DifferenceReport {
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty() && self.candidates.is_empty()
    }

    /// Number of changed metadata fields plus classified candidates
    pub fn change_count(&self) -> usize {
        self.meta.len() + self.candidates.len()
    }

    pub fn field(&self, field: MetaField) -> Option<&FieldDiff> {
        self.meta.iter().find(|d| d.field == field)
    }
}
