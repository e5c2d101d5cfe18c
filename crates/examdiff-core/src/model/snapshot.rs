use serde::{Deserialize, Serialize};

use super::{Candidate, CandidateId, MetaData};

/// One full state of an exam session: metadata plus candidate list
///
/// Candidate ids are expected to be unique within `candidates`; the diff
/// engine checks this before reconciling unless told to ignore duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session identifier from the source document; carried, never diffed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub meta: MetaData,

    pub candidates: Vec<Candidate>,
}

impl Snapshot {
    pub fn new(meta: MetaData, candidates: Vec<Candidate>) -> Self {
        Self {
            id: None,
            meta,
            candidates,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }
}
