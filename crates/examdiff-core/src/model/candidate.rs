use serde::{Deserialize, Serialize};

/// Identifier of a candidate, unique within one snapshot's candidate list
pub type CandidateId = i64;

/// A candidate enrolled in an exam session
///
/// Two candidates are the same person when their `id` matches; they are
/// unchanged when all three fields match (value equality, never identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,

    /// Display name
    #[serde(rename = "candidateName")]
    pub name: String,

    /// Extra time allowance in minutes
    #[serde(rename = "extraTime")]
    pub extra_time: i64,
}

impl Candidate {
    pub fn new(id: CandidateId, name: impl Into<String>, extra_time: i64) -> Self {
        Self {
            id,
            name: name.into(),
            extra_time,
        }
    }

    /// Names of the fields that differ from `other`, in declaration order.
    ///
    /// Only meaningful when both sides share an id; used for debug logging.
    pub fn changed_fields(&self, other: &Candidate) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.id != other.id {
            fields.push("id");
        }
        if self.name != other.name {
            fields.push("candidateName");
        }
        if self.extra_time != other.extra_time {
            fields.push("extraTime");
        }
        fields
    }
}

/// Which snapshot a candidate occurrence came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateSide {
    Before,
    After,
}

impl CandidateSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateSide::Before => "before",
            CandidateSide::After => "after",
        }
    }
}

impl std::fmt::Display for CandidateSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
