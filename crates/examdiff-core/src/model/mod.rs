//! Snapshot data model.
//!
//! All values are constructed fresh per diff request and never mutated by
//! the diff engine.

pub mod candidate;
pub mod metadata;
pub mod snapshot;

pub use candidate::{Candidate, CandidateId, CandidateSide};
pub use metadata::MetaData;
pub use snapshot::Snapshot;
