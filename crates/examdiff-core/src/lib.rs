//! examdiff core - change reports between exam session snapshots
//!
//! This crate provides:
//! - The snapshot data model (session metadata and candidates)
//! - Snapshot document parsing with lenient unknown-field handling
//! - The diff engine: metadata field comparison, candidate reconciliation
//!   by id, and deterministic report assembly
//! - Timestamp display rendering in a configurable zone
//! - The structured error and logging facilities shared with the CLI

pub mod config;
pub mod diff;
pub mod display;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod parse;

// Re-exported for the logging macros
pub use examdiff_core_types;

pub use config::DiffConfig;
pub use diff::{compute_diff, diff_json, diff_snapshots, DiffOptions, DifferenceReport};
pub use errors::{ExError, ExErrorKind, ExamDiffError, Result};
pub use model::{Candidate, MetaData, Snapshot};
