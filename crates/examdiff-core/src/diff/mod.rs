//! Session snapshot diff.
//!
//! Compares a "before" and an "after" snapshot of an exam session and
//! produces a [`DifferenceReport`]: changed metadata fields plus candidate
//! ids bucketed as added, removed or edited.
//!
//! ## Entry point
//!
//! ```
//! use examdiff_core::diff::{diff_snapshots, DiffOptions};
//! use examdiff_core::display::ZonedRenderer;
//! use examdiff_core::model::{Candidate, MetaData, Snapshot};
//! use chrono::{TimeZone, Utc};
//!
//! let meta = MetaData::new(
//!     "Exam",
//!     Utc.with_ymd_and_hms(2016, 4, 20, 10, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2016, 4, 20, 16, 0, 0).unwrap(),
//! );
//! let before = Snapshot::new(meta.clone(), vec![Candidate::new(10, "C1", 0)]);
//! let after = Snapshot::new(meta, vec![Candidate::new(10, "C1", 15)]);
//!
//! let report = diff_snapshots(&before, &after, &DiffOptions::default(), &ZonedRenderer::default())?;
//! assert_eq!(report.candidates.edited_ids(), vec![10]);
//! # Ok::<(), examdiff_core::errors::ExError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical serialized reports;
//!   buckets are sorted by ascending candidate id.
//! - **Instant semantics**: timestamps compare as instants, never as text.
//! - **No merging**: the report states what changed; it never resolves edits.

pub mod engine;
pub mod human_summary;
pub mod meta;
pub mod model;
pub mod reconcile;
pub mod report;

pub use engine::{compute_diff, diff_json, diff_snapshots, DiffOptions, DuplicateIdPolicy};
pub use human_summary::render_human_summary;
pub use meta::compare_meta;
pub use model::{CandidateDiffBuckets, DifferenceReport, FieldDiff, MetaField};
pub use reconcile::reconcile_candidates;
pub use report::build_report;
