//! Canonical field keys and event names for structured logging.
//!
//! The logging macros in `examdiff-core` and any log consumers agree on
//! these names; changing one is a breaking change for dashboards. `tracing`
//! macros take field names as identifiers, so emitters spell them out and
//! readers (the test capture layer, log assertions) go through these constants.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Diff sizes
pub const FIELD_BEFORE_CANDIDATES: &str = "before_candidates";
pub const FIELD_AFTER_CANDIDATES: &str = "after_candidates";
pub const FIELD_META_CHANGES: &str = "meta_changes";
pub const FIELD_ADDED: &str = "added";
pub const FIELD_REMOVED: &str = "removed";
pub const FIELD_EDITED: &str = "edited";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
