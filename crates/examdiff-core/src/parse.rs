//! Snapshot document parsing.
//!
//! Unknown fields are ignored at every level; missing required fields and
//! type mismatches fail the whole document. No partial snapshot is ever
//! returned.

#![allow(clippy::result_large_err)]

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ExError, ExErrorKind};
use crate::model::Snapshot;

/// Top-level keys every snapshot document must carry
const REQUIRED_FIELDS: &[&str] = &["meta", "candidates"];

/// Parse raw snapshot bytes into a typed [`Snapshot`].
///
/// # Errors
///
/// - `InvalidSnapshot`: bytes are not valid UTF-8 or not valid JSON, or the
///   document does not match the snapshot shape
/// - `MissingField`: `meta` or `candidates` is absent
pub fn parse_snapshot_bytes(bytes: &[u8]) -> Result<Snapshot, ExError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot")
            .with_message(format!("snapshot is not valid UTF-8: {}", e))
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot")
            .with_message(format!("snapshot is not valid JSON: {}", e))
    })?;

    parse_snapshot_value(&raw)
}

/// Parse an already-decoded JSON value into a typed [`Snapshot`].
///
/// # Errors
///
/// Same as [`parse_snapshot_bytes`] minus the UTF-8/JSON syntax cases.
pub fn parse_snapshot_value(raw: &Value) -> Result<Snapshot, ExError> {
    let obj = raw.as_object().ok_or_else(|| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot")
            .with_message("snapshot JSON root must be an object")
    })?;

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(*field) {
            return Err(ExError::new(ExErrorKind::MissingField)
                .with_op("parse_snapshot")
                .with_entity_id(*field)
                .with_message(format!("required field `{}` is absent", field)));
        }
    }

    let snapshot = Snapshot::deserialize(raw).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot")
            .with_message(format!("failed to deserialize snapshot: {}", e))
    })?;

    tracing::debug!(
        snapshot_id = snapshot.id,
        candidates = snapshot.candidates.len() as u64,
        "snapshot parsed"
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "id": 1,
            "meta": {
                "title": "Title",
                "startTime": "2016-04-20T10:00:00Z",
                "endTime": "2016-04-20T16:00:00Z"
            },
            "candidates": [
                {"id": 10, "candidateName": "C1", "extraTime": 0},
                {"id": 11, "candidateName": "C2", "extraTime": 10}
            ]
        })
    }

    #[test]
    fn test_parses_well_formed_document() {
        let snapshot = parse_snapshot_value(&document()).unwrap();
        assert_eq!(snapshot.id, Some(1));
        assert_eq!(snapshot.meta.title, "Title");
        assert_eq!(snapshot.candidates.len(), 2);
        assert_eq!(snapshot.candidate(11).map(|c| c.extra_time), Some(10));
    }

    #[test]
    fn test_missing_meta_is_missing_field() {
        let mut doc = document();
        doc.as_object_mut().unwrap().remove("meta");
        let err = parse_snapshot_value(&doc).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MissingField);
        assert_eq!(err.entity_id(), Some("meta"));
    }

    #[test]
    fn test_non_object_root() {
        let err = parse_snapshot_value(&json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = parse_snapshot_bytes(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
        assert!(err.message().contains("UTF-8"));
    }
}
