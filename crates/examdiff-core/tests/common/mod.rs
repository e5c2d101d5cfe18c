//! Shared fixtures for examdiff-core integration tests.

use examdiff_core::model::metadata::timestamp;
use examdiff_core::model::{Candidate, MetaData, Snapshot};
use serde_json::{json, Value};

/// Build session metadata from canonical timestamp strings
#[allow(dead_code)]
pub fn meta(title: &str, start: &str, end: &str) -> MetaData {
    MetaData::new(
        title,
        timestamp::parse(start).unwrap(),
        timestamp::parse(end).unwrap(),
    )
}

#[allow(dead_code)]
pub fn default_meta() -> MetaData {
    meta("Title", "2016-04-20T10:00:00Z", "2016-04-20T16:00:00Z")
}

#[allow(dead_code)]
pub fn candidates(rows: &[(i64, &str, i64)]) -> Vec<Candidate> {
    rows.iter()
        .map(|(id, name, extra)| Candidate::new(*id, *name, *extra))
        .collect()
}

/// Before side of the worked scenario
#[allow(dead_code)]
pub fn worked_before() -> Snapshot {
    Snapshot::new(
        default_meta(),
        candidates(&[
            (10, "C1", 0),
            (11, "C2", 10),
            (12, "C22", 30),
            (13, "C3", 20),
            (14, "C4", 40),
        ]),
    )
    .with_id(1)
}

/// After side of the worked scenario
#[allow(dead_code)]
pub fn worked_after() -> Snapshot {
    Snapshot::new(
        default_meta(),
        candidates(&[
            (10, "C1", 0),
            (11, "C2", 10),
            (12, "C2", 30),
            (13, "C3", 25),
            (15, "C5", 50),
        ]),
    )
    .with_id(1)
}

/// A snapshot document as an upstream exporter would write it, including
/// fields the diff does not know about.
#[allow(dead_code)]
pub fn before_document() -> Value {
    json!({
        "id": 1,
        "exportedBy": "scheduler",
        "meta": {
            "title": "Title",
            "startTime": "2016-04-20T10:00:00Z",
            "endTime": "2016-04-20T16:00:00Z",
            "room": "A1"
        },
        "candidates": [
            {"id": 10, "candidateName": "C1", "extraTime": 0, "seat": 4},
            {"id": 11, "candidateName": "C2", "extraTime": 10},
            {"id": 12, "candidateName": "C3", "extraTime": 20}
        ]
    })
}

#[allow(dead_code)]
pub fn after_document() -> Value {
    json!({
        "id": 1,
        "meta": {
            "title": "Title v2",
            "startTime": "2016-04-20T11:00:00Z",
            "endTime": "2016-04-20T16:00:00Z"
        },
        "candidates": [
            {"id": 10, "candidateName": "C1", "extraTime": 0},
            {"id": 12, "candidateName": "C3", "extraTime": 30},
            {"id": 13, "candidateName": "C4", "extraTime": 0}
        ]
    })
}

#[allow(dead_code)]
pub fn to_bytes(v: &Value) -> Vec<u8> {
    serde_json::to_vec(v).unwrap()
}
