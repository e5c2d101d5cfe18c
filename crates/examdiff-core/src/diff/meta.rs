//! Field-by-field comparison of session metadata.

use crate::diff::model::{FieldDiff, MetaField};
use crate::display::TimestampRenderer;
use crate::model::MetaData;

/// Compare two metadata values and return one [`FieldDiff`] per changed field.
///
/// Output order is always `title`, `startTime`, `endTime` (skipping unchanged
/// fields). Titles compare byte-for-byte; timestamps compare as instants and
/// are only passed through `renderer` to build the payload.
pub fn compare_meta(
    before: &MetaData,
    after: &MetaData,
    renderer: &dyn TimestampRenderer,
) -> Vec<FieldDiff> {
    MetaField::ALL
        .iter()
        .filter_map(|field| compare_field(*field, before, after, renderer))
        .collect()
}

fn compare_field(
    field: MetaField,
    before: &MetaData,
    after: &MetaData,
    renderer: &dyn TimestampRenderer,
) -> Option<FieldDiff> {
    match field {
        MetaField::Title => (before.title != after.title)
            .then(|| FieldDiff::new(field, before.title.as_str(), after.title.as_str())),
        MetaField::StartTime => (before.start_time != after.start_time).then(|| {
            FieldDiff::new(
                field,
                renderer.render(&before.start_time),
                renderer.render(&after.start_time),
            )
        }),
        MetaField::EndTime => (before.end_time != after.end_time).then(|| {
            FieldDiff::new(
                field,
                renderer.render(&before.end_time),
                renderer.render(&after.end_time),
            )
        }),
    }
}
