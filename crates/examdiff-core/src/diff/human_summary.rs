//! Human-readable summary renderer for difference reports.

use crate::diff::model::{CandidateRef, DifferenceReport};

/// Render a Markdown summary of a [`DifferenceReport`].
///
/// Intended for change notifications and audit review. Informational only;
/// the structured report remains the source of truth.
pub fn render_human_summary(report: &DifferenceReport) -> String {
    let mut out = String::new();

    out.push_str("## Session Diff\n\n");
    out.push_str(&format!(
        "**Changes**: {} ({} metadata, {} candidates)\n\n",
        report.change_count(),
        report.meta.len(),
        report.candidates.len()
    ));

    if report.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    if !report.meta.is_empty() {
        out.push_str("### Metadata\n\n");
        out.push_str("| Field | Before | After |\n|---|---|---|\n");
        for diff in &report.meta {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                diff.field,
                escape_cell(&diff.before),
                escape_cell(&diff.after)
            ));
        }
        out.push('\n');
    }

    if !report.candidates.is_empty() {
        out.push_str("### Candidates\n\n");
        for (label, bucket) in [
            ("Added", &report.candidates.added),
            ("Removed", &report.candidates.removed),
            ("Edited", &report.candidates.edited),
        ] {
            if !bucket.is_empty() {
                out.push_str(&format!(
                    "- **{}** ({}): {}\n",
                    label,
                    bucket.len(),
                    join_ids(bucket)
                ));
            }
        }
    }

    out
}

fn join_ids(bucket: &[CandidateRef]) -> String {
    bucket
        .iter()
        .map(|r| r.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// Titles are free text; keep them from breaking the table.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
