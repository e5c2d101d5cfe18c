pub mod diff;
pub mod validate;

use std::path::Path;

use examdiff_core::errors::{ExError, ExamDiffError};

/// Read a snapshot file, mapping I/O failures to `ERR_IO` with the path as entity.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>, ExError> {
    std::fs::read(path).map_err(|e| io_error(e, "read_snapshot", path))
}

/// Write a rendered report, mapping I/O failures to `ERR_IO` with the path as entity.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<(), ExError> {
    std::fs::write(path, contents).map_err(|e| io_error(e, "write_report", path))
}

fn io_error(err: std::io::Error, op: &str, path: &Path) -> ExError {
    ExError::from(ExamDiffError::from(err))
        .with_op(op)
        .with_entity_id(path.display().to_string())
}
