use examdiff_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::CandidateSide;

/// Result type alias using ExamDiffError
pub type Result<T> = std::result::Result<T, ExamDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable `ERR_*` code that callers and tests can match
/// on without parsing messages. The reconciliation core itself never fails;
/// every kind here originates at a boundary (input parsing, configuration,
/// precondition checks) or in the engine's own guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Snapshot bytes are not UTF-8 JSON, or do not match the snapshot shape
    InvalidSnapshot,
    /// A required top-level snapshot field (`meta`, `candidates`) is absent
    MissingField,
    /// A candidate id occurs more than once within one snapshot
    DuplicateCandidateId,
    /// A display timezone name is not in the IANA database
    InvalidTimezone,
    /// Configuration file could not be parsed
    InvalidConfig,
    DeterminismViolation,

    Io,
    Serialization,

    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::DuplicateCandidateId => "ERR_DUPLICATE_CANDIDATE_ID",
            ExErrorKind::InvalidTimezone => "ERR_INVALID_TIMEZONE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields support programmatic handling; the optional
/// context fields (operation, entity, side, correlation ids) support
/// debugging without parsing the message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    side: Option<CandidateSide>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            side: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a candidate id, a file path, a zone name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the snapshot side the error was found on
    pub fn with_side(mut self, side: CandidateSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn side(&self) -> Option<CandidateSide> {
        self.side
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Typed domain errors raised below the engine boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExamDiffError {
    /// Candidate id repeats within one snapshot's candidate list
    #[error("Candidate id {candidate_id} occurs {occurrences} times in the {side} snapshot")]
    DuplicateCandidateId {
        candidate_id: i64,
        side: CandidateSide,
        occurrences: usize,
    },

    /// Timezone name not found in the IANA database
    #[error("Unknown display timezone: {name}")]
    InvalidTimezone { name: String },

    /// Configuration file could not be read
    #[error("Failed to read config {path}: {message}")]
    ConfigRead { path: String, message: String },

    /// Configuration file is not valid TOML or has wrong types
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<ExamDiffError> for ExError {
    fn from(err: ExamDiffError) -> Self {
        let message = err.to_string();
        match err {
            ExamDiffError::DuplicateCandidateId {
                candidate_id, side, ..
            } => ExError::new(ExErrorKind::DuplicateCandidateId)
                .with_entity_id(candidate_id.to_string())
                .with_side(side)
                .with_message(message),

            ExamDiffError::InvalidTimezone { name } => ExError::new(ExErrorKind::InvalidTimezone)
                .with_entity_id(name)
                .with_message(message),

            ExamDiffError::ConfigRead { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_entity_id(path)
                .with_message(message),

            ExamDiffError::ConfigParse { path, .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_entity_id(path)
                .with_message(message),

            ExamDiffError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            ExamDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<std::io::Error> for ExamDiffError {
    fn from(err: std::io::Error) -> Self {
        ExamDiffError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExamDiffError {
    fn from(err: serde_json::Error) -> Self {
        ExamDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
