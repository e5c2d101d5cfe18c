use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session metadata: title and scheduled window
///
/// Timestamps are instants. Inputs written with different offsets for the
/// same moment deserialize to equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    pub title: String,

    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,

    #[serde(with = "timestamp")]
    pub end_time: DateTime<Utc>,
}

impl MetaData {
    pub fn new(
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            start_time,
            end_time,
        }
    }
}

/// Serde adapter for snapshot timestamps.
///
/// Reads RFC 3339 with any explicit offset (the canonical input form is
/// `yyyy-MM-ddTHH:mm:ssZ`) and writes the canonical UTC form. Precision is
/// whole seconds; a non-zero fractional part is rejected.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Timelike, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum TimestampError {
        #[error(transparent)]
        Format(#[from] chrono::ParseError),

        #[error("sub-second precision is not supported")]
        SubSecond,
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
        let instant = DateTime::parse_from_rfc3339(raw.trim())?.with_timezone(&Utc);
        if instant.nanosecond() != 0 {
            return Err(TimestampError::SubSecond);
        }
        Ok(instant)
    }

    pub fn format(instant: &DateTime<Utc>) -> String {
        instant.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp `{raw}`: {e}")))
    }
}
