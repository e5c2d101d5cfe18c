//! Timestamp display rendering for report payloads.
//!
//! The metadata comparator decides on instant equality and only asks a
//! [`TimestampRenderer`] for the strings it puts in a `FieldDiff`.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

use crate::errors::{ExamDiffError, Result};
use crate::model::metadata::timestamp;

/// Zone used for report timestamps unless configured otherwise
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "Europe/Oslo";

/// Renders an instant as the string payload of a timestamp field diff
pub trait TimestampRenderer: Send + Sync {
    fn render(&self, instant: &DateTime<Utc>) -> String;
}

/// Renders local wall-clock time in a fixed IANA zone
///
/// Format is `yyyy-MM-ddTHH:mm:ss` followed by the offset as `+HH:MM`, or
/// the literal `UTC` when the zone's offset at that instant is zero.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use examdiff_core::display::{TimestampRenderer, ZonedRenderer};
///
/// let renderer = ZonedRenderer::default();
/// let instant = Utc.with_ymd_and_hms(2016, 4, 20, 10, 0, 0).unwrap();
/// assert_eq!(renderer.render(&instant), "2016-04-20T12:00:00+02:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedRenderer {
    tz: Tz,
}

impl ZonedRenderer {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Look up a zone by IANA name (e.g. `Europe/Oslo`)
    ///
    /// # Errors
    ///
    /// `InvalidTimezone` when the name is not in the zone database.
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ExamDiffError::InvalidTimezone {
                name: name.to_string(),
            })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for ZonedRenderer {
    fn default() -> Self {
        Self::new(chrono_tz::Europe::Oslo)
    }
}

impl TimestampRenderer for ZonedRenderer {
    fn render(&self, instant: &DateTime<Utc>) -> String {
        let local = instant.with_timezone(&self.tz);
        let offset_secs = local.offset().fix().local_minus_utc();
        format!(
            "{}{}",
            local.format("%Y-%m-%dT%H:%M:%S"),
            format_offset(offset_secs)
        )
    }
}

/// Renders the canonical UTC form used in snapshot documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rfc3339Renderer;

impl TimestampRenderer for Rfc3339Renderer {
    fn render(&self, instant: &DateTime<Utc>) -> String {
        timestamp::format(instant)
    }
}

fn format_offset(offset_secs: i32) -> String {
    if offset_secs == 0 {
        return "UTC".to_string();
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}
