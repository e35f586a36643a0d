use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time window with possibly-open endpoints.
///
/// Both endpoints are optional: a delivery that has not been assigned an
/// arrival slot yet carries `None` there. Absence is always represented
/// with `Option`, never a sentinel timestamp, so downstream averages can
/// not be silently corrupted by placeholder values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Window start in UTC
    pub start: Option<DateTime<Utc>>,
    /// Window end in UTC
    pub end: Option<DateTime<Utc>>,
}

impl Period {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Build a fully-specified window. Returns `None` when the endpoints
    /// are not in chronological order.
    pub fn closed(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        if start <= end {
            Some(Self {
                start: Some(start),
                end: Some(end),
            })
        } else {
            None
        }
    }

    /// A window with both endpoints unassigned.
    pub fn open() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Gap in fractional minutes between the end of this window and the
    /// start of `next`. `None` when either endpoint is absent; negative
    /// when the windows overlap.
    pub fn gap_minutes_until(&self, next: &Period) -> Option<f64> {
        match (self.end, next.start) {
            (Some(end), Some(start)) => {
                Some((start - end).num_seconds() as f64 / 60.0)
            }
            _ => None,
        }
    }
}
