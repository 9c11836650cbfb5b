//! Half-open minute ranges within a single day.
//!
//! A day is `DAY_LENGTH` minutes long. Every [`TimeRange`] is validated on
//! construction, so downstream stages never re-check bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Number of minutes in the scheduling day.
pub const DAY_LENGTH: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Exclusive end of the day.
pub const END_OF_DAY: u32 = DAY_LENGTH;

/// A half-open interval `[start, end)` measured in minutes from midnight.
///
/// Ordering is by `start`, then by `end`. Field order matters for the derived
/// `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
    };

    /// Build a range from its start (inclusive) and end (exclusive).
    ///
    /// # Errors
    /// Returns `EngineError::InvalidTimeRange` unless `start < end <= DAY_LENGTH`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start >= end || end > DAY_LENGTH {
            return Err(EngineError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range starting at `start` and lasting `duration` minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::new(start, start.saturating_add(duration))
    }

    /// Build a range from two endpoints. An inclusive `end` covers one more
    /// minute than an exclusive one.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let end = if inclusive { end.saturating_add(1) } else { end };
        Self::new(start, end)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// True when the ranges share at least one minute.
    ///
    /// Touching ranges such as `[0, 60)` and `[60, 90)` do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// True when every minute of `other` lies inside `self`.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The smallest range covering both `self` and `other`.
    ///
    /// Both inputs are valid, so the hull is valid too.
    pub(crate) fn hull(&self, other: &TimeRange) -> TimeRange {
        TimeRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Unvalidated wire form; converted through [`TimeRange::new`].
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = EngineError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}
