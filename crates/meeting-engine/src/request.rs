//! Meeting requests: how long, and who must or may attend.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::event::AttendeeId;

/// A request to find room for a meeting of `duration` minutes.
///
/// Mandatory and optional attendee sets may overlap. A duration longer than
/// a day is accepted and can never be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeetingRequest")]
pub struct MeetingRequest {
    duration: u32,
    attendees: BTreeSet<AttendeeId>,
    optional_attendees: BTreeSet<AttendeeId>,
}

impl MeetingRequest {
    /// # Errors
    /// Returns `EngineError::InvalidDuration` if `duration` is zero.
    pub fn new<I, S>(attendees: I, duration: u32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<AttendeeId>,
    {
        if duration == 0 {
            return Err(EngineError::InvalidDuration(duration));
        }
        Ok(Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        })
    }

    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AttendeeId>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Attendees who must be free.
    pub fn attendees(&self) -> &BTreeSet<AttendeeId> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<AttendeeId> {
        &self.optional_attendees
    }

    /// Mandatory and optional attendees combined.
    pub fn all_attendees(&self) -> BTreeSet<AttendeeId> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }
}

#[derive(Deserialize)]
struct RawMeetingRequest {
    duration: u32,
    #[serde(default)]
    attendees: BTreeSet<AttendeeId>,
    #[serde(default)]
    optional_attendees: BTreeSet<AttendeeId>,
}

impl TryFrom<RawMeetingRequest> for MeetingRequest {
    type Error = EngineError;

    fn try_from(raw: RawMeetingRequest) -> Result<Self> {
        Ok(MeetingRequest::new(raw.attendees, raw.duration)?
            .with_optional_attendees(raw.optional_attendees))
    }
}
