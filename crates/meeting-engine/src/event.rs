//! Calendar events: who is busy, and when.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// Opaque attendee identifier (usually a name or email address).
pub type AttendeeId = String;

/// An immutable calendar entry occupying its attendees for `when`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    title: String,
    when: TimeRange,
    #[serde(default)]
    attendees: BTreeSet<AttendeeId>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AttendeeId>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<AttendeeId> {
        &self.attendees
    }

    /// True when at least one of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<AttendeeId>) -> bool {
        // Iterate the smaller set; events usually have few attendees.
        if self.attendees.len() <= people.len() {
            self.attendees.iter().any(|a| people.contains(a))
        } else {
            people.iter().any(|p| self.attendees.contains(p))
        }
    }
}
