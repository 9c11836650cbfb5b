//! Select the events that constrain a given group of attendees.

use std::collections::BTreeSet;

use crate::event::{AttendeeId, Event};
use crate::time_range::TimeRange;

/// Collect the time ranges of every event attended by at least one member of
/// `attendees`, in the order the events are given.
///
/// An empty attendee set yields no ranges.
pub fn relevant_ranges(events: &[Event], attendees: &BTreeSet<AttendeeId>) -> Vec<TimeRange> {
    if attendees.is_empty() {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| event.involves_any(attendees))
        .map(Event::when)
        .collect()
}
