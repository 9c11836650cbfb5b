//! Answer meeting requests with a two-tier attendee policy.
//!
//! The filter → merge → gap pipeline first runs for mandatory and optional
//! attendees together. If that leaves no slot, it runs again for mandatory
//! attendees alone. Optional attendees are all-or-nothing: either every one of
//! them is accommodated, or none is considered.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::event::{AttendeeId, Event};
use crate::filter::relevant_ranges;
use crate::gaps::free_ranges;
use crate::merge::merge_ranges;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// Which attendee group the returned slots were computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeTier {
    /// Every mandatory and optional attendee is free. Also reported for
    /// non-empty results of requests whose optional attendees add nobody.
    WithOptional,
    /// Only mandatory attendees are guaranteed free.
    MandatoryOnly,
}

/// Result of a meeting query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingAvailability {
    pub tier: AttendeeTier,
    /// Free ranges of at least the requested duration, ascending.
    pub slots: Vec<TimeRange>,
}

/// Ranges of at least `duration` minutes in which nobody in `attendees` is
/// busy.
pub fn available_times(
    events: &[Event],
    attendees: &BTreeSet<AttendeeId>,
    duration: u32,
) -> Vec<TimeRange> {
    let busy = merge_ranges(&relevant_ranges(events, attendees));
    tracing::debug!(
        attendees = attendees.len(),
        busy_ranges = busy.len(),
        "merged busy ranges"
    );
    free_ranges(&busy, duration)
}

/// Find meeting slots for `request`, reporting which tier produced them.
///
/// An empty `MandatoryOnly` result means no slot exists for the mandatory
/// attendees.
pub fn find_meeting_availability(events: &[Event], request: &MeetingRequest) -> MeetingAvailability {
    let duration = request.duration();
    let everyone = request.all_attendees();

    let with_optional = available_times(events, &everyone, duration);
    if !with_optional.is_empty() {
        tracing::debug!(slots = with_optional.len(), "all attendees accommodated");
        return MeetingAvailability {
            tier: AttendeeTier::WithOptional,
            slots: with_optional,
        };
    }
    // When the optional set adds nobody, the mandatory pass would be identical.
    if everyone.len() == request.attendees().len() {
        tracing::debug!("no slot fits the mandatory attendees");
        return MeetingAvailability {
            tier: AttendeeTier::MandatoryOnly,
            slots: with_optional,
        };
    }

    tracing::debug!("no slot fits optional attendees; falling back to mandatory only");
    let slots = available_times(events, request.attendees(), duration);
    tracing::debug!(slots = slots.len(), "mandatory attendees accommodated");

    MeetingAvailability {
        tier: AttendeeTier::MandatoryOnly,
        slots,
    }
}

/// Find every range in the day long enough for `request`.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    find_meeting_availability(events, request).slots
}
