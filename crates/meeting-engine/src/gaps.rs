//! Derive free ranges from merged busy ranges.
//!
//! Walks a cursor across the day. Each stretch between the cursor and the next
//! busy range is a gap, and so is the stretch after the last busy range. A gap
//! counts only if it is at least as long as the requested duration.

use crate::time_range::{TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY};

/// Find every gap of at least `duration` minutes around `busy`.
///
/// `busy` must already be merged (ascending and disjoint, see
/// [`crate::merge::merge_ranges`]). A gap exactly `duration` long is kept.
/// With no busy ranges the whole day is free, unless `duration` is longer
/// than a day.
pub fn free_ranges(busy: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    if duration > DAY_LENGTH {
        return Vec::new();
    }
    if busy.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    let mut free = Vec::new();
    let mut cursor = START_OF_DAY;

    for range in busy {
        push_gap(&mut free, cursor, range.start(), duration);
        cursor = cursor.max(range.end());
    }

    // Trailing gap after the last busy range.
    push_gap(&mut free, cursor, END_OF_DAY, duration);

    free
}

fn push_gap(free: &mut Vec<TimeRange>, start: u32, end: u32, duration: u32) {
    if end.saturating_sub(start) < duration {
        return;
    }
    // Zero-length gaps fail `new` and are skipped with it.
    if let Ok(gap) = TimeRange::new(start, end) {
        free.push(gap);
    }
}
