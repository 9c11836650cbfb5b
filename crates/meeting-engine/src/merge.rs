//! Merge busy time ranges into a minimal, ordered, disjoint sequence.
//!
//! Ranges are sorted by start time and swept once. Overlapping or nested ranges
//! collapse into one. Ranges that merely touch (`[0, 60)` and `[60, 90)`)
//! stay separate, since neither occupies a minute the other does.

use crate::time_range::TimeRange;

/// Merge `ranges` into ascending, pairwise non-overlapping ranges covering
/// exactly the same minutes.
///
/// Runs in O(n log n). Merging an already-merged sequence returns it unchanged.
pub fn merge_ranges(ranges: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            if last.overlaps(&range) {
                // Sorted by start, so the hull keeps `last.start`.
                *last = last.hull(&range);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// True when `ranges` is ascending and no two ranges overlap.
pub fn is_merged(ranges: &[TimeRange]) -> bool {
    ranges
        .windows(2)
        .all(|pair| pair[0].end() <= pair[1].start())
}
