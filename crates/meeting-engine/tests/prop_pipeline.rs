//! Property-based tests for merging, gap finding, and the query.
//!
//! These check invariants that should hold for *any* set of ranges, not just
//! the hand-picked cases in `pipeline_tests.rs`.

use meeting_engine::merge::is_merged;
use meeting_engine::{
    find_meeting_times, free_ranges, merge_ranges, Event, MeetingRequest, TimeRange, DAY_LENGTH,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_range() -> impl Strategy<Value = TimeRange> {
    (0u32..DAY_LENGTH, 1u32..=240).prop_map(|(start, len)| {
        let end = (start + len).min(DAY_LENGTH);
        TimeRange::new(start, end).unwrap()
    })
}

fn arb_ranges() -> impl Strategy<Value = Vec<TimeRange>> {
    prop::collection::vec(arb_range(), 0..40)
}

fn arb_duration() -> impl Strategy<Value = u32> {
    1u32..=1500
}

fn arb_attendee() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alice".to_string()),
        Just("bob".to_string()),
        Just("carol".to_string()),
        Just("dave".to_string()),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    (arb_range(), prop::collection::btree_set(arb_attendee(), 0..3))
        .prop_map(|(when, attendees)| Event::new("generated", when, attendees))
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

/// Whether `minute` falls inside any of `ranges`.
fn covered(ranges: &[TimeRange], minute: u32) -> bool {
    ranges.iter().any(|r| r.contains_point(minute))
}

// ---------------------------------------------------------------------------
// Merge properties
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_is_idempotent(ranges in arb_ranges()) {
        let once = merge_ranges(&ranges);
        let twice = merge_ranges(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_output_is_sorted_and_disjoint(ranges in arb_ranges()) {
        let merged = merge_ranges(&ranges);
        prop_assert!(is_merged(&merged), "not merged: {:?}", merged);
        for pair in merged.windows(2) {
            prop_assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn merge_covers_exactly_the_input_minutes(ranges in arb_ranges()) {
        let merged = merge_ranges(&ranges);
        for minute in 0..DAY_LENGTH {
            prop_assert_eq!(
                covered(&ranges, minute),
                covered(&merged, minute),
                "coverage differs at minute {}",
                minute
            );
        }
    }

    #[test]
    fn merge_never_grows(ranges in arb_ranges()) {
        prop_assert!(merge_ranges(&ranges).len() <= ranges.len());
    }
}

// ---------------------------------------------------------------------------
// Gap properties
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn free_ranges_are_long_enough_and_disjoint(
        ranges in arb_ranges(),
        duration in arb_duration(),
    ) {
        let busy = merge_ranges(&ranges);
        let free = free_ranges(&busy, duration);

        prop_assert!(is_merged(&free));
        for slot in &free {
            prop_assert!(slot.duration() >= duration, "{} shorter than {}", slot, duration);
            for b in &busy {
                prop_assert!(!slot.overlaps(b), "{} overlaps busy {}", slot, b);
            }
        }
    }

    #[test]
    fn free_ranges_are_maximal(ranges in arb_ranges(), duration in 1u32..=120) {
        let busy = merge_ranges(&ranges);
        let free = free_ranges(&busy, duration);

        // Every free slot is bounded by busy time or the edge of the day.
        for slot in &free {
            prop_assert!(slot.start() == 0 || covered(&busy, slot.start() - 1));
            prop_assert!(slot.end() == DAY_LENGTH || covered(&busy, slot.end()));
        }
    }

    #[test]
    fn no_free_range_longer_than_a_day(ranges in arb_ranges()) {
        let busy = merge_ranges(&ranges);
        prop_assert!(free_ranges(&busy, DAY_LENGTH + 1).is_empty());
    }
}

// ---------------------------------------------------------------------------
// Query properties
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn mandatory_attendees_are_always_free(
        events in prop::collection::vec(arb_event(), 0..20),
        mandatory in prop::collection::btree_set(arb_attendee(), 0..3),
        optional in prop::collection::btree_set(arb_attendee(), 0..3),
        duration in 1u32..=240,
    ) {
        let request = MeetingRequest::new(mandatory.clone(), duration)
            .unwrap()
            .with_optional_attendees(optional);
        let slots = find_meeting_times(&events, &request);

        for slot in &slots {
            prop_assert!(slot.duration() >= duration);
            for event in &events {
                if event.attendees().iter().any(|a| mandatory.contains(a)) {
                    prop_assert!(
                        !slot.overlaps(&event.when()),
                        "{} collides with mandatory event {}",
                        slot,
                        event.when()
                    );
                }
            }
        }
    }
}
