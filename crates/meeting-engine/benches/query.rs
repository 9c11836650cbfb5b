use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use meeting_engine::{find_meeting_times, merge_ranges, Event, MeetingRequest, TimeRange};

const PEOPLE: [&str; 8] = [
    "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi",
];

/// A busy day: `count` short events spread over eight people.
fn busy_day(count: u32) -> Vec<Event> {
    (0..count)
        .map(|i| {
            let start = (i * 37) % 1380;
            let len = 15 + (i * 13) % 45;
            let when = TimeRange::new(start, (start + len).min(1440)).unwrap();
            let who = [PEOPLE[(i % 8) as usize], PEOPLE[((i / 8) % 8) as usize]];
            Event::new(format!("event {i}"), when, who)
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let events = busy_day(500);
    let request = MeetingRequest::new(["alice", "bob", "carol"], 30)
        .unwrap()
        .with_optional_attendees(["dave", "erin"]);

    c.bench_function("find_meeting_times_500_events", |b| {
        b.iter(|| find_meeting_times(black_box(&events), black_box(&request)))
    });

    let ranges: Vec<TimeRange> = events.iter().map(Event::when).collect();
    c.bench_function("merge_ranges_500", |b| {
        b.iter(|| merge_ranges(black_box(&ranges)))
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
