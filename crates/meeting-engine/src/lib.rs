//! # meeting-engine
//!
//! Find when a meeting can happen, given everyone's calendar for the day.
//!
//! A query takes a list of [`Event`]s and a [`MeetingRequest`]. It returns
//! every [`TimeRange`] in the day that is long enough and in which all
//! mandatory attendees are free. Ranges that also suit every optional
//! attendee are preferred whenever at least one exists.
//!
//! ```rust
//! use meeting_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![
//!     Event::new("Standup", TimeRange::new(0, 60).unwrap(), ["alice"]),
//!     Event::new("1:1", TimeRange::new(120, 180).unwrap(), ["bob"]),
//! ];
//! let request = MeetingRequest::new(["alice", "bob"], 30).unwrap();
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![TimeRange::new(60, 120).unwrap(), TimeRange::new(180, 1440).unwrap()]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`]: minute ranges within a day
//! - [`event`], [`request`]: query inputs
//! - [`filter`]: events relevant to an attendee set
//! - [`merge`]: sort and merge busy ranges
//! - [`gaps`]: free ranges between busy ranges
//! - [`query`]: two-tier meeting query
//! - [`comments`], [`auth`]: comment board with a login check
//! - [`error`]: error types

pub mod auth;
pub mod comments;
pub mod error;
pub mod event;
pub mod filter;
pub mod gaps;
pub mod merge;
pub mod query;
pub mod request;
pub mod time_range;

pub use auth::{login_status, post_comments, Authenticator, LoginStatus, StaticAuthenticator};
pub use comments::{Comment, CommentStore, MemoryCommentStore};
pub use error::EngineError;
pub use event::{AttendeeId, Event};
pub use filter::relevant_ranges;
pub use gaps::free_ranges;
pub use merge::merge_ranges;
pub use query::{
    available_times, find_meeting_availability, find_meeting_times, AttendeeTier,
    MeetingAvailability,
};
pub use request::MeetingRequest;
pub use time_range::{TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY};
