//! WASM bindings for meeting-engine.
//!
//! Exposes meeting queries and busy-range merging to JavaScript via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```

use meeting_engine::{Event, MeetingRequest, TimeRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

/// Parse events from a JSON array of `{title, when: {start, end}, attendees}`.
fn parse_events(json: &str) -> Result<Vec<Event>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid events JSON: {}", e))
}

/// Parse a request from `{duration, attendees, optional_attendees}`.
fn parse_request(json: &str) -> Result<MeetingRequest, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid request JSON: {}", e))
}

fn parse_ranges(json: &str) -> Result<Vec<TimeRange>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid ranges JSON: {}", e))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// Plain-`String` cores keep the logic testable off the wasm32 target.

fn find_meeting_times_json(events_json: &str, request_json: &str) -> Result<String, String> {
    let events = parse_events(events_json)?;
    let request = parse_request(request_json)?;
    to_json(&meeting_engine::find_meeting_availability(&events, &request))
}

fn merge_busy_ranges_json(ranges_json: &str) -> Result<String, String> {
    let ranges = parse_ranges(ranges_json)?;
    to_json(&meeting_engine::merge_ranges(&ranges))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every slot in the day that fits a meeting request.
///
/// Returns a JSON string `{tier, slots}`. `tier` is `"with_optional"` or
/// `"mandatory_only"`, and `slots` is an array of `{start, end}` minute
/// ranges.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    find_meeting_times_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))
}

/// Merge a JSON array of `{start, end}` ranges into sorted, disjoint ranges.
#[wasm_bindgen(js_name = "mergeBusyRanges")]
pub fn merge_busy_ranges(ranges_json: &str) -> Result<String, JsValue> {
    merge_busy_ranges_json(ranges_json).map_err(|e| JsValue::from_str(&e))
}
