//! JSON export for events.
//!
//! The JSON shape mirrors the wire schema field-for-field with one
//! exception: `time` is rendered as an ISO-8601 UTC string at millisecond
//! precision, because the consumers of this output are dashboards and
//! humans, not the codec. Absent fields are omitted entirely, matching the
//! wire's treatment of absence.

use chrono::{DateTime, SecondsFormat};
use serde_json::{Map, Value as Json};

use crate::event::Event;

/// Renders epoch seconds as ISO-8601 UTC at millisecond precision, for
/// example `1970-01-01T00:00:00.000Z` for second zero.
///
/// Returns `None` when `secs` falls outside the representable calendar
/// range.
#[must_use]
pub fn unix_to_iso8601(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0)
        .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Serializes one event to a JSON object string.
///
/// Present fields appear under their wire names; absent fields and an
/// empty tag list are omitted. `time` is rendered with
/// [`unix_to_iso8601`], degrading to the raw epoch number for timestamps
/// outside the calendar range. Non-finite numerics have no JSON form and
/// render as `null`.
///
/// # Examples
///
/// ```
/// use lookout_core::{event_to_json, Event};
///
/// let event = Event {
///     host: Some("h".to_string()),
///     service: Some("s".to_string()),
///     time: Some(0),
///     ..Event::default()
/// };
/// assert_eq!(
///     event_to_json(&event),
///     r#"{"host":"h","service":"s","time":"1970-01-01T00:00:00.000Z"}"#
/// );
/// ```
#[must_use]
pub fn event_to_json(event: &Event) -> String {
    let mut object = Map::new();
    if let Some(host) = &event.host {
        object.insert("host".to_owned(), Json::String(host.clone()));
    }
    if let Some(service) = &event.service {
        object.insert("service".to_owned(), Json::String(service.clone()));
    }
    if let Some(state) = &event.state {
        object.insert("state".to_owned(), Json::String(state.clone()));
    }
    if let Some(time) = event.time {
        let rendered = match unix_to_iso8601(time) {
            Some(iso) => Json::String(iso),
            None => Json::from(time),
        };
        object.insert("time".to_owned(), rendered);
    }
    if let Some(description) = &event.description {
        object.insert("description".to_owned(), Json::String(description.clone()));
    }
    if !event.tags.is_empty() {
        let tags = event.tags.iter().cloned().map(Json::String).collect();
        object.insert("tags".to_owned(), Json::Array(tags));
    }
    if let Some(metric) = event.metric {
        object.insert("metric".to_owned(), Json::from(metric));
    }
    if let Some(ttl) = event.ttl {
        object.insert("ttl".to_owned(), Json::from(ttl));
    }
    Json::Object(object).to_string()
}
