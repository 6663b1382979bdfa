//! Wire-format message structs.
//!
//! These structs mirror `proto/lookout.proto` field-for-field, written out
//! with prost attributes so builds never need `protoc`. The binary layout
//! of every field belongs to prost; nothing in this crate touches varints
//! or wire types directly.
//!
//! [`Msg`] is one frame. The same [`Event`] record serves both of its
//! channels: `states` for state transitions, `events` for readings.

use crate::event;

/// Wire form of a single event or state.
///
/// Every field is optional on the wire. Absence is encoded by omitting the
/// field, never by a sentinel value.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Event {
    #[prost(string, optional, tag = "1")]
    pub host: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub service: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub state: Option<String>,
    /// Whole seconds since the Unix epoch.
    #[prost(int64, optional, tag = "4")]
    pub time: Option<i64>,
    #[prost(string, optional, tag = "5")]
    pub description: Option<String>,
    #[prost(string, repeated, tag = "6")]
    pub tags: Vec<String>,
    #[prost(double, optional, tag = "7")]
    pub metric: Option<f64>,
    /// Seconds this event is considered current.
    #[prost(double, optional, tag = "8")]
    pub ttl: Option<f64>,
}

/// Wire form of one frame: a batch of events and states, plus the
/// acknowledgement and query fields used by request/reply exchanges.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Msg {
    #[prost(bool, optional, tag = "1")]
    pub ok: Option<bool>,
    #[prost(string, optional, tag = "2")]
    pub error: Option<String>,
    #[prost(message, repeated, tag = "3")]
    pub states: Vec<Event>,
    #[prost(message, repeated, tag = "4")]
    pub events: Vec<Event>,
    #[prost(string, optional, tag = "5")]
    pub query: Option<String>,
}

// The wire structs convert to and from the domain records one-to-one; only
// ownership moves, nothing is renamed or reinterpreted.

impl From<Event> for event::Event {
    fn from(wire: Event) -> Self {
        Self {
            host: wire.host,
            service: wire.service,
            state: wire.state,
            time: wire.time,
            description: wire.description,
            tags: wire.tags,
            metric: wire.metric,
            ttl: wire.ttl,
        }
    }
}

impl From<&event::Event> for Event {
    fn from(event: &event::Event) -> Self {
        Self {
            host: event.host.clone(),
            service: event.service.clone(),
            state: event.state.clone(),
            time: event.time,
            description: event.description.clone(),
            tags: event.tags.clone(),
            metric: event.metric,
            ttl: event.ttl,
        }
    }
}

impl From<Msg> for event::Message {
    fn from(wire: Msg) -> Self {
        Self {
            ok: wire.ok,
            error: wire.error,
            states: wire.states.into_iter().map(event::Event::from).collect(),
            events: wire.events.into_iter().map(event::Event::from).collect(),
            query: wire.query,
        }
    }
}

impl From<&event::Message> for Msg {
    fn from(message: &event::Message) -> Self {
        Self {
            ok: message.ok,
            error: message.error.clone(),
            states: message.states.iter().map(Event::from).collect(),
            events: message.events.iter().map(Event::from).collect(),
            query: message.query.clone(),
        }
    }
}
