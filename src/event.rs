//! Event and message records.
//!
//! An [`Event`] is one reading or state transition reported about a
//! monitored service. A [`Message`] is the unit the wire moves: a batch of
//! events and states plus the acknowledgement and query fields used by
//! request/reply exchanges. The same record shape serves both channels.
//!
//! Absent fields are `None`, never an empty string or zero. Matching and
//! export both lean on that distinction, so nothing in this module invents
//! a value the reporter did not send. The one exception is `time`:
//! [`Event::ensure_time`] fills it from a [`Clock`] because every consumer
//! downstream of the codec assumes events are placed in time.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::sets;
use crate::value::Value;

/// A single monitoring event.
///
/// # Examples
///
/// ```
/// use lookout_core::{Event, EventOptions, FixedClock};
///
/// let event = Event::from_options(
///     EventOptions {
///         host: Some("web-1".to_string()),
///         service: Some("api latency".to_string()),
///         state: Some("ok".to_string()),
///         metric: Some(0.217),
///         ..EventOptions::default()
///     },
///     &FixedClock::at(1_700_000_000),
/// );
///
/// assert_eq!(event.time, Some(1_700_000_000));
/// assert!(event.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Event {
    /// Host that originated the event.
    pub host: Option<String>,
    /// Service the event describes, scoped to `host`.
    pub service: Option<String>,
    /// Current state, e.g. `"ok"` or `"critical"`. Free-form text.
    pub state: Option<String>,
    /// Whole seconds since the Unix epoch.
    pub time: Option<i64>,
    /// Free-form human-readable detail.
    pub description: Option<String>,
    /// Set-like tag collection; order and duplicates carry no meaning.
    pub tags: Vec<String>,
    /// The measured value.
    pub metric: Option<f64>,
    /// Seconds this event is considered current.
    pub ttl: Option<f64>,
}

impl Event {
    /// Builds an event from an explicit option set.
    ///
    /// Unset options stay absent. `time` is the exception: a fractional
    /// timestamp is rounded to whole seconds (ties to even), and a missing
    /// one defaults to the clock reading, so events built here are always
    /// placed in time.
    #[must_use]
    pub fn from_options(options: EventOptions, clock: &dyn Clock) -> Self {
        let time = match options.time {
            Some(seconds) => seconds.round_ties_even() as i64,
            None => clock.now(),
        };
        Self {
            host: options.host,
            service: options.service,
            state: options.state,
            time: Some(time),
            description: options.description,
            tags: options.tags,
            metric: options.metric,
            ttl: options.ttl,
        }
    }

    /// Converts a caught failure into an event, stamped with the clock
    /// reading.
    ///
    /// The result reports service `"monitoring exception"` in state
    /// `"error"`, tagged `"exception"` plus the failure kind, with the
    /// message and trace joined into the description.
    #[must_use]
    pub fn from_failure(failure: &FailureReport, clock: &dyn Clock) -> Self {
        Self {
            service: Some("monitoring exception".to_string()),
            state: Some("error".to_string()),
            time: Some(clock.now()),
            description: Some(format!(
                "{}\n\n{}",
                failure.message,
                failure.trace.join("\n")
            )),
            tags: vec!["exception".to_string(), failure.kind.clone()],
            ..Self::default()
        }
    }

    /// Fills in `time` from the clock when absent.
    ///
    /// A timestamp the reporter sent is never overwritten, and no other
    /// field is touched.
    pub fn ensure_time(&mut self, clock: &dyn Clock) {
        if self.time.is_none() {
            self.time = Some(clock.now());
        }
    }

    /// Reads one scalar field as a [`Value`], `Null` when absent.
    ///
    /// This is the seam the filtering layer drives [`Matcher`] evaluation
    /// through.
    ///
    /// [`Matcher`]: crate::matcher::Matcher
    #[must_use]
    pub fn field(&self, field: Field) -> Value {
        match field {
            Field::Host => self.host.clone().into(),
            Field::Service => self.service.clone().into(),
            Field::State => self.state.clone().into(),
            Field::Time => self.time.into(),
            Field::Description => self.description.clone().into(),
            Field::Metric => self.metric.into(),
            Field::Ttl => self.ttl.into(),
        }
    }

    /// Returns true if the event carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Returns true if the event carries every tag in `required`.
    ///
    /// An empty `required` set matches any event.
    #[must_use]
    pub fn tagged_all(&self, required: &[&str]) -> bool {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        sets::subset(required, &tags)
    }

    /// Returns true if the event carries at least one tag in `candidates`.
    #[must_use]
    pub fn tagged_any(&self, candidates: &[&str]) -> bool {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        sets::overlap(candidates, &tags)
    }
}

/// The scalar fields of an [`Event`], as a closed set for field-driven
/// matching.
///
/// Tags are a collection rather than a scalar; test them with
/// [`Event::has_tag`] and friends, or the [`sets`] predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Host,
    Service,
    State,
    Time,
    Description,
    Metric,
    Ttl,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Host => "host",
            Self::Service => "service",
            Self::State => "state",
            Self::Time => "time",
            Self::Description => "description",
            Self::Metric => "metric",
            Self::Ttl => "ttl",
        };
        write!(f, "{name}")
    }
}

/// Explicit option set for [`Event::from_options`].
///
/// Every recognized option is listed here with its default. In serialized
/// form unknown keys are rejected rather than silently carried, so a typo
/// in a reporter config surfaces as a deserialization error.
///
/// # Examples
///
/// ```
/// use lookout_core::EventOptions;
///
/// let options: EventOptions =
///     serde_json::from_str(r#"{"service": "cpu", "metric": 0.93}"#).unwrap();
/// assert_eq!(options.service.as_deref(), Some("cpu"));
/// assert_eq!(options.metric, Some(0.93));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<f64>,
    /// Event time in possibly fractional epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

/// A caught runtime failure, as reported by the embedding host.
///
/// Hosts catch their own failures (a sink that cannot connect, a stream
/// function that panics) and hand them to [`Event::from_failure`] so they
/// flow through the pipeline like any other event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Failure kind or type name, as the host reports it.
    pub kind: String,
    /// Primary failure message.
    pub message: String,
    /// Formatted trace lines, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<String>,
}

impl FailureReport {
    /// Creates a report with an empty trace.
    #[must_use]
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            trace: Vec::new(),
        }
    }

    /// Attaches trace lines.
    #[must_use]
    pub fn with_trace(mut self, trace: Vec<String>) -> Self {
        self.trace = trace;
        self
    }

    /// Builds a report from any standard error.
    ///
    /// The kind is the error's type name and the trace is its `source`
    /// chain, outermost cause first.
    #[must_use]
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        let mut trace = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            trace.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        Self {
            kind: std::any::type_name::<E>().to_string(),
            message: error.to_string(),
            trace,
        }
    }
}

/// One frame's worth of traffic.
///
/// Requests carry `events`, `states`, or a `query`; replies carry `ok` and
/// possibly `error` or query results in `events`. The codec does not
/// enforce a direction, so a `Message` can hold any mix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    /// Acknowledgement flag on replies.
    pub ok: Option<bool>,
    /// Failure reason on negative replies.
    pub error: Option<String>,
    /// State transitions.
    pub states: Vec<Event>,
    /// Readings and query results.
    pub events: Vec<Event>,
    /// Query expression, when the frame is a query request.
    pub query: Option<String>,
}

impl Message {
    /// Positive acknowledgement reply.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            ok: Some(true),
            ..Self::default()
        }
    }

    /// Negative reply carrying a failure reason.
    #[must_use]
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            ok: Some(false),
            error: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Sets the events channel.
    #[must_use]
    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    /// Sets the states channel.
    #[must_use]
    pub fn with_states(mut self, states: Vec<Event>) -> Self {
        self.states = states;
        self
    }

    /// Sets the query expression.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}
