//! # lookout-core - Wire and normalization core of the Lookout pipeline
//!
//! Lookout ingests monitoring events from the network, filters them with
//! configurable predicates, and fans them out to indexes and sinks. This
//! crate is the boundary all of those components share: it decides what an
//! event is and how it travels as bytes, and it owns the predicate seam the
//! filtering layer asks its questions through.
//!
//! ## Core Concepts
//!
//! - **Event**: One reading or state transition about a service on a host
//! - **Message**: The unit the wire moves; batches of events and states
//!   plus acknowledgement and query fields
//! - **Clock**: An explicit source of "now", injected so decoding is
//!   deterministic under test and replay
//! - **Matcher**: A closed predicate set (pattern, callable, literal) the
//!   filtering layer evaluates against event fields
//!
//! Every event decoded from the wire carries a timestamp: the codec stamps
//! the clock reading onto any event that arrives without one. Encoding
//! never invents data.
//!
//! ## Usage
//!
//! ```rust
//! use lookout_core::{codec, Event, EventOptions, Message, SystemClock};
//!
//! let clock = SystemClock;
//! let event = Event::from_options(
//!     EventOptions {
//!         host: Some("web-1".to_string()),
//!         service: Some("api latency".to_string()),
//!         state: Some("ok".to_string()),
//!         metric: Some(0.217),
//!         tags: vec!["http".to_string()],
//!         ..EventOptions::default()
//!     },
//!     &clock,
//! );
//!
//! let frame = codec::encode(&Message::default().with_events(vec![event]))?;
//! let message = codec::decode(&frame, &clock)?;
//! assert_eq!(message.events[0].state.as_deref(), Some("ok"));
//! # Ok::<(), lookout_core::LookoutError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core records and capabilities
pub mod clock;
pub mod error;
pub mod event;
pub mod value;

// Wire boundary
pub mod codec;
pub mod json;
pub mod wire;

// Matching and comparison
pub mod approx;
pub mod matcher;
pub mod sets;

// Re-export primary types at crate root for convenience
pub use approx::{approx_equal, approx_equal_within, DEFAULT_TOLERANCE};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{LookoutError, LookoutResult};
pub use event::{Event, EventOptions, FailureReport, Field, Message};
pub use json::{event_to_json, unix_to_iso8601};
pub use matcher::Matcher;
pub use value::Value;
