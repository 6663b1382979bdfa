//! Time sources for event normalization.
//!
//! Every timestamp this crate injects comes from an explicit [`Clock`]
//! rather than an ambient global read, so deterministic tests and replay
//! tooling can pin "now" to a fixed instant.

use chrono::Utc;

/// A source of "now" in whole seconds since the Unix epoch.
///
/// The codec reads the clock once per event that arrives without a
/// timestamp, so implementations should be cheap and must be safe to share
/// across threads.
///
/// # Examples
///
/// ```
/// use lookout_core::{Clock, FixedClock};
///
/// let clock = FixedClock::at(1_700_000_000);
/// assert_eq!(clock.now(), 1_700_000_000);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time as whole seconds since the Unix epoch.
    fn now(&self) -> i64;
}

/// Wall-clock time from the operating system, in UTC.
///
/// This is the clock production ingest runs with.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock pinned to one fixed instant.
///
/// Used by tests and replay tooling where the injected timestamp must be
/// reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: i64,
}

impl FixedClock {
    /// Creates a clock that always reads `instant` epoch seconds.
    #[must_use]
    pub const fn at(instant: i64) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.instant
    }
}
