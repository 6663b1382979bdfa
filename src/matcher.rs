//! Predicate matching over event field values.
//!
//! Predicates come from configuration and values come from live events, so
//! the two sides meet here without knowing each other. Evaluation is total:
//! a pattern applied to a value that is not text is a non-match, never a
//! panic, and one mismatched event cannot abort the rest of a stream.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::value::Value;

/// A predicate evaluated against a single [`Value`].
///
/// The three kinds are a closed set: a regular expression for text, an
/// arbitrary callable, or a literal compared by equality. Anything that is
/// not a pattern or a callable matches literally, including `Null`.
///
/// # Examples
///
/// ```
/// use lookout_core::{Matcher, Value};
/// use regex::Regex;
///
/// let pattern = Matcher::Pattern(Regex::new("time/s$").unwrap());
/// assert!(pattern.matches(&Value::from("riak gets time/s")));
/// assert!(!pattern.matches(&Value::Int(42)));
///
/// let over_limit = Matcher::predicate(|v| v.as_float().is_some_and(|m| m > 5.0));
/// assert!(over_limit.matches(&Value::Float(10.0)));
/// assert!(!over_limit.matches(&Value::Null));
///
/// assert!(Matcher::from(5).matches(&Value::Int(5)));
/// assert!(Matcher::Literal(Value::Null).matches(&Value::Null));
/// ```
#[derive(Clone)]
pub enum Matcher {
    /// Matches text values the regex finds a match in. Non-text values
    /// never match.
    Pattern(Regex),
    /// Matches whatever the callable answers true for.
    Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>),
    /// Matches by structural equality.
    Literal(Value),
}

impl Matcher {
    /// Wraps a callable as a predicate matcher.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Builds a literal-equality matcher from anything that converts to a
    /// [`Value`].
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Evaluates this predicate against one value.
    ///
    /// Total over all value kinds: a [`Matcher::Pattern`] against a
    /// non-text value answers false rather than raising. A panic inside a
    /// [`Matcher::Predicate`] callable is the caller's own and propagates.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Pattern(pattern) => value.as_text().is_some_and(|text| pattern.is_match(text)),
            Self::Predicate(predicate) => predicate(value),
            Self::Literal(literal) => literal == value,
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(&pattern.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
        }
    }
}

impl From<Regex> for Matcher {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Value> for Matcher {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for Matcher {
    fn from(value: &str) -> Self {
        Self::Literal(value.into())
    }
}

impl From<String> for Matcher {
    fn from(value: String) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i32> for Matcher {
    fn from(value: i32) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i64> for Matcher {
    fn from(value: i64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<f64> for Matcher {
    fn from(value: f64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<bool> for Matcher {
    fn from(value: bool) -> Self {
        Self::Literal(value.into())
    }
}
