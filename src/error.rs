//! Error types for the Lookout codec and event pipeline.
//!
//! All errors are strongly typed using thiserror. The three variants mirror
//! the three ways the wire boundary can fail: bytes that do not parse, a
//! locally built event that violates the wire schema, and the transport
//! underneath the codec giving out.

use thiserror::Error;

/// Top-level error type for Lookout codec operations.
#[derive(Debug, Error)]
pub enum LookoutError {
    /// The bytes of a frame (or its length prefix) do not form a valid
    /// message. Raised on decode; the payload is not recoverable.
    #[error("Malformed message: {reason}")]
    MalformedMessage { reason: String },

    /// An event violates the wire schema and cannot be encoded, for
    /// example a NaN metric where the schema requires a real number.
    #[error("Invalid event: {field} {reason}")]
    InvalidEvent {
        field: &'static str,
        reason: String,
    },

    /// The byte stream under the codec failed or ended mid-frame.
    #[error("Stream failure: {0}")]
    Stream(#[from] std::io::Error),
}

impl LookoutError {
    /// Creates a malformed-message error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedMessage {
            reason: reason.into(),
        }
    }

    /// Creates an invalid-event error for one named event field.
    #[must_use]
    pub fn invalid_event(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidEvent {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if this is a malformed-message error.
    #[must_use]
    pub const fn is_malformed_message(&self) -> bool {
        matches!(self, Self::MalformedMessage { .. })
    }

    /// Returns true if this is an invalid-event error.
    #[must_use]
    pub const fn is_invalid_event(&self) -> bool {
        matches!(self, Self::InvalidEvent { .. })
    }

    /// Returns true if this is a stream error.
    #[must_use]
    pub const fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    /// Returns true if retrying the operation could succeed.
    ///
    /// Stream failures are transient by nature; malformed bytes and
    /// schema-violating events stay broken no matter how often they are
    /// resubmitted.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Stream(_))
    }
}

impl From<prost::DecodeError> for LookoutError {
    fn from(err: prost::DecodeError) -> Self {
        Self::MalformedMessage {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for Lookout codec operations.
pub type LookoutResult<T> = Result<T, LookoutError>;
