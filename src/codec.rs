//! Wire codec: frames in, normalized messages out.
//!
//! Decoding is the only place untrusted bytes become domain records, and
//! the only place the timestamp invariant is enforced: every state and
//! event in a decoded [`Message`] carries a `time`, defaulted from the
//! caller's [`Clock`] when the wire carried none. Encoding is the pure
//! inverse minus the defaulting: events are written exactly as given,
//! absent fields and all.
//!
//! On byte streams, frames travel length-prefixed:
//!
//! ```text
//! [length: 4 bytes BE][frame: length bytes of wire::Msg]
//! ```
//!
//! The in-memory entry points ([`decode`], [`encode`]) work on bare frame
//! bytes without the prefix.

use std::io::{Read, Write};

use prost::Message as _;

use crate::clock::Clock;
use crate::error::{LookoutError, LookoutResult};
use crate::event::Message;
use crate::wire;

/// Size of the length prefix on streamed frames: a `u32` in network order.
pub const FRAME_PREFIX_BYTES: usize = 4;

/// Largest frame payload a stream reader will accept.
///
/// A prefix above this is treated as malformed rather than allocated, so a
/// corrupt or hostile length cannot take the process down.
pub const MAX_FRAME_BYTES: usize = 16 * 1024 * 1024;

/// Decodes one complete frame held in memory.
///
/// Every state and event in the result has `time` populated, defaulted
/// from `clock` where the wire carried none. Empty input is a valid frame
/// with every field absent.
///
/// # Errors
///
/// [`LookoutError::MalformedMessage`] if the bytes do not parse.
///
/// # Examples
///
/// ```
/// use lookout_core::{codec, FixedClock};
///
/// let message = codec::decode(&[], &FixedClock::at(5))?;
/// assert!(message.events.is_empty());
/// # Ok::<(), lookout_core::LookoutError>(())
/// ```
pub fn decode(bytes: &[u8], clock: &dyn Clock) -> LookoutResult<Message> {
    let frame = wire::Msg::decode(bytes)?;
    Ok(normalize(Message::from(frame), clock))
}

/// Reads one length-prefixed frame from a blocking stream and decodes it.
///
/// Blocks until the prefix and the full payload have arrived. No timeout
/// is applied here; bounding a slow peer is the transport's job.
///
/// # Errors
///
/// [`LookoutError::Stream`] if the reader fails or ends mid-frame,
/// [`LookoutError::MalformedMessage`] if the prefix exceeds
/// [`MAX_FRAME_BYTES`] or the payload does not parse.
pub fn decode_stream<R: Read>(reader: &mut R, clock: &dyn Clock) -> LookoutResult<Message> {
    let mut prefix = [0u8; FRAME_PREFIX_BYTES];
    reader.read_exact(&mut prefix)?;
    let len = u32::from_be_bytes(prefix) as usize;

    if len > MAX_FRAME_BYTES {
        return Err(LookoutError::malformed(format!(
            "frame length {len} exceeds maximum {MAX_FRAME_BYTES}"
        )));
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;
    tracing::trace!(frame_len = len, "read frame from stream");

    decode(&payload, clock)
}

/// Serializes a message to bare frame bytes, without a length prefix.
///
/// Encoding never invents data: an event without a `time` is written
/// without one, and it is the decoding side that will stamp it. Numeric
/// fields are checked first, since the wire schema has no representation
/// for a metric that is not a real number.
///
/// # Errors
///
/// [`LookoutError::InvalidEvent`] if any state or event carries a
/// non-finite `metric` or `ttl`.
pub fn encode(message: &Message) -> LookoutResult<Vec<u8>> {
    validate(message)?;
    Ok(wire::Msg::from(message).encode_to_vec())
}

/// Writes one length-prefixed frame to a blocking stream.
///
/// The mirror of [`decode_stream`]: the encoded frame is preceded by its
/// length as a big-endian `u32`.
///
/// # Errors
///
/// [`LookoutError::InvalidEvent`] under the same rules as [`encode`],
/// [`LookoutError::Stream`] if the writer fails.
pub fn encode_stream<W: Write>(message: &Message, writer: &mut W) -> LookoutResult<()> {
    let frame = encode(message)?;
    let len = u32::try_from(frame.len()).map_err(|_| {
        LookoutError::malformed(format!(
            "frame length {} does not fit the u32 prefix",
            frame.len()
        ))
    })?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(&frame)?;
    Ok(())
}

/// Legacy name for [`decode`].
#[deprecated(since = "0.1.0", note = "renamed to `decode`")]
pub fn decode_msg(bytes: &[u8], clock: &dyn Clock) -> LookoutResult<Message> {
    tracing::warn!("decode_msg is deprecated; call decode instead");
    decode(bytes, clock)
}

fn normalize(mut message: Message, clock: &dyn Clock) -> Message {
    for state in &mut message.states {
        state.ensure_time(clock);
    }
    for event in &mut message.events {
        event.ensure_time(clock);
    }
    message
}

fn validate(message: &Message) -> LookoutResult<()> {
    for event in message.states.iter().chain(&message.events) {
        check_finite("metric", event.metric)?;
        check_finite("ttl", event.ttl)?;
    }
    Ok(())
}

fn check_finite(field: &'static str, value: Option<f64>) -> LookoutResult<()> {
    match value {
        Some(number) if !number.is_finite() => Err(LookoutError::invalid_event(
            field,
            format!("must be a finite number, got {number}"),
        )),
        _ => Ok(()),
    }
}
