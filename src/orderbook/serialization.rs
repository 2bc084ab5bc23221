//! Pluggable event serialization (SPEC_FULL.md §4).
//!
//! Grounded in the teacher's `orderbook/serialization.rs`: an
//! [`EventSerializer`] trait plus a JSON implementation, simplified down
//! from the teacher's trade/book-change-event pair to this crate's single
//! [`Event`] enum, and with the teacher's `bincode`-feature variant dropped
//! (no consumer of a binary wire format exists in this crate — see
//! DESIGN.md).

use crate::events::Event;

/// An error serializing or deserializing an [`Event`].
#[derive(Debug)]
pub struct SerializationError {
    message: String,
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "event serialization error: {}", self.message)
    }
}

impl std::error::Error for SerializationError {}

/// A pluggable serializer for engine events.
///
/// Implementations convert [`Event`] to and from byte buffers. The wire
/// format is an implementation detail; this crate ships only
/// [`JsonEventSerializer`], but callers embedding the engine in a larger
/// system can supply their own.
pub trait EventSerializer: std::fmt::Debug {
    /// Serialize an [`Event`] into a byte buffer.
    fn serialize(&self, event: &Event) -> Result<Vec<u8>, SerializationError>;

    /// The MIME-like content type identifier for this format, e.g.
    /// `"application/json"`.
    fn content_type(&self) -> &'static str;
}

/// JSON event serializer using `serde_json`. Always available, and the
/// default (SPEC_FULL.md §4).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventSerializer;

impl JsonEventSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl EventSerializer for JsonEventSerializer {
    fn serialize(&self, event: &Event) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(event).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
