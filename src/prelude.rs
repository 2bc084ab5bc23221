//! Convenience re-exports of the crate's most commonly used types.
//!
//! ```
//! use limitbook_engine::prelude::*;
//! ```

pub use crate::decoder::{decode_line, decode_lines};
pub use crate::events::{Event, EventSink, VecEventSink};
pub use crate::intents::Intent;
pub use crate::order::{Order, OrderKind, Side};
pub use crate::orderbook::{
    BookDump, EngineConfig, EngineError, EventSerializer, JsonEventSerializer, MatchingEngine,
};
pub use crate::price::Price;
