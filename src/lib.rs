//! A deterministic, single-threaded limit order book and matching engine
//! for one instrument.
//!
//! The engine maintains a two-sided price-time priority book and matches
//! incoming buy/sell intents against it, emitting a stream of settlement
//! and lifecycle events. It supports four intent kinds: resting limit
//! orders, cancels, immediate-or-nothing market orders, and stop-loss
//! orders that convert to a market order once triggered.
//!
//! # Design
//!
//! - Price comparisons are exact, not epsilon-based: prices are quantized
//!   once at construction into integer ticks (see [`price::Price`]), so
//!   the book's ordering is transitive and safe to use as a sort key.
//! - The book is represented as two ordered collections (one per side)
//!   plus an identity map from order id to resting record
//!   ([`orderbook::index::PriceTimeIndex`]), mirroring how a
//!   high-throughput matching engine separates "what order comes next"
//!   from "where is order N right now".
//! - [`orderbook::MatchingEngine::process`] is the single entry point:
//!   hand it one intent and an [`events::EventSink`], and every event that
//!   intent causes reaches the sink before `process` returns. There are no
//!   asynchronous completions.
//!
//! # Example
//!
//! ```
//! use limitbook_engine::events::VecEventSink;
//! use limitbook_engine::intents::Intent;
//! use limitbook_engine::order::Side;
//! use limitbook_engine::orderbook::MatchingEngine;
//!
//! let mut engine = MatchingEngine::new();
//! let mut sink = VecEventSink::new();
//!
//! engine.process(
//!     Intent::AddLimit { order_id: 1, side: Side::Sell, quantity: 10, price: 100.0 },
//!     &mut sink,
//! );
//! engine.process(
//!     Intent::AddLimit { order_id: 2, side: Side::Buy, quantity: 10, price: 100.0 },
//!     &mut sink,
//! );
//!
//! assert_eq!(sink.events.len(), 4); // two fills, two trades
//! ```

pub mod decoder;
pub mod events;
pub mod intents;
pub mod order;
pub mod orderbook;
pub mod price;

pub mod prelude;
