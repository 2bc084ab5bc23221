//! The Book Inspector (spec.md §4.8, component 8).
//!
//! A read-only, priority-ordered view of both sides of the book for
//! debugging and tests. Purely observational: nothing in the matcher or
//! dispatcher reads it back, and it never influences which events are
//! emitted (spec.md §4.8: "non-semantic — it observes the book, it never
//! changes what the matcher does"). Grounded in the teacher's
//! `orderbook/snapshot.rs`, stripped of its persistence/serialization
//! concerns (those live in `orderbook/serialization.rs` here).

use crate::order::Side;
use crate::orderbook::index::PriceTimeIndex;
use tracing::trace;

/// One resting order as the inspector sees it: just enough to reconstruct
/// priority order, not the full `Order` (callers that need more can go
/// through [`PriceTimeIndex::get_by_id`]).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DumpLevel {
    pub order_id: u32,
    pub price: f64,
    pub remaining_quantity: u64,
}

/// Both sides of the book, each in priority order (best first).
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct BookDump {
    pub bids: Vec<DumpLevel>,
    pub asks: Vec<DumpLevel>,
}

fn dump_side(index: &PriceTimeIndex, side: Side) -> Vec<DumpLevel> {
    index
        .iter_side(side)
        .map(|order| DumpLevel {
            order_id: order.id,
            price: order.price.to_f64(),
            remaining_quantity: order.remaining_quantity(),
        })
        .collect()
}

/// A snapshot of both sides of the book in priority order.
pub fn dump(index: &PriceTimeIndex) -> BookDump {
    BookDump {
        bids: dump_side(index, Side::Buy),
        asks: dump_side(index, Side::Sell),
    }
}

/// Emit the book dump at `trace` level only, so it is silenced in
/// production by ordinary log-level filtering (SPEC_FULL.md §3.1) and
/// costs nothing when trace logging is disabled at compile time via the
/// `tracing` max-level features.
pub fn trace_dump(index: &PriceTimeIndex) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    let snapshot = dump(index);
    trace!(
        bid_levels = snapshot.bids.len(),
        ask_levels = snapshot.asks.len(),
        ?snapshot,
        "book state"
    );
}
