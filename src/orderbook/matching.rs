//! The matching engine core (spec.md §4.2).
//!
//! Grounded in the teacher's `orderbook/matching.rs` loop-and-emit shape
//! (walk best opposite quotes, process one level, check for exhaustion,
//! repeat), adapted to the per-order granularity spec.md's matcher
//! specifies: the teacher batches all FIFO orders resting at one price
//! level into a single `PriceLevel::match_order` call, but spec.md's event
//! contract (§4.2, the worked scenario in §8) requires one `TradeEvent`
//! pair per maker order consumed, so this matcher walks one maker `Order`
//! at a time via [`PriceTimeIndex::peek_best`]/`pop_best`.

use crate::events::{Event, EventSink};
use crate::order::{Order, OrderKind, Side};
use crate::orderbook::index::PriceTimeIndex;
use crate::price::Price;
use std::sync::Arc;
use tracing::trace;

/// Whether a taker at `taker_price` (on `taker_side`, of `taker_kind`) can
/// cross a resting maker quoted at `maker_price` (spec.md §4.2).
///
/// A market taker's price condition is unconditionally true; a limit (or
/// untriggered-then-resting-then-reused) taker crosses exactly when its
/// price is at least as aggressive as the maker's.
fn crosses(taker_kind: OrderKind, taker_side: Side, taker_price: Price, maker_price: Price) -> bool {
    if taker_kind == OrderKind::Market {
        return true;
    }
    match taker_side {
        Side::Buy => taker_price >= maker_price,
        Side::Sell => taker_price <= maker_price,
    }
}

/// Walk `taker`'s opposite side, consuming resting liquidity and emitting
/// trade/lifecycle events, until the taker is exhausted or no more
/// crossings exist.
///
/// `taker` must already be resting in the price-time index on its own side
/// (spec.md §4.3 step 2 / §4.5 step 2: the dispatcher lodges before
/// matching). This function removes it from its own side once its
/// remaining quantity reaches zero, whether that happens because the
/// taker was the one trimmed (Case B) or because the last maker fill
/// exactly exhausted it (Case A).
pub fn match_taker(index: &PriceTimeIndex, taker: &Arc<Order>, sink: &mut dyn EventSink) {
    let opposite = taker.side.opposite();

    loop {
        if taker.remaining_quantity() == 0 {
            break;
        }
        let Some(maker) = index.peek_best(opposite) else {
            break;
        };
        if !crosses(taker.kind, taker.side, taker.price, maker.price) {
            break;
        }

        let maker_qty = maker.remaining_quantity();
        let taker_qty = taker.remaining_quantity();

        if maker_qty <= taker_qty {
            // Case A: maker fully consumed.
            index.pop_best(opposite);
            sink.publish(Event::OrderFullyFilled { order_id: maker.id });
            sink.publish(Event::trade(maker_qty, maker.price));

            let taker_remaining = taker.reduce(maker_qty);
            trace!(
                taker_id = taker.id,
                maker_id = maker.id,
                maker_qty,
                taker_remaining,
                "case A fill"
            );

            if taker_remaining == 0 {
                sink.publish(Event::OrderFullyFilled { order_id: taker.id });
                sink.publish(Event::trade(maker_qty, taker.price));
                index.remove_by_id(taker.id);
                return;
            }
            sink.publish(Event::OrderPartiallyFilled {
                order_id: taker.id,
                filled_quantity: maker_qty,
                remaining_quantity: taker_remaining,
            });
            // Taker still has quantity left: keep walking the book.
        } else {
            // Case B: taker fully consumed, maker trimmed but stays resting.
            let trade_qty = taker_qty;
            let maker_remaining = maker.reduce(trade_qty);
            sink.publish(Event::OrderPartiallyFilled {
                order_id: maker.id,
                filled_quantity: trade_qty,
                remaining_quantity: maker_remaining,
            });
            sink.publish(Event::trade(trade_qty, taker.price));

            taker.reduce(trade_qty);
            trace!(taker_id = taker.id, maker_id = maker.id, trade_qty, "case B fill");
            index.remove_by_id(taker.id);
            return;
        }
    }
}
