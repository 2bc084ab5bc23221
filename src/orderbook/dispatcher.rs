//! The intent dispatcher.
//!
//! Classifies each intent, mutates the book, drives the matcher, and
//! handles the stop-loss trigger check.

use crate::events::{Event, EventSink};
use crate::order::{Order, OrderKind, Side};
use crate::orderbook::config::EngineConfig;
use crate::orderbook::index::PriceTimeIndex;
use crate::orderbook::matching;
use crate::price::Price;
use tracing::{debug, warn};

fn rejects_zero_quantity(order_id: u32, quantity: u64) -> bool {
    if quantity == 0 {
        warn!(order_id, "order quantity is zero, skipping");
        true
    } else {
        false
    }
}

/// Accept a new limit order: lodge it on its own side, then match.
pub fn add_limit(
    index: &PriceTimeIndex,
    config: &EngineConfig,
    order_id: u32,
    side: Side,
    quantity: u64,
    price: Price,
    sink: &mut dyn EventSink,
) {
    debug!(order_id, ?side, quantity, %price, "dispatching AddLimit");
    if rejects_zero_quantity(order_id, quantity) {
        return;
    }
    if !config.accepts_quantity(order_id, quantity) || !config.accepts_price(order_id, price) {
        return;
    }

    let order = Order::new(order_id, side, quantity, price, OrderKind::Limit);
    index.insert(order.clone());
    matching::match_taker(index, &order, sink);
}

/// Cancel a resting order.
///
/// A cancel referencing an unknown order id is silently ignored — no
/// event, no diagnostic. Processing the same cancel twice emits
/// `CancelAck` at most once.
pub fn cancel(index: &PriceTimeIndex, order_id: u32, sink: &mut dyn EventSink) {
    debug!(order_id, "dispatching Cancel");
    if index.remove_by_id(order_id) {
        sink.publish(Event::CancelAck { order_id });
    }
}

/// Shared lodge-then-match path for market orders, used directly by
/// [`market`] and by [`stop_loss`] once a stop has triggered — a triggered
/// stop converts to a market order with the same `(orderId, side, qty)`.
fn lodge_and_match_market(
    index: &PriceTimeIndex,
    order_id: u32,
    side: Side,
    quantity: u64,
    sink: &mut dyn EventSink,
) {
    let opposite = side.opposite();
    // Best opposite quote, or 0 if the opposite side is empty.
    // Informational only — it does not restrict matching.
    let reference_price = index
        .peek_best(opposite)
        .map(|maker| maker.price)
        .unwrap_or(Price::ZERO);

    let order = Order::new(order_id, side, quantity, reference_price, OrderKind::Market);
    index.insert(order.clone());
    matching::match_taker(index, &order, sink);
}

/// Accept a market order: lodge a taker on its own side and sweep the
/// opposite side unconditionally until exhausted or the book runs dry.
pub fn market(
    index: &PriceTimeIndex,
    config: &EngineConfig,
    order_id: u32,
    side: Side,
    quantity: u64,
    sink: &mut dyn EventSink,
) {
    debug!(order_id, ?side, quantity, "dispatching Market");
    if rejects_zero_quantity(order_id, quantity) {
        return;
    }
    if !config.accepts_quantity(order_id, quantity) {
        return;
    }
    lodge_and_match_market(index, order_id, side, quantity, sink);
}

/// The stop trigger condition: for a BUY stop, triggered when
/// `stop_price <= reference_price`; for a SELL stop, triggered when
/// `stop_price >= reference_price`.
fn stop_triggers(side: Side, stop_price: Price, reference_price: Price) -> bool {
    match side {
        Side::Buy => stop_price <= reference_price,
        Side::Sell => stop_price >= reference_price,
    }
}

/// Accept a stop-loss order: check the trigger condition at acceptance
/// time, converting to a market order on trigger. An untriggered stop
/// rests on the book at its stop price like an ordinary limit order — not
/// standard venue behavior, but the one this engine implements.
pub fn stop_loss(
    index: &PriceTimeIndex,
    config: &EngineConfig,
    order_id: u32,
    side: Side,
    quantity: u64,
    stop_price: Price,
    sink: &mut dyn EventSink,
) {
    debug!(order_id, ?side, quantity, %stop_price, "dispatching StopLoss");
    if rejects_zero_quantity(order_id, quantity) {
        return;
    }
    if !config.accepts_quantity(order_id, quantity) || !config.accepts_price(order_id, stop_price) {
        return;
    }

    let opposite = side.opposite();
    let reference_price = index
        .peek_best(opposite)
        .map(|maker| maker.price)
        .unwrap_or(Price::ZERO);

    if stop_triggers(side, stop_price, reference_price) {
        debug!(order_id, %reference_price, "stop-loss triggered, converting to market");
        lodge_and_match_market(index, order_id, side, quantity, sink);
    } else {
        let order = Order::new(order_id, side, quantity, stop_price, OrderKind::StopLoss);
        index.insert(order.clone());
        matching::match_taker(index, &order, sink);
    }
}
