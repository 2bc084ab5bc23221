//! The resting order record.

use crate::price::Price;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Which side of the book an order rests on, or which side an incoming
/// intent targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side an order on `self` would match against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// The kind of order an `Order` record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OrderKind {
    Limit,
    Market,
    StopLoss,
}

/// A resting order in the book.
///
/// `remaining_quantity` is the only field that mutates after construction:
/// it strictly decreases and the record is removed once it reaches zero.
/// It is stored as an `AtomicU64` rather than behind a `Cell` because
/// `Order` instances are held as `Arc<Order>` inside a
/// [`crossbeam_skiplist::SkipMap`], which requires its values to be `Sync`.
/// The engine itself never touches the book from more than one thread at a
/// time, so there is no actual contention on this atomic — it exists
/// purely so the type fits the chosen ordered-index shape, not for
/// concurrency.
#[derive(Debug)]
pub struct Order {
    /// Caller-assigned, unique for the engine's lifetime.
    pub id: u32,
    pub side: Side,
    remaining_quantity: AtomicU64,
    /// For `Limit`, the caller's limit price. For `Market`, the reference
    /// price recorded at acceptance (informational only). For `StopLoss`
    /// before trigger, the stop price.
    pub price: Price,
    pub kind: OrderKind,
}

impl Order {
    pub fn new(id: u32, side: Side, quantity: u64, price: Price, kind: OrderKind) -> Arc<Order> {
        debug_assert!(quantity > 0, "orders must be constructed with positive quantity");
        Arc::new(Order {
            id,
            side,
            remaining_quantity: AtomicU64::new(quantity),
            price,
            kind,
        })
    }

    /// Current remaining quantity — always positive while resting.
    pub fn remaining_quantity(&self) -> u64 {
        self.remaining_quantity.load(Ordering::Relaxed)
    }

    /// Reduce the remaining quantity by `qty`, returning the new value.
    ///
    /// Panics if `qty` exceeds the current remaining quantity — that would
    /// be an internal invariant violation, never a reachable input-driven
    /// condition.
    pub fn reduce(&self, qty: u64) -> u64 {
        let previous = self.remaining_quantity.load(Ordering::Relaxed);
        let new_value = previous
            .checked_sub(qty)
            .expect("reduce() would underflow remaining_quantity — invariant violation");
        self.remaining_quantity
            .store(new_value, Ordering::Relaxed);
        new_value
    }
}
