//! Inbound intent messages.

use crate::order::Side;

/// One externally-constructed instruction for the engine to process.
///
/// These are handed in by value — the engine never reaches back out to ask
/// a collaborator for more data about an intent.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Intent {
    AddLimit {
        order_id: u32,
        side: Side,
        quantity: u64,
        price: f64,
    },
    Cancel {
        order_id: u32,
    },
    Market {
        order_id: u32,
        side: Side,
        quantity: u64,
    },
    StopLoss {
        order_id: u32,
        side: Side,
        quantity: u64,
        stop_price: f64,
    },
}
