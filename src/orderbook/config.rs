//! Engine configuration.
//!
//! Every field defaults to "no restriction", so an `EngineConfig::default()`
//! engine is observationally identical to one with no validation at all.

use crate::price::Price;
use tracing::warn;

/// Optional order validation rules, checked at acceptance time.
///
/// A rejected order is treated the same way a malformed intent line is:
/// logged and silently dropped, with no event emitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// When set, `AddLimit`/`StopLoss` prices must be an exact multiple of
    /// this tick size.
    pub tick_size: Option<Price>,
    /// When set, order quantities below this value are rejected.
    pub min_quantity: Option<u64>,
    /// When set, order quantities above this value are rejected.
    pub max_quantity: Option<u64>,
}

impl EngineConfig {
    /// No restrictions — the default.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Validate a quantity, logging and returning `false` on rejection.
    pub(crate) fn accepts_quantity(&self, order_id: u32, quantity: u64) -> bool {
        if let Some(min) = self.min_quantity {
            if quantity < min {
                warn!(order_id, quantity, min, "order quantity below configured minimum, skipping");
                return false;
            }
        }
        if let Some(max) = self.max_quantity {
            if quantity > max {
                warn!(order_id, quantity, max, "order quantity above configured maximum, skipping");
                return false;
            }
        }
        true
    }

    /// Validate a price against the configured tick size, logging and
    /// returning `false` on rejection.
    pub(crate) fn accepts_price(&self, order_id: u32, price: Price) -> bool {
        if let Some(tick_size) = self.tick_size {
            if !price.is_multiple_of(tick_size) {
                warn!(order_id, %price, %tick_size, "order price not a multiple of configured tick size, skipping");
                return false;
            }
        }
        true
    }
}
