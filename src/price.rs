//! Fixed-point price representation.
//!
//! Prices are real-valued with an absolute comparison tolerance of `1e-8`.
//! Comparing floats with an epsilon directly as a sort key breaks
//! transitivity (and therefore the ordered index), so prices are quantized
//! once, at construction, into integer ticks of `1e-8` each. Two prices
//! constructed from the same (or tolerance-close) `f64` compare equal, hash
//! equal, and order consistently.

use std::fmt;

/// Number of ticks per whole price unit. One tick equals `1e-8`, the
/// comparison tolerance prices are equal within.
const TICKS_PER_UNIT: f64 = 1e8;

/// A price, stored internally as a signed count of `1e-8` ticks.
///
/// `Price` implements `Ord`/`Eq` directly on the tick value, so it can be
/// used as a `BTreeMap`/`SkipMap` key without the usual caveats of ordering
/// floating-point numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// Zero price, used as the reference price when the opposite side of
    /// the book is empty.
    pub const ZERO: Price = Price(0);

    /// Quantize an `f64` price into ticks.
    pub fn from_f64(price: f64) -> Self {
        Price((price * TICKS_PER_UNIT).round() as i64)
    }

    /// Recover the floating-point price, losslessly for any price that was
    /// itself constructed from a value representable at `1e-8` precision.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / TICKS_PER_UNIT
    }

    /// Raw tick count, exposed so index keys can sort directly on it.
    pub fn ticks(self) -> i64 {
        self.0
    }

    /// True if `self` is a whole-unit multiple of `tick_size` (also
    /// expressed as a price, e.g. `Price::from_f64(0.25)`).
    pub fn is_multiple_of(self, tick_size: Price) -> bool {
        tick_size.0 != 0 && self.0 % tick_size.0 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::from_f64(value)
    }
}
