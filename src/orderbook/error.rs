//! Engine error types (spec.md §7).
//!
//! Normal-path outcomes never reach here: a malformed intent line, a cancel
//! of an unknown order id, and an unknown intent kind are all communicated
//! by the absence of an event, not by a `Result::Err` (spec.md §7: "The
//! engine never throws to the caller for normal-path outcomes"). The only
//! thing in this enum is spec.md §7 error kind 4 — an internal invariant
//! violation — which is a programmer error, not an input error, and is
//! fatal.
//!
//! Style matches the teacher's own `orderbook/error.rs` /
//! `orderbook/sequencer/error.rs`: a `#[non_exhaustive]` enum with a
//! hand-written `Display` impl, no `thiserror` (the teacher lists
//! `thiserror` as a dependency but never actually uses it in its own error
//! types, so this crate drops the dependency rather than imitate an unused
//! one — see DESIGN.md).

use std::fmt;

/// An internal invariant violation (spec.md §7 error kind 4).
///
/// These indicate the price-time index or identity map has diverged from
/// what spec.md §3's invariants require, and should never be observable
/// from correct dispatcher code. They exist so a violation fails loudly
/// with a diagnostic instead of silently corrupting the book.
#[derive(Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// An orderId was inserted while already present in the index
    /// (violates I1).
    DuplicateOrderId { order_id: u32 },
    /// An orderId was found in the identity map but not in its side's
    /// ordered collection, or vice versa (violates I3).
    IdentityIndexDivergence { order_id: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DuplicateOrderId { order_id } => {
                write!(f, "duplicate order id {order_id}: already present in the price-time index")
            }
            EngineError::IdentityIndexDivergence { order_id } => {
                write!(
                    f,
                    "identity/index divergence for order id {order_id}: book invariant violated"
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Log and panic on an internal invariant violation.
///
/// Spec.md §7 kind 4: "the implementation should halt with diagnostics
/// rather than corrupt the book." There is no recovery path for these —
/// they mean the price-time index is already inconsistent.
#[cold]
pub fn fatal(error: EngineError) -> ! {
    tracing::error!(%error, "internal invariant violation");
    panic!("{error}");
}
