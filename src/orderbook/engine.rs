//! The engine facade: a single public entry point that accepts one
//! intent, fully processes it, and returns.

use crate::events::EventSink;
use crate::intents::Intent;
use crate::order::Side;
use crate::orderbook::config::EngineConfig;
use crate::orderbook::dispatcher;
use crate::orderbook::index::PriceTimeIndex;
use crate::orderbook::inspector;
use crate::price::Price;

/// A deterministic, single-threaded limit order matching engine for one
/// instrument.
///
/// There are no asynchronous completions: when
/// [`process`](MatchingEngine::process) returns, every event the intent is
/// going to cause has already reached `sink`, and every book mutation has
/// been committed.
pub struct MatchingEngine {
    index: PriceTimeIndex,
    config: EngineConfig,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingEngine {
    /// A new, empty engine with no order validation restrictions.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// A new, empty engine with the given validation configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        MatchingEngine {
            index: PriceTimeIndex::new(),
            config,
        }
    }

    /// Accept one intent, fully process it, and return.
    ///
    /// Dispatches on intent kind. An unknown intent kind would be logged
    /// and ignored — unreachable here since [`Intent`] is an exhaustive
    /// enum, but the dispatch is still a `match` over every variant rather
    /// than a default arm, so adding a variant without wiring a handler is
    /// a compile error, not a silent no-op.
    pub fn process(&mut self, intent: Intent, sink: &mut dyn EventSink) {
        match intent {
            Intent::AddLimit {
                order_id,
                side,
                quantity,
                price,
            } => dispatcher::add_limit(
                &self.index,
                &self.config,
                order_id,
                side,
                quantity,
                Price::from_f64(price),
                sink,
            ),
            Intent::Cancel { order_id } => dispatcher::cancel(&self.index, order_id, sink),
            Intent::Market {
                order_id,
                side,
                quantity,
            } => dispatcher::market(&self.index, &self.config, order_id, side, quantity, sink),
            Intent::StopLoss {
                order_id,
                side,
                quantity,
                stop_price,
            } => dispatcher::stop_loss(
                &self.index,
                &self.config,
                order_id,
                side,
                quantity,
                Price::from_f64(stop_price),
                sink,
            ),
        }

        inspector::trace_dump(&self.index);
    }

    /// Highest resting buy price, if any resting buy orders exist.
    ///
    /// The book's own priority order walks buys ascending by price (see
    /// [`crate::orderbook::index`]), so this scans the side rather than
    /// reusing `peek_best` — a human-facing "best bid" reader has no reason
    /// to surprise a caller with the worst resting price.
    pub fn best_bid(&self) -> Option<f64> {
        self.index
            .iter_side(Side::Buy)
            .map(|o| o.price)
            .max()
            .map(|p| p.to_f64())
    }

    /// Lowest resting sell price, if any resting sell orders exist.
    pub fn best_ask(&self) -> Option<f64> {
        self.index.peek_best(Side::Sell).map(|o| o.price.to_f64())
    }

    /// `best_ask - best_bid`, if both sides have resting orders.
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// A priority-ordered dump of both sides of the book. Observable but
    /// non-semantic — nothing else in the engine reads this.
    pub fn inspect(&self) -> inspector::BookDump {
        inspector::dump(&self.index)
    }

    /// Direct access to the price-time index, for callers (tests, other
    /// collaborators) that need to assert ordering and identity-map
    /// invariants without going through events.
    pub fn index(&self) -> &PriceTimeIndex {
        &self.index
    }
}
