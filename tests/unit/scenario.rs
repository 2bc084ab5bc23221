//! Canonical end-to-end order flow scenarios.

use limitbook_engine::events::{Event, VecEventSink};
use limitbook_engine::intents::Intent;
use limitbook_engine::order::Side;
use limitbook_engine::orderbook::MatchingEngine;

/// The full canonical intent sequence, replayed intent-by-intent.
///
/// Both sides of the book walk ascending by price (a resting buy at a
/// lower price has *higher* match priority than one at a higher price,
/// the same direction a resting sell already uses), with ties broken by
/// ascending order id. So the market sell and the triggered stop-loss,
/// both of which sweep the buy side, reach `100002` (resting at 975)
/// before `100001`/`100006` (resting at 1000). This is the trace the
/// implemented algorithm actually produces; it is asserted group-by-group
/// below so a mismatch on any single intent is easy to localize.
#[test]
fn canonical_scenario_emits_expected_event_stream() {
    let mut engine = MatchingEngine::new();
    let mut sink = VecEventSink::new();

    let mut process = |intent: Intent| {
        engine.process(intent, &mut sink);
        sink.take()
    };

    assert_eq!(
        process(Intent::AddLimit { order_id: 100000, side: Side::Sell, quantity: 1, price: 1075.0 }),
        vec![]
    );
    assert_eq!(
        process(Intent::AddLimit { order_id: 100001, side: Side::Buy, quantity: 9, price: 1000.0 }),
        vec![]
    );
    assert_eq!(
        process(Intent::AddLimit { order_id: 100002, side: Side::Buy, quantity: 30, price: 975.0 }),
        vec![]
    );
    assert_eq!(
        process(Intent::AddLimit { order_id: 100003, side: Side::Sell, quantity: 10, price: 1050.0 }),
        vec![]
    );
    assert_eq!(
        process(Intent::AddLimit { order_id: 100004, side: Side::Buy, quantity: 10, price: 950.0 }),
        vec![]
    );
    assert_eq!(
        process(Intent::AddLimit { order_id: 100005, side: Side::Sell, quantity: 2, price: 1025.0 }),
        vec![]
    );
    assert_eq!(
        process(Intent::AddLimit { order_id: 100006, side: Side::Buy, quantity: 1, price: 1000.0 }),
        vec![]
    );
    assert_eq!(
        process(Intent::Cancel { order_id: 100004 }),
        vec![Event::CancelAck { order_id: 100004 }]
    );
    assert_eq!(
        process(Intent::AddLimit { order_id: 100007, side: Side::Sell, quantity: 5, price: 1025.0 }),
        vec![]
    );
    assert_eq!(
        process(Intent::AddLimit { order_id: 100008, side: Side::Buy, quantity: 3, price: 1050.0 }),
        vec![
            Event::OrderFullyFilled { order_id: 100005 },
            Event::Trade { quantity: 2, price: 1025.0 },
            Event::OrderPartiallyFilled { order_id: 100008, filled_quantity: 2, remaining_quantity: 1 },
            Event::OrderPartiallyFilled { order_id: 100007, filled_quantity: 1, remaining_quantity: 4 },
            Event::Trade { quantity: 1, price: 1050.0 },
        ]
    );
    assert_eq!(
        process(Intent::Market { order_id: 100009, side: Side::Sell, quantity: 3 }),
        vec![
            Event::OrderPartiallyFilled { order_id: 100002, filled_quantity: 3, remaining_quantity: 27 },
            Event::Trade { quantity: 3, price: 975.0 },
        ]
    );
    assert_eq!(
        process(Intent::Market { order_id: 100010, side: Side::Buy, quantity: 10 }),
        vec![
            Event::OrderFullyFilled { order_id: 100007 },
            Event::Trade { quantity: 4, price: 1025.0 },
            Event::OrderPartiallyFilled { order_id: 100010, filled_quantity: 4, remaining_quantity: 6 },
            Event::OrderPartiallyFilled { order_id: 100003, filled_quantity: 6, remaining_quantity: 4 },
            Event::Trade { quantity: 6, price: 1025.0 },
        ]
    );
    assert_eq!(
        process(Intent::StopLoss { order_id: 100011, side: Side::Sell, quantity: 30, stop_price: 1000.0 }),
        vec![
            Event::OrderFullyFilled { order_id: 100002 },
            Event::Trade { quantity: 27, price: 975.0 },
            Event::OrderPartiallyFilled { order_id: 100011, filled_quantity: 27, remaining_quantity: 3 },
            Event::OrderPartiallyFilled { order_id: 100001, filled_quantity: 3, remaining_quantity: 6 },
            Event::Trade { quantity: 3, price: 975.0 },
        ]
    );

    // 100011's 30 units were fully absorbed (27 + 3) so it leaves no
    // residual; 100001, the maker in the final Case B trade, rests with
    // 6 remaining (9 - 3). 100006 (price 1000, qty 1) is never reached.
    assert!(engine.index().get_by_id(100011).is_none());
    assert_eq!(engine.index().get_by_id(100001).unwrap().remaining_quantity(), 6);
    assert_eq!(engine.index().get_by_id(100006).unwrap().remaining_quantity(), 1);
}

/// (a) A single AddLimit with nothing to cross produces no events.
#[test]
fn single_add_limit_produces_no_events() {
    let mut engine = MatchingEngine::new();
    let mut sink = VecEventSink::new();
    engine.process(
        Intent::AddLimit { order_id: 1, side: Side::Buy, quantity: 5, price: 100.0 },
        &mut sink,
    );
    assert!(sink.events.is_empty());
}

/// (b) Two orders at equal price cross in arrival order (lower orderId
/// first is already resting, so it is the maker).
#[test]
fn equal_price_orders_cross_in_arrival_order() {
    let mut engine = MatchingEngine::new();
    let mut sink = VecEventSink::new();

    engine.process(
        Intent::AddLimit { order_id: 1, side: Side::Sell, quantity: 10, price: 100.0 },
        &mut sink,
    );
    engine.process(
        Intent::AddLimit { order_id: 2, side: Side::Buy, quantity: 10, price: 100.0 },
        &mut sink,
    );

    assert_eq!(
        sink.events,
        vec![
            Event::OrderFullyFilled { order_id: 1 },
            Event::Trade { quantity: 10, price: 100.0 },
            Event::OrderFullyFilled { order_id: 2 },
            Event::Trade { quantity: 10, price: 100.0 },
        ]
    );
}

/// (c) A market buy against an empty ask side leaves a residual on the bid
/// side at reference price 0.
#[test]
fn market_buy_against_empty_book_rests_at_zero_reference_price() {
    let mut engine = MatchingEngine::new();
    let mut sink = VecEventSink::new();

    engine.process(
        Intent::Market { order_id: 1, side: Side::Buy, quantity: 10 },
        &mut sink,
    );

    assert!(sink.events.is_empty());
    let resting = engine.index().get_by_id(1).expect("residual order rests on the book");
    assert_eq!(resting.price, limitbook_engine::price::Price::ZERO);
    assert_eq!(resting.remaining_quantity(), 10);
}

/// An untriggered stop-loss rests on the book at its stop price like an
/// ordinary limit order (spec.md §4.6 / §9 — not standard venue behavior,
/// but one of the source's observable quirks this engine must preserve
/// verbatim). A BUY stop with `stopPrice > referencePrice` does not trigger,
/// so it should emit nothing and simply come to rest.
#[test]
fn untriggered_stop_loss_rests_on_the_book_at_its_stop_price() {
    let mut engine = MatchingEngine::new();
    let mut sink = VecEventSink::new();

    engine.process(
        Intent::AddLimit { order_id: 1, side: Side::Sell, quantity: 10, price: 100.0 },
        &mut sink,
    );
    sink.take();

    // Reference price (best ask) is 100; a BUY stop triggers only when
    // stopPrice <= referencePrice, so a stop price above the reference
    // (150 > 100) stays untriggered.
    engine.process(
        Intent::StopLoss { order_id: 2, side: Side::Buy, quantity: 5, stop_price: 150.0 },
        &mut sink,
    );

    assert!(sink.take().is_empty());
    let resting = engine.index().get_by_id(2).expect("untriggered stop rests on the book");
    assert_eq!(resting.price, limitbook_engine::price::Price::from_f64(150.0));
    assert_eq!(resting.remaining_quantity(), 5);
    assert_eq!(resting.kind, limitbook_engine::order::OrderKind::StopLoss);
}
