//! Replay the canonical fixture scenario against a fresh engine and report
//! whether the emitted event stream matches the expected one (spec.md §8
//! "End-to-end scenarios").
//!
//! Exits `0` and prints a short summary on a match; exits `1` and prints a
//! diff otherwise.

use limitbook_engine::decoder;
use limitbook_engine::events::{Event, EventSink, VecEventSink};
use limitbook_engine::orderbook::MatchingEngine;
use tracing::info;

const FIXTURE: &str = "\
0,100000,1,1,1075
0,100001,0,9,1000
0,100002,0,30,975
0,100003,1,10,1050
0,100004,0,10,950
0,100005,1,2,1025
0,100006,0,1,1000
1,100004
0,100007,1,5,1025
0,100008,0,3,1050
5,100009,1,3
5,100010,0,10
6,100011,1,30,1000
";

/// The event stream this fixture produces.
///
/// A buy-side sweep walks resting buys ascending by price, same direction
/// as a sell-side sweep — so the market sell and the triggered stop-loss
/// both reach `100002` (resting at 975) before `100001`/`100006` (resting
/// at 1000, a higher price but lower priority under this ordering).
fn expected_events() -> Vec<Event> {
    vec![
        Event::CancelAck { order_id: 100004 },
        Event::OrderFullyFilled { order_id: 100005 },
        Event::Trade { quantity: 2, price: 1025.0 },
        Event::OrderPartiallyFilled { order_id: 100008, filled_quantity: 2, remaining_quantity: 1 },
        Event::OrderPartiallyFilled { order_id: 100007, filled_quantity: 1, remaining_quantity: 4 },
        Event::Trade { quantity: 1, price: 1050.0 },
        Event::OrderPartiallyFilled { order_id: 100002, filled_quantity: 3, remaining_quantity: 27 },
        Event::Trade { quantity: 3, price: 975.0 },
        Event::OrderFullyFilled { order_id: 100007 },
        Event::Trade { quantity: 4, price: 1025.0 },
        Event::OrderPartiallyFilled { order_id: 100010, filled_quantity: 4, remaining_quantity: 6 },
        Event::OrderPartiallyFilled { order_id: 100003, filled_quantity: 6, remaining_quantity: 4 },
        Event::Trade { quantity: 6, price: 1025.0 },
        Event::OrderFullyFilled { order_id: 100002 },
        Event::Trade { quantity: 27, price: 975.0 },
        Event::OrderPartiallyFilled { order_id: 100011, filled_quantity: 27, remaining_quantity: 3 },
        Event::OrderPartiallyFilled { order_id: 100001, filled_quantity: 3, remaining_quantity: 6 },
        Event::Trade { quantity: 3, price: 975.0 },
    ]
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut engine = MatchingEngine::new();
    let mut sink = VecEventSink::new();

    let intents: Vec<_> = decoder::decode_lines(FIXTURE).collect();
    info!(count = intents.len(), "decoded fixture intents");

    for intent in intents {
        engine.process(intent, &mut sink);
    }

    let actual = sink.take();
    let expected = expected_events();

    if actual == expected {
        info!(event_count = actual.len(), "fixture replay matched expected event stream");
        println!("OK: {} events matched", actual.len());
        std::process::exit(0);
    }

    eprintln!("MISMATCH: fixture replay diverged from the expected event stream");
    eprintln!("expected ({} events):", expected.len());
    for event in &expected {
        eprintln!("  {event:?}");
    }
    eprintln!("actual ({} events):", actual.len());
    for event in &actual {
        eprintln!("  {event:?}");
    }
    std::process::exit(1);
}
