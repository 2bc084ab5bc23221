//! Line-oriented intent decoder — an external interface, not part of the
//! matching core, but its wire format is fully specified so it is included
//! here rather than left to every caller to reinvent.
//!
//! Format: one intent per line, comma-separated fields, with an optional
//! trailing `// ...` comment. Blank lines and lines that fail to parse are
//! skipped; an unparseable line produces a `tracing::warn!` diagnostic
//! rather than stopping the stream.

use crate::intents::Intent;
use crate::order::Side;
use tracing::warn;

/// Parse every line of `text` into a stream of intents, skipping blank and
/// malformed lines.
pub fn decode_lines(text: &str) -> impl Iterator<Item = Intent> + '_ {
    text.lines().filter_map(decode_line)
}

/// Parse a single line into an [`Intent`].
///
/// Returns `None` (after logging a diagnostic) for a blank line, a line with
/// an unrecognized leading code, or a line with too few / unparseable
/// fields.
pub fn decode_line(line: &str) -> Option<Intent> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let code = fields[0];

    match code {
        "0" => parse_add_limit(&fields, line),
        "1" => parse_cancel(&fields, line),
        "5" => parse_market(&fields, line),
        "6" => parse_stop_loss(&fields, line),
        other => {
            warn!(line, code = other, "unrecognized intent code, skipping line");
            None
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn parse_u32(field: &str, line: &str, what: &str) -> Option<u32> {
    field.parse().ok().or_else(|| {
        warn!(line, field, what, "malformed intent line: bad integer field");
        None
    })
}

fn parse_u64(field: &str, line: &str, what: &str) -> Option<u64> {
    field.parse().ok().or_else(|| {
        warn!(line, field, what, "malformed intent line: bad integer field");
        None
    })
}

fn parse_f64(field: &str, line: &str, what: &str) -> Option<f64> {
    field.parse().ok().or_else(|| {
        warn!(line, field, what, "malformed intent line: bad float field");
        None
    })
}

fn parse_side(field: &str, line: &str) -> Option<Side> {
    match field {
        "0" => Some(Side::Buy),
        "1" => Some(Side::Sell),
        other => {
            warn!(line, side = other, "malformed intent line: bad side code");
            None
        }
    }
}

fn require_fields(fields: &[&str], count: usize, line: &str) -> bool {
    if fields.len() < count {
        warn!(
            line,
            expected = count,
            got = fields.len(),
            "malformed intent line: not enough fields"
        );
        false
    } else {
        true
    }
}

fn parse_add_limit(fields: &[&str], line: &str) -> Option<Intent> {
    if !require_fields(fields, 5, line) {
        return None;
    }
    Some(Intent::AddLimit {
        order_id: parse_u32(fields[1], line, "order_id")?,
        side: parse_side(fields[2], line)?,
        quantity: parse_u64(fields[3], line, "quantity")?,
        price: parse_f64(fields[4], line, "price")?,
    })
}

fn parse_cancel(fields: &[&str], line: &str) -> Option<Intent> {
    if !require_fields(fields, 2, line) {
        return None;
    }
    Some(Intent::Cancel {
        order_id: parse_u32(fields[1], line, "order_id")?,
    })
}

fn parse_market(fields: &[&str], line: &str) -> Option<Intent> {
    if !require_fields(fields, 4, line) {
        return None;
    }
    Some(Intent::Market {
        order_id: parse_u32(fields[1], line, "order_id")?,
        side: parse_side(fields[2], line)?,
        quantity: parse_u64(fields[3], line, "quantity")?,
    })
}

fn parse_stop_loss(fields: &[&str], line: &str) -> Option<Intent> {
    if !require_fields(fields, 5, line) {
        return None;
    }
    Some(Intent::StopLoss {
        order_id: parse_u32(fields[1], line, "order_id")?,
        side: parse_side(fields[2], line)?,
        quantity: parse_u64(fields[3], line, "quantity")?,
        stop_price: parse_f64(fields[4], line, "stop_price")?,
    })
}
