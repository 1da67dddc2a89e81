// src/specs/relay.rs
//! Relay-event rows. Each team block spans three line groups that have to be
//! correlated into per-swimmer records:
//! ```text
//!   1 Tennessee 'A'                     2:43.00    2:42.30N
//!      1) Crooks, Jordan SR        2) r:+0.28 Smith, Alex JR
//!      3) Brown, Chris SO          4) Jones, Mike FR
//!        19.28       40.57 (40.57)     1:01.02 (20.45)  ...
//! ```
//! The flattened time stream carries 3 tokens for leg 1 (the source
//! duplicates the cumulative) and 4 per leg after that.

use crate::config::consts::{RELAY_ORDER_SCAN_LINES, RELAY_SPLIT_SCAN_LINES};
use crate::core::lines::{LineCursor, block_start};
use crate::core::sanitize::normalize_ws;
use crate::core::tokens;
use crate::records::RelayLegRecord;

use super::individual::leading_rank;

pub fn parse(page_text: &str) -> Vec<RelayLegRecord> {
    let lines: Vec<&str> = page_text.lines().collect();
    // Relay pages delimit the header area with the same rule as the data
    // area; the rows start after the second separator.
    let start = block_start(&lines, 2);
    let mut cur = LineCursor::at(&lines, start);
    let mut out = Vec::new();

    while let Some(line) = cur.advance() {
        if ends_section(line) {
            break;
        }
        if leading_rank(line).is_none() {
            continue;
        }
        let team = team_name(line);

        // Swimmer-order lines: `1) Name YR   2) Name YR`, possibly wrapped.
        let mut swimmers: Vec<(u32, String)> = Vec::new();
        for l in cur.take_while(RELAY_ORDER_SCAN_LINES, |l| is_order_line(l)) {
            swimmers.extend(order_segments(l));
        }

        // Split lines: every following time-bearing line up to the next
        // team row (or a line with no times at all).
        let split_lines = cur.take_while(RELAY_SPLIT_SCAN_LINES, |l| {
            tokens::line_has_time(l) && leading_rank(l).is_none() && !is_order_line(l)
        });
        let mut buf = String::new();
        for l in split_lines {
            buf.push_str(l);
            buf.push(' ');
        }

        let times = tokens::time_tokens(&buf);
        let legs = group_leg_times(&times, swimmers.len());

        // Pair legs with swimmers by position (order of appearance).
        for ((order, swimmer), (split, leg_time, cumulative)) in
            swimmers.into_iter().zip(legs)
        {
            out.push(RelayLegRecord {
                team: team.clone(),
                swimmer,
                leg_order: order,
                split,
                leg_time,
                cumulative,
            });
        }
    }
    out
}

/// Trailing summary sections end the result scan entirely.
fn ends_section(line: &str) -> bool {
    let t = line.trim_start();
    line.contains("Team Rankings") || t.starts_with("Men -") || t.starts_with("Women -")
}

/// Words between the rank and the first time-like word. Falls back to the
/// single word after the rank when no time is on the line; a time directly
/// after the rank means the name is missing.
fn team_name(line: &str) -> Option<String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }
    match words[1..].iter().position(|w| tokens::is_time_like(w)) {
        Some(0) => None,
        None => words.get(1).map(|w| s!(*w)),
        Some(at) => Some(words[1..1 + at].join(" ")),
    }
}

fn is_order_line(line: &str) -> bool {
    let t = line.trim_start();
    let mut chars = t.chars();
    matches!((chars.next(), chars.next()), (Some(d), Some(')')) if d.is_ascii_digit())
}

/// Split one physical line before every `digit)` occurrence; a line can hold
/// several swimmers. Each segment yields (leg order, swimmer name) with the
/// reaction prefix (`r:+0.28`) and a trailing class-year word dropped.
fn order_segments(line: &str) -> Vec<(u32, String)> {
    let t = line.trim();
    let b = t.as_bytes();

    let mut cuts = Vec::new();
    for i in 0..b.len() {
        if b[i].is_ascii_digit() && b.get(i + 1) == Some(&b')') {
            // Never cut mid-number; orders are single digits (legs 1-4).
            if i == 0 || !b[i - 1].is_ascii_digit() {
                cuts.push(i);
            }
        }
    }

    let mut out = Vec::new();
    for (k, &at) in cuts.iter().enumerate() {
        let end = cuts.get(k + 1).copied().unwrap_or(t.len());
        let seg = &t[at..end];
        if let Some(parsed) = parse_segment(seg) {
            out.push(parsed);
        }
    }
    out
}

fn parse_segment(seg: &str) -> Option<(u32, String)> {
    let close = seg.find(')')?;
    let order: u32 = seg[..close].trim().parse().ok()?;

    let mut words: Vec<&str> = seg[close + 1..]
        .split_whitespace()
        .filter(|w| !w.starts_with("r:"))
        .collect();
    if let Some(last) = words.last() {
        if tokens::is_year_word(last) {
            words.pop();
        }
    }
    if words.is_empty() {
        return None;
    }
    Some((order, normalize_ws(&words.join(" "))))
}

/// Regroup the flat time stream into `(split, leg, cumulative)` tuples.
/// Leg 1 consumes 3 tokens as-is; each later leg consumes 4 in source order
/// (intermediate cumulative [discarded], split, cumulative, leg). Stops when
/// either the stream or the swimmer list runs out — a short stream yields
/// fewer legs, never an error. Isolated so other layouts can be added.
pub fn group_leg_times(times: &[String], legs: usize) -> Vec<(String, String, String)> {
    let mut ts: &[String] = times;
    if let Some(first) = ts.first() {
        if first.parse::<f64>().map(|v| v < 1.0).unwrap_or(false) {
            ts = &ts[1..]; // reaction-time prefix
        }
    }

    let mut out = Vec::new();
    let mut i = 0usize;
    while out.len() < legs {
        if out.is_empty() {
            if i + 3 > ts.len() {
                break;
            }
            out.push((ts[i].clone(), ts[i + 1].clone(), ts[i + 2].clone()));
            i += 3;
        } else {
            if i + 4 > ts.len() {
                break;
            }
            out.push((ts[i + 1].clone(), ts[i + 3].clone(), ts[i + 2].clone()));
            i += 4;
        }
    }
    out
}
