// src/specs/individual.rs
//! Individual-event rows: swimmer identity, finals time, and the ordered
//! per-50 split sequence reconstructed from the lines under each result row.
//!
//! Row shape (irregular spacing, name width varies):
//! ```text
//!   1 Smith, John JR Auburn            4:10.00    4:08.50N
//!        23.50      48.20 (24.70)    1:13.00 (24.80)
//! ```

use crate::config::consts::{MAX_SPLITS, SPLIT_SCAN_LINES};
use crate::core::lines::{LineCursor, block_start, is_separator};
use crate::core::sanitize::normalize_ws;
use crate::core::tokens::{self, Tok};
use crate::records::{IndividualRecord, SplitEntry};

// Bounding-token scan distance when resolving name/year/school.
const YEAR_LOOKAHEAD: usize = 4;

pub fn parse(page_text: &str) -> Vec<IndividualRecord> {
    let lines: Vec<&str> = page_text.lines().collect();
    let start = block_start(&lines, 1);
    let mut cur = LineCursor::at(&lines, start);
    let mut out = Vec::new();

    while let Some(line) = cur.advance() {
        let Some(rank) = leading_rank(line) else { continue };

        // Rows without a comma-bearing token never become records.
        let Some((name, year, school)) = resolve_identity(line) else { continue };
        let finals = finals_time(line);

        // Collect the swimmer's split lines up to the next result row or
        // section break; the cap stops runaway collection on malformed pages.
        let collected = cur.take_while(SPLIT_SCAN_LINES, |l| !terminates_row(l));
        let mut buf = String::new();
        for l in collected {
            if tokens::line_has_time(l) {
                buf.push_str(l);
                buf.push(' ');
            }
        }

        out.push(IndividualRecord {
            rank,
            name,
            year,
            school,
            finals,
            splits: reconstruct_splits(&buf),
        });
    }
    out
}

/// `^\s*\d+\s+` — the rank at the front of a result row.
pub fn leading_rank(line: &str) -> Option<String> {
    let t = line.trim_start();
    let digits: String = t.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let rest = &t[digits.len()..];
    if rest.starts_with(|c: char| c == ' ' || c == '\t') {
        Some(digits)
    } else {
        None
    }
}

fn terminates_row(line: &str) -> bool {
    let t = line.trim();
    t.is_empty()
        || t.starts_with("--")
        || t.starts_with("===")
        || is_separator(line)
        || line.contains("Team Rankings")
        || leading_rank(line).is_some()
}

/// Name begins at the first comma-bearing word; absorb words until the
/// class-year token, then take the single word after it as the school.
/// With no year token in reach, merge one continuation word and give up.
fn resolve_identity(line: &str) -> Option<(String, Option<String>, Option<String>)> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let comma_at = words.iter().position(|w| w.contains(','))?;

    let mut name = s!(words[comma_at]);
    for (absorbed, w) in words[comma_at + 1..].iter().enumerate() {
        if tokens::is_year_word(w) {
            let school = words
                .get(comma_at + 2 + absorbed)
                .filter(|s| !tokens::is_time_like(s))
                .map(|s| s!(*s));
            return Some((normalize_ws(&name), Some(s!(*w)), school));
        }
        if absorbed >= YEAR_LOOKAHEAD {
            break;
        }
        name.push(' ');
        name.push_str(w);
    }

    // Single-word continuation heuristic.
    let mut name = s!(words[comma_at]);
    if let Some(next) = words.get(comma_at + 1) {
        if !tokens::is_time_like(next) {
            name.push(' ');
            name.push_str(next);
        }
    }
    Some((normalize_ws(&name), None, None))
}

/// Last time-bearing column on the row, qualifier letters dropped.
fn finals_time(line: &str) -> Option<String> {
    tokens::split_columns(line)
        .into_iter()
        .rev()
        .find(|c| tokens::is_time_like(c))
        .map(|c| s!(tokens::strip_qualifier(c)))
}

/// Walk the typed token stream of the collected split lines. A time followed
/// by `(inner)` is a cumulative with `inner` as its split; a lone time is a
/// split with no known cumulative. A leading sub-1.0 value is a reaction
/// time, not a split. Isolated here so alternate meet-software orderings can
/// be swapped in without touching collection.
pub fn reconstruct_splits(buf: &str) -> Vec<SplitEntry> {
    let toks: Vec<Tok> = tokens::scan_tokens(buf)
        .into_iter()
        .filter(|t| !matches!(t, Tok::Word(_)))
        .collect();

    let mut entries: Vec<SplitEntry> = Vec::new();
    let mut i = 0usize;
    let mut first = true;

    while i < toks.len() && entries.len() < MAX_SPLITS {
        let Tok::Time(t) = &toks[i] else {
            i += 1;
            continue;
        };
        if first {
            first = false;
            if t.parse::<f64>().map(|v| v < 1.0).unwrap_or(false) {
                i += 1; // reaction-time prefix
                continue;
            }
        }

        let (split, cumulative, consumed) = if matches!(toks.get(i + 1), Some(Tok::Open)) {
            match (toks.get(i + 2), toks.get(i + 3)) {
                (Some(Tok::Time(inner)), Some(Tok::Close)) => {
                    (Some(inner.clone()), Some(t.clone()), 4)
                }
                // Paren group we cannot resolve; keep what was built.
                _ => break,
            }
        } else {
            (Some(t.clone()), None, 1)
        };

        let distance = (entries.len() as u32 + 1) * 50;
        entries.push(SplitEntry { distance, split, cumulative });
        i += consumed;
    }
    entries
}
