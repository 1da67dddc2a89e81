// src/specs/diving.rs
//! Diving placements: one regularly spaced line per entry under the
//! "Preliminaries" anchor.
//! ```text
//! 3 Smith, John JR Auburn 345.60
//! ```

use crate::core::lines::is_separator;
use crate::core::sanitize::normalize_ws;
use crate::core::tokens;
use crate::records::DivingRecord;

// Year-set absorb distance, as for individual rows.
const YEAR_LOOKAHEAD: usize = 4;

pub fn parse(page_text: &str) -> Vec<DivingRecord> {
    let lines: Vec<&str> = page_text.lines().collect();
    let start = lines
        .iter()
        .position(|l| l.contains("Preliminaries"))
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut out = Vec::new();
    for line in &lines[start..] {
        let t = line.trim();
        if t.is_empty() || is_separator(line) {
            continue;
        }
        // Diving rows are regularly spaced; single-space tokens suffice.
        let words: Vec<&str> = t.split_whitespace().collect();
        let Some(rank) = leading_integer(&words) else { continue };

        // Page footers carry a bare 4-digit year that matches the rank
        // pattern; never a real placement.
        if is_year_artifact(&rank) {
            continue;
        }

        let Some((name, year, school_from)) = resolve_name(&words) else { continue };

        let score_at = words
            .iter()
            .rposition(|w| tokens::is_plain_decimal(w));
        let score = score_at.map(|i| s!(words[i]));

        let school_to = score_at.unwrap_or(words.len());
        let school = if school_from < school_to {
            Some(words[school_from..school_to].join(" "))
        } else {
            None
        };

        out.push(DivingRecord { rank, name, year, school, score });
    }
    out
}

fn leading_integer(words: &[&str]) -> Option<String> {
    let first = words.first()?;
    if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
        Some(s!(*first))
    } else {
        None
    }
}

fn is_year_artifact(rank: &str) -> bool {
    rank.len() == 4 && rank.parse::<u32>().map(|v| (1900..=2099).contains(&v)).unwrap_or(false)
}

/// Name from the first comma word, absorbed up to the explicit year set.
/// Returns (name, year, index of the first school word).
fn resolve_name(words: &[&str]) -> Option<(String, Option<String>, usize)> {
    let comma_at = words.iter().position(|w| w.contains(','))?;

    let mut name = s!(words[comma_at]);
    for (absorbed, w) in words[comma_at + 1..].iter().enumerate() {
        if tokens::is_year_abbrev(w) {
            let year_at = comma_at + 1 + absorbed;
            return Some((normalize_ws(&name), Some(s!(*w)), year_at + 1));
        }
        if absorbed >= YEAR_LOOKAHEAD {
            break;
        }
        name.push(' ');
        name.push_str(w);
    }

    // No year token: keep one continuation word, school unknown.
    let mut name = s!(words[comma_at]);
    if let Some(next) = words.get(comma_at + 1) {
        if !tokens::is_plain_decimal(next) {
            name.push(' ');
            name.push_str(next);
        }
    }
    Some((normalize_ws(&name), None, words.len()))
}
