// src/core/lines.rs
//
// Line-cursor walking for the "collect until terminator" loops, plus the
// separator-run locator that finds where the tabular rows begin.

use crate::config::consts::SEPARATOR_MIN_LEN;

/// `===…===` rule lines delimit header and data areas on result pages.
pub fn is_separator(line: &str) -> bool {
    let t = line.trim();
    t.len() >= SEPARATOR_MIN_LEN && t.chars().all(|c| c == '=')
}

/// Index of the first line after the Nth separator (`occurrence` 1-based).
/// Individual/diving pages use the first; relay pages delimit the header
/// area with the same rule as the data area, so callers ask for the second.
/// Degrades to the last separator seen, or 0 when there is none.
pub fn block_start(lines: &[&str], occurrence: usize) -> usize {
    let mut seen = 0usize;
    let mut after_last = 0usize;
    for (i, line) in lines.iter().enumerate() {
        if is_separator(line) {
            seen += 1;
            after_last = i + 1;
            if seen == occurrence {
                return after_last;
            }
        }
    }
    after_last
}

/// Forward-only cursor over the physical lines of a page.
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn at(lines: &'a [&'a str], pos: usize) -> Self {
        Self { lines, pos: pos.min(lines.len()) }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consume lines while `pred` holds, up to `cap` lines. The line that
    /// fails the predicate is left for the caller.
    pub fn take_while<F>(&mut self, cap: usize, mut pred: F) -> Vec<&'a str>
    where
        F: FnMut(&str) -> bool,
    {
        let mut out = Vec::new();
        while out.len() < cap {
            match self.peek() {
                Some(line) if pred(line) => {
                    out.push(line);
                    self.pos += 1;
                }
                _ => break,
            }
        }
        out
    }
}
