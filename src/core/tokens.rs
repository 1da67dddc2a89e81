// src/core/tokens.rs
//
// Token-level scanning for result rows. Two granularities:
// - columns: runs of 2+ spaces separate columns (single spaces occur inside names)
// - typed tokens: word / time / paren stream used by split reconstruction
//
// A "time" is `m:ss.hh` or `ss.hh` (digits, optional colon group, mandatory
// decimal). Qualifier letters appended by the meet software ("2:42.30N")
// are not part of the time and come off with `strip_qualifier`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tok {
    Word(String),
    Time(String),
    Open,
    Close,
}

/// Split a stripped line into columns on runs of two or more spaces.
pub fn split_columns(line: &str) -> Vec<&str> {
    let line = line.trim();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut space_run = 0usize;
    let mut run_start = 0usize;

    for (i, ch) in line.char_indices() {
        if ch == ' ' {
            if space_run == 0 { run_start = i; }
            space_run += 1;
        } else {
            if space_run >= 2 {
                let col = &line[start..run_start];
                if !col.is_empty() { out.push(col); }
                start = i;
            }
            space_run = 0;
        }
    }
    let last = line[start..].trim_end();
    if !last.is_empty() { out.push(last); }
    out
}

/// Try to match a time at byte offset `i`: digits [':' digits] '.' digits.
/// Returns the end offset of the match.
fn scan_time_at(b: &[u8], i: usize) -> Option<usize> {
    let mut j = i;
    while j < b.len() && b[j].is_ascii_digit() { j += 1; }
    if j == i { return None; }

    if j < b.len() && b[j] == b':' {
        let mut k = j + 1;
        while k < b.len() && b[k].is_ascii_digit() { k += 1; }
        if k == j + 1 { return None; }
        j = k;
    }
    if j >= b.len() || b[j] != b'.' { return None; }
    let mut k = j + 1;
    while k < b.len() && b[k].is_ascii_digit() { k += 1; }
    if k == j + 1 { return None; }
    Some(k)
}

/// Produce the typed token stream of a text fragment. Parens become their own
/// tokens; times are recognized anywhere, even glued to other characters
/// ("r:+0.28" yields Word("r:+") then Time("0.28")).
pub fn scan_tokens(text: &str) -> Vec<Tok> {
    let b = text.as_bytes();
    let mut toks = Vec::new();
    let mut word = String::new();
    let mut i = 0usize;

    let flush = |word: &mut String, toks: &mut Vec<Tok>| {
        if !word.is_empty() {
            toks.push(Tok::Word(std::mem::take(word)));
        }
    };

    while i < b.len() {
        let c = b[i];
        match c {
            b'(' => { flush(&mut word, &mut toks); toks.push(Tok::Open); i += 1; }
            b')' => { flush(&mut word, &mut toks); toks.push(Tok::Close); i += 1; }
            c if c.is_ascii_whitespace() => { flush(&mut word, &mut toks); i += 1; }
            c if c.is_ascii_digit() => {
                if let Some(end) = scan_time_at(b, i) {
                    flush(&mut word, &mut toks);
                    toks.push(Tok::Time(text[i..end].to_string()));
                    i = end;
                } else {
                    word.push(c as char);
                    i += 1;
                }
            }
            _ => {
                // Multi-byte chars land here; push the whole char.
                let ch = text[i..].chars().next().unwrap_or('?');
                word.push(ch);
                i += ch.len_utf8();
            }
        }
    }
    flush(&mut word, &mut toks);
    toks
}

/// All time tokens of a fragment, in order.
pub fn time_tokens(text: &str) -> Vec<String> {
    scan_tokens(text)
        .into_iter()
        .filter_map(|t| match t { Tok::Time(v) => Some(v), _ => None })
        .collect()
}

/// First time substring inside a word, if any.
pub fn first_time(word: &str) -> Option<&str> {
    let b = word.as_bytes();
    for i in 0..b.len() {
        if b[i].is_ascii_digit() {
            if let Some(end) = scan_time_at(b, i) {
                return Some(&word[i..end]);
            }
        }
    }
    None
}

pub fn line_has_time(line: &str) -> bool {
    first_time(line).is_some()
}

/// Trailing qualifier letters off a stored time ("2:42.30N" → "2:42.30").
pub fn strip_qualifier(time: &str) -> &str {
    time.trim_end_matches(|c: char| c.is_ascii_uppercase())
}

/// Class-year anchor between name and school: short, no lowercase, at least
/// one letter, not purely numeric (FR/SO/JR/SR/5Y).
pub fn is_year_word(w: &str) -> bool {
    !w.is_empty()
        && w.len() <= 3
        && w.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && w.chars().any(|c| c.is_ascii_uppercase())
}

/// Exact class-year set, used where rows are regular enough to insist on it.
pub fn is_year_abbrev(w: &str) -> bool {
    matches!(w, "FR" | "SO" | "JR" | "SR" | "5Y")
}

/// Team-name boundary on relay result lines: first column that reads as a
/// time (with or without colon, qualifier letters tolerated).
pub fn is_time_like(w: &str) -> bool {
    match first_time(w) {
        Some(t) => {
            let rest = &w[w.find(t).unwrap_or(0) + t.len()..];
            rest.chars().all(|c| c.is_ascii_uppercase())
        }
        None => false,
    }
}

/// Plain decimal with no colon group — diving scores ("345.60"), never swims.
pub fn is_plain_decimal(w: &str) -> bool {
    !w.contains(':') && first_time(w) == Some(w)
}
