// src/specs/event_header.rs
//! Event-header extraction: the "Event <number> <name…>" line every result
//! page opens its body with, plus the best-effort meet title scan.

use crate::records::EventHeader;
use crate::core::sanitize::normalize_ws;

/// First "Event N <name>" occurrence in the page text. `None` means the page
/// carries no parseable event — callers skip the page, nothing is raised.
pub fn extract_event_header(page_text: &str) -> Option<EventHeader> {
    for line in page_text.lines() {
        if let Some((number, name)) = match_event_line(line) {
            let kind = EventHeader::classify(&name);
            return Some(EventHeader { number, name, kind });
        }
    }
    None
}

/// `…Event␣␣21␣␣Men 400 Yard Freestyle Relay` → ("21", "Men 400 …").
fn match_event_line(line: &str) -> Option<(String, String)> {
    let mut from = 0usize;
    while let Some(rel) = line[from..].find("Event") {
        let at = from + rel;
        from = at + "Event".len();
        let after = &line[at + "Event".len()..];

        // Word boundary on both sides of the keyword.
        if at > 0 && !line[..at].ends_with(|c: char| c.is_whitespace()) {
            continue;
        }
        let rest = after.trim_start();
        if rest.len() == after.len() {
            continue; // no whitespace after "Event"
        }

        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            continue;
        }
        let tail = &rest[digits.len()..];
        if !tail.starts_with(|c: char| c.is_whitespace()) {
            continue;
        }
        let name = normalize_ws(tail.trim().trim_end_matches('\r'));
        if name.is_empty() {
            continue;
        }
        return Some((digits, name));
    }
    None
}

/// Meet title from the page banner: first real line, skipping the license
/// banner the meet software prints above it. Stops at the event line.
pub fn extract_meet_name(page_text: &str) -> Option<String> {
    for line in page_text.lines().take(10) {
        let t = line.trim();
        if t.is_empty() { continue; }
        if t.contains("Licensed to") || t.contains("HY-TEK") { continue; }
        if match_event_line(line).is_some() { break; }
        let t = normalize_ws(t);
        // The banner often appends the date range: "<name> - 3/26/2025 to …".
        let t = match t.find(" - ") {
            Some(i) if t[i + 3..].starts_with(|c: char| c.is_ascii_digit()) => s!(&t[..i]),
            _ => t,
        };
        return Some(t);
    }
    None
}
