// src/specs/meet_index.rs
//! Session discovery from the meet's `evtindex.htm`: every `.htm` anchor is
//! one event session. Anchor text carries the event number (`#12 …`) and the
//! session classification (Prelims / Finals / Swim-off).

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags_keep_layout, tag_attr, to_lower};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::records::{EventSession, SessionKind};

pub fn parse_sessions(doc: &str, meet_url: &str) -> Vec<EventSession> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((a_s, a_e)) = next_tag_block_ci(doc, "<a", "</a>", pos) {
        let block = &doc[a_s..a_e];
        pos = a_e;

        let Some(href) = tag_attr(block, "href") else { continue };
        if !to_lower(&href).ends_with(".htm") {
            continue;
        }

        let text = normalize_ws(&strip_tags_keep_layout(normalize_entities(
            &inner_after_open_tag(block),
        )));
        // Not an event link.
        if text.is_empty() || text.contains("Latest Completed Event") {
            continue;
        }

        let number = text.strip_prefix('#').and_then(|rest| {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() { None } else { Some(digits) }
        });

        let lower = to_lower(&text);
        let session = if lower.contains("prelims") {
            SessionKind::Prelims
        } else if lower.contains("finals") {
            SessionKind::Finals
        } else if lower.contains("swim-off") || lower.contains("swim off") {
            SessionKind::SwimOff
        } else {
            SessionKind::Unspecified
        };

        let filename = href.rsplit('/').next().unwrap_or(&href).to_string();
        let url = if href.starts_with("http") {
            href.clone()
        } else {
            resolve(meet_url, &filename)
        };

        out.push(EventSession { number, name: text, session, href: filename, url });
    }
    out
}

/// `http://host/Meet-2025/evtindex.htm` + `250326f001.htm`
/// → `http://host/Meet-2025/250326f001.htm`.
fn resolve(meet_url: &str, filename: &str) -> String {
    let base = match meet_url.rfind('/') {
        Some(i) if i > "http://".len() => &meet_url[..i],
        _ => meet_url.trim_end_matches('/'),
    };
    format!("{}/{}", base, filename)
}
