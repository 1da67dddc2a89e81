// src/specs/mod.rs
//! # Result-page “specs” module
//!
//! This module hosts the **page-specific parsing specifications** for HY-TEK
//! result pages. Each spec focuses on a single page shape and encodes *where
//! the ground truth lives in the text* and *how to reconstruct it robustly*.
//!
//! ## What lives here
//! - **Pure text parsing** of one page's preformatted result dump (already
//!   pulled out of the HTML by `core::html::pre_text`).
//! - **Tolerant reconstruction** via `core::tokens` (column splitting, typed
//!   time/paren token stream) and `core::lines` (separator locating,
//!   line-cursor collection loops).
//! - **Light shaping** into the typed records of `records`.
//!
//! ## What does **not** live here
//! - **Networking and caching** – handled by `scrape::collect_meet` and
//!   `store`.
//! - **Export formatting** – `csv`/`file` consume flat rows built from the
//!   records.
//!
//! ## Conventions & invariants
//! - No parsing condition is fatal. A page without an event header yields no
//!   records; a row that cannot resolve a name is dropped; a split stream
//!   that stops making sense keeps whatever was already reconstructed.
//! - Event classification is computed **once** from the header and routed
//!   here; parsers never re-test the event name.
//! - Collection loops are **bounded** (`config::consts`) so a malformed page
//!   can never wedge a scrape.
//!
//! ## Current specs
//! - `event_header` – "Event N <name>" line and the meet-title banner.
//! - `individual` – swim rows with per-50 split reconstruction.
//! - `relay` – team rows correlated with swimmer-order and split lines.
//! - `diving` – single-line placements under "Preliminaries".
//! - `meet_index` – session links on `evtindex.htm`.
//!
//! In short: **`specs` knows how to read the pages.** Other layers decide
//! when to fetch, how to cache, and how to export.

pub mod diving;
pub mod event_header;
pub mod individual;
pub mod meet_index;
pub mod relay;

pub use event_header::{extract_event_header, extract_meet_name};

use crate::records::{EventKind, EventRecords, ParsedEvent};

/// Classify one page and route it to the matching parser. The uniform
/// `(records, event type)` result is all the output side ever sees.
pub fn parse_event_page(page_text: &str) -> ParsedEvent {
    let Some(header) = extract_event_header(page_text) else {
        return ParsedEvent { header: None, records: EventRecords::None };
    };

    let records = match header.kind {
        EventKind::Relay => EventRecords::Relay(relay::parse(page_text)),
        EventKind::Diving => EventRecords::Diving(diving::parse(page_text)),
        EventKind::Individual => EventRecords::Individual(individual::parse(page_text)),
    };

    ParsedEvent { header: Some(header), records }
}
