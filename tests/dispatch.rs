// tests/dispatch.rs
use meet_scrape::records::{EventKind, EventRecords};
use meet_scrape::specs::{self, extract_event_header, extract_meet_name};

const INDIVIDUAL_PAGE: &str = include_str!("fixtures/individual_page.txt");
const RELAY_PAGE: &str = include_str!("fixtures/relay_page.txt");
const DIVING_PAGE: &str = include_str!("fixtures/diving_page.txt");

#[test]
fn header_extraction_classifies_relay() {
    let h = extract_event_header("junk\nEvent 21  Men 400 Yard Freestyle Relay\nmore").unwrap();
    assert_eq!(h.number, "21");
    assert_eq!(h.name, "Men 400 Yard Freestyle Relay");
    assert_eq!(h.kind, EventKind::Relay);
}

#[test]
fn diving_beats_individual_relay_beats_diving() {
    let d = extract_event_header("Event 14  Men 1 mtr Diving").unwrap();
    assert_eq!(d.kind, EventKind::Diving);
    // Relay wins when both tokens appear.
    let r = extract_event_header("Event 9  Mixed Diving Relay").unwrap();
    assert_eq!(r.kind, EventKind::Relay);
    let i = extract_event_header("Event 2  Men 500 Yard Freestyle").unwrap();
    assert_eq!(i.kind, EventKind::Individual);
}

#[test]
fn page_without_event_header_yields_none() {
    let parsed = specs::parse_event_page("Team Rankings\nnothing here\n");
    assert!(parsed.header.is_none());
    assert_eq!(parsed.records, EventRecords::None);
}

#[test]
fn dispatcher_routes_by_event_kind() {
    let ind = specs::parse_event_page(INDIVIDUAL_PAGE);
    assert!(matches!(ind.records, EventRecords::Individual(ref v) if v.len() == 2));

    let rel = specs::parse_event_page(RELAY_PAGE);
    assert!(matches!(rel.records, EventRecords::Relay(ref v) if v.len() == 6));

    let div = specs::parse_event_page(DIVING_PAGE);
    assert!(matches!(div.records, EventRecords::Diving(ref v) if v.len() == 2));
}

#[test]
fn dispatching_is_idempotent() {
    assert_eq!(specs::parse_event_page(RELAY_PAGE), specs::parse_event_page(RELAY_PAGE));
}

#[test]
fn meet_name_skips_license_banner() {
    assert_eq!(
        extract_meet_name(INDIVIDUAL_PAGE).as_deref(),
        Some("2025 NCAA Division I Men's Swimming & Diving")
    );
    assert_eq!(extract_meet_name("Event 1  Something\n"), None);
}
