// tests/parse_individual.rs
use meet_scrape::config::consts::{MAX_SPLITS, SPLIT_SCAN_LINES};
use meet_scrape::specs::individual::{self, reconstruct_splits};

const PAGE: &str = include_str!("fixtures/individual_page.txt");

#[test]
fn parses_swimmer_identity_and_finals() {
    let recs = individual::parse(PAGE);
    assert_eq!(recs.len(), 2);

    let first = &recs[0];
    assert_eq!(first.rank, "1");
    assert_eq!(first.name, "Smith, John");
    assert_eq!(first.year.as_deref(), Some("JR"));
    assert_eq!(first.school.as_deref(), Some("Auburn"));
    // Qualifier letter comes off the stored time.
    assert_eq!(first.finals.as_deref(), Some("4:08.50"));

    let second = &recs[1];
    assert_eq!(second.name, "Jones, Bob");
    assert_eq!(second.finals.as_deref(), Some("4:11.00"));
    assert!(second.splits.is_empty());
}

#[test]
fn split_distances_are_positional_and_increasing() {
    let recs = individual::parse(PAGE);
    let splits = &recs[0].splits;
    assert_eq!(splits.len(), 4);
    for (i, sp) in splits.iter().enumerate() {
        assert_eq!(sp.distance, (i as u32 + 1) * 50);
    }
}

#[test]
fn reaction_prefix_is_dropped_and_paren_pairs_resolve() {
    let recs = individual::parse(PAGE);
    let splits = &recs[0].splits;

    // r:+0.68 never becomes a split.
    assert_eq!(splits[0].split.as_deref(), Some("23.50"));
    assert_eq!(splits[0].cumulative, None);

    // "48.20 (24.70)": the outer value is the cumulative.
    assert_eq!(splits[1].split.as_deref(), Some("24.70"));
    assert_eq!(splits[1].cumulative.as_deref(), Some("48.20"));
    assert_eq!(splits[3].split.as_deref(), Some("24.90"));
    assert_eq!(splits[3].cumulative.as_deref(), Some("1:37.90"));
}

#[test]
fn rows_without_comma_token_are_dropped() {
    let recs = individual::parse(PAGE);
    assert!(recs.iter().all(|r| r.name.contains(',')));
    assert!(!recs.iter().any(|r| r.rank == "3"));
}

#[test]
fn parsing_is_idempotent() {
    assert_eq!(individual::parse(PAGE), individual::parse(PAGE));
}

#[test]
fn malformed_paren_group_keeps_partial_splits() {
    let splits = reconstruct_splits("23.50  48.20 (24.70)  1:13.00 (broken");
    assert_eq!(splits.len(), 2);
    assert_eq!(splits[1].cumulative.as_deref(), Some("48.20"));
}

#[test]
fn split_reconstruction_stops_at_thirty_three_entries() {
    let buf: String = (0..40).map(|_| "50.00 (25.00) ").collect();
    let splits = reconstruct_splits(&buf);
    assert_eq!(splits.len(), MAX_SPLITS);
    assert_eq!(splits.last().unwrap().distance, MAX_SPLITS as u32 * 50);
}

#[test]
fn runaway_split_lines_stop_at_the_line_cap() {
    let sep = "=".repeat(40);
    let mut page = [
        "Event 2  Men 500 Yard Freestyle",
        sep.as_str(),
        "    Name                    Year School                 Seed     Finals",
        sep.as_str(),
        "  1 Smith, John               JR Auburn              4:10.00    4:08.50",
    ]
    .join("\n");
    page.push('\n');
    for _ in 0..40 {
        page.push_str("       25.00\n");
    }

    let recs = individual::parse(&page);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].splits.len(), SPLIT_SCAN_LINES);
}

#[test]
fn lone_times_become_splits_without_cumulative() {
    let splits = reconstruct_splits("0.68 26.10 54.30 1:22.90");
    assert_eq!(splits.len(), 3); // reaction prefix dropped
    assert!(splits.iter().all(|s| s.cumulative.is_none()));
    assert_eq!(splits[2].split.as_deref(), Some("1:22.90"));
    assert_eq!(splits[2].distance, 150);
}
