// tests/parse_diving.rs
use meet_scrape::specs::diving;

const PAGE: &str = include_str!("fixtures/diving_page.txt");

#[test]
fn parses_rank_name_year_school_score() {
    let recs = diving::parse(PAGE);
    assert_eq!(recs.len(), 2);

    let smith = recs.iter().find(|r| r.rank == "3").unwrap();
    assert_eq!(smith.name, "Smith, John");
    assert_eq!(smith.year.as_deref(), Some("JR"));
    assert_eq!(smith.school.as_deref(), Some("Auburn"));
    assert_eq!(smith.score.as_deref(), Some("345.60"));
}

#[test]
fn multi_word_schools_join_between_year_and_score() {
    let recs = diving::parse(PAGE);
    let doe = recs.iter().find(|r| r.rank == "1").unwrap();
    assert_eq!(doe.school.as_deref(), Some("Ohio St"));
    assert_eq!(doe.score.as_deref(), Some("400.00"));
}

#[test]
fn four_digit_year_artifact_is_rejected() {
    let recs = diving::parse(PAGE);
    assert!(!recs.iter().any(|r| r.rank == "2025"));
}

#[test]
fn rows_without_comma_token_are_dropped() {
    let recs = diving::parse(PAGE);
    assert!(!recs.iter().any(|r| r.rank == "7"));
}

#[test]
fn single_line_scenario() {
    let page = "Preliminaries\n3 Smith, John JR Auburn 345.60\n";
    let recs = diving::parse(page);
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(
        (r.rank.as_str(), r.name.as_str(), r.year.as_deref(), r.school.as_deref(), r.score.as_deref()),
        ("3", "Smith, John", Some("JR"), Some("Auburn"), Some("345.60"))
    );
}
