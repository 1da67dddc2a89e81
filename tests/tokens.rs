// tests/tokens.rs
use meet_scrape::core::tokens::{self, Tok};

#[test]
fn columns_split_on_two_or_more_spaces() {
    let cols = tokens::split_columns("  1 Smith, John    JR Auburn   4:10.00  4:08.50N");
    assert_eq!(cols, vec!["1 Smith, John", "JR Auburn", "4:10.00", "4:08.50N"]);
}

#[test]
fn qualifier_suffix_comes_off_times() {
    assert_eq!(tokens::strip_qualifier("2:42.30N"), "2:42.30");
    assert_eq!(tokens::strip_qualifier("19.28"), "19.28");
}

#[test]
fn typed_stream_separates_times_and_parens() {
    let toks = tokens::scan_tokens("48.20 (24.70) r:+0.68");
    assert_eq!(
        toks,
        vec![
            Tok::Time("48.20".into()),
            Tok::Open,
            Tok::Time("24.70".into()),
            Tok::Close,
            Tok::Word("r:+".into()),
            Tok::Time("0.68".into()),
        ]
    );
}

#[test]
fn times_require_a_decimal_group() {
    assert!(tokens::first_time("Auburn").is_none());
    assert!(tokens::first_time("1234").is_none());
    assert_eq!(tokens::first_time("1:13.00x"), Some("1:13.00"));
    assert!(tokens::line_has_time("     1:21.50 (40.93)"));
    assert!(!tokens::line_has_time("Men - Team Rankings: Through Event 21"));
}

#[test]
fn year_words_and_plain_decimals() {
    for w in ["FR", "SO", "JR", "SR", "5Y"] {
        assert!(tokens::is_year_word(w), "{w}");
        assert!(tokens::is_year_abbrev(w), "{w}");
    }
    assert!(!tokens::is_year_word("Jr"));
    assert!(!tokens::is_year_word("12"));
    assert!(tokens::is_plain_decimal("345.60"));
    assert!(!tokens::is_plain_decimal("1:23.45"));
    assert!(!tokens::is_plain_decimal("345.60x"));
}
