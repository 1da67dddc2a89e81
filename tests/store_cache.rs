// tests/store_cache.rs
use std::fs;

use meet_scrape::config::consts::STORE_DIR;
use meet_scrape::records;
use meet_scrape::store::{self, DataSet};

#[test]
fn save_and_load_round_trips_headers_and_rows() {
    let ds = DataSet {
        headers: Some(records::diving_headers()),
        rows: vec![
            vec!["m".into(), "u".into(), "14".into(), "ev".into(), "3".into(),
                 "Smith, John".into(), "JR".into(), "Auburn".into(), "345.60".into()],
        ],
    };
    store::save_dataset("cache_roundtrip_test", &ds).unwrap();

    let loaded = store::load_dataset("cache_roundtrip_test");
    // Drop the artifact before asserting so a failure never leaves it behind.
    let _ = fs::remove_file(format!("{STORE_DIR}/cache_roundtrip_test.csv"));

    let loaded = loaded.unwrap();
    assert_eq!(loaded.headers, ds.headers);
    assert_eq!(loaded.rows, ds.rows);
}

#[test]
fn missing_sheet_loads_as_none() {
    assert!(store::load_dataset("no_such_sheet_ever").is_none());
}
