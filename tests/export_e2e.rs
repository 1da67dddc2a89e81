// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use meet_scrape::config::options::{ExportFormat, ExportOptions, ExportType};
use meet_scrape::file::export_datasets;
use meet_scrape::records::{
    self, EventHeader, EventKind, IndividualRecord, MeetContext, SplitEntry,
};
use meet_scrape::store::DataSet;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("meet_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_meet() -> (MeetContext, EventHeader) {
    (
        MeetContext {
            meet_name: s("2025 NCAA Division I Men's Swimming & Diving"),
            meet_url: s("http://swimmeetresults.tech/NCAA-Division-I-Men-2025/"),
        },
        EventHeader {
            number: s("2"),
            name: s("Men 500 Yard Freestyle"),
            kind: EventKind::Individual,
        },
    )
}

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn individual_rows_widen_to_max_splits_and_quote_names() {
    let (meet, header) = sample_meet();
    let long = IndividualRecord {
        rank: s("1"),
        name: s("Smith, John"),
        year: Some(s("JR")),
        school: Some(s("Auburn")),
        finals: Some(s("4:08.50")),
        splits: vec![
            SplitEntry { distance: 50, split: Some(s("23.50")), cumulative: None },
            SplitEntry { distance: 100, split: Some(s("24.70")), cumulative: Some(s("48.20")) },
        ],
    };
    let short = IndividualRecord {
        rank: s("2"),
        name: s("Jones, Bob"),
        year: None,
        school: None,
        finals: Some(s("4:11.00")),
        splits: vec![],
    };

    let headers = records::individual_headers(2);
    assert_eq!(headers.last().unwrap(), "100 Cum");
    let rows = vec![
        records::individual_row(&meet, &header, &long, 2),
        records::individual_row(&meet, &header, &short, 2),
    ];
    // Same width everywhere, padded with empty cells.
    assert!(rows.iter().all(|r| r.len() == headers.len()));

    let ds = DataSet { headers: Some(headers), rows };
    let dir = tmp_dir("widen");
    let mut export = ExportOptions::default();
    export.set_path(&format!("{}/", dir.display()));

    let written = export_datasets(&export, &[("individual", &ds)]).unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("individual.csv"));

    let content = fs::read_to_string(&written[0]).unwrap();
    assert!(content.starts_with("Meet,Meet URL,Event #,Event,Rank"));
    // Comma-bearing names get quoted.
    assert!(content.contains("\"Smith, John\""));
}

#[test]
fn empty_datasets_produce_no_file() {
    let dir = tmp_dir("empty");
    let mut export = ExportOptions::default();
    export.set_path(&format!("{}/", dir.display()));

    let empty = DataSet { headers: Some(records::diving_headers()), rows: vec![] };
    let written = export_datasets(&export, &[("diving", &empty)]).unwrap();
    assert!(written.is_empty());
    assert!(!dir.join("diving.csv").exists());
}

#[test]
fn single_stem_mode_writes_a_per_type_trio() {
    let dir = tmp_dir("stem");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.set_path(dir.join("ncaa").to_str().unwrap());
    assert_eq!(export.export_type, ExportType::SingleStem);

    let ds = DataSet {
        headers: Some(records::relay_headers()),
        rows: vec![vec![s("m"), s("u"), s("21"), s("ev"), s("Tenn"), s("Crooks, Jordan"),
                        s("1"), s("19.28"), s("40.57"), s("40.57")]],
    };
    let written = export_datasets(&export, &[("relays", &ds)]).unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("ncaa_relays.tsv"));

    let content = fs::read_to_string(&written[0]).unwrap();
    // TSV keeps comma-bearing cells unquoted.
    assert!(content.contains("Crooks, Jordan"));
    assert!(content.contains('\t'));
}

#[test]
fn no_headers_toggle_omits_header_row() {
    let dir = tmp_dir("nohdr");
    let mut export = ExportOptions::default();
    export.include_headers = false;
    export.set_path(&format!("{}/", dir.display()));

    let ds = DataSet {
        headers: Some(records::diving_headers()),
        rows: vec![vec![s("m"), s("u"), s("14"), s("ev"), s("3"), s("Smith, John"),
                        s("JR"), s("Auburn"), s("345.60")]],
    };
    let written = export_datasets(&export, &[("diving", &ds)]).unwrap();
    let content = fs::read_to_string(&written[0]).unwrap();
    assert!(!content.contains("Rank"));
    assert!(content.contains("345.60"));
}
