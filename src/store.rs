// src/store.rs
//
// Best-effort local cache under `.store/`, one CSV per event-type sheet.
// A failed save never fails a scrape; a missing file just means "no cache".

use std::{fs, io, path::PathBuf};

use crate::config::consts::{STORE_DIR, STORE_SEP};
use crate::csv::{self, detect_headers, parse_rows};

pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn empty() -> Self {
        Self { headers: None, rows: Vec::new() }
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn sheet_path(sheet: &str) -> PathBuf {
    PathBuf::from(STORE_DIR).join(format!("{sheet}.csv"))
}

pub fn save_dataset(sheet: &str, ds: &DataSet) -> io::Result<()> {
    let p = sheet_path(sheet);
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(&p)?;
    let mut writer = io::BufWriter::new(file);
    if let Some(h) = &ds.headers {
        csv::write_row(&mut writer, h, STORE_SEP)?;
    }
    for row in &ds.rows {
        csv::write_row(&mut writer, row, STORE_SEP)?;
    }
    Ok(())
}

pub fn load_dataset(sheet: &str) -> Option<DataSet> {
    let txt = fs::read_to_string(sheet_path(sheet)).ok()?;
    let (headers, rows) = detect_headers(parse_rows(&txt, STORE_SEP));
    Some(DataSet { headers, rows })
}
