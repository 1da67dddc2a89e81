// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::store::DataSet;

/// Write one file per non-empty event-type dataset. `sets` pairs each
/// dataset with its file stem ("individual" / "relays" / "diving").
/// Returns the paths written; empty datasets produce no file.
pub fn export_datasets(
    export: &ExportOptions,
    sets: &[(&str, &DataSet)],
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    ensure_directory(export.out_dir())?;

    let mut written = Vec::new();
    for (stem, ds) in sets {
        if ds.is_empty() {
            continue;
        }
        let path = export.out_path(stem);
        let contents = to_export_string(
            &ds.headers,
            &ds.rows,
            export.include_headers,
            export.format.delim(),
        );
        fs::write(&path, contents)?;
        written.push(path);
    }
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
