// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::records::SessionKind;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Which event sessions of a meet to collect.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EventSelector {
    #[default]
    All,
    Numbers(Vec<u32>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Meet index URL, e.g. http://swimmeetresults.tech/NCAA-Division-I-Men-2025/
    pub meet_url: String,
    /// Override; otherwise extracted from the first fetched page.
    pub meet_name: Option<String>,
    pub events: EventSelector,
    /// Restrict to one session kind (prelims/finals/…); None = all.
    pub session: Option<SessionKind>,
    /// Skip the network and reuse the `.store/` cache from a prior run.
    pub from_cache: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            meet_url: s!(),
            meet_name: None,
            events: EventSelector::All,
            session: None,
            from_cache: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportType {
    /// One file per event type: individual.csv, relays.csv, diving.csv.
    PerEventType,
    /// `<stem>_<type>.<ext>` trio next to each other.
    SingleStem,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_dir: PathBuf,
    file_stem: String, // without extension, SingleStem only
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::PerEventType,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Resolve the output file for one event-type dataset ("individual" etc.).
    pub fn out_path(&self, kind_stem: &str) -> PathBuf {
        let ext = self.format.ext();
        let name = match self.export_type {
            ExportType::PerEventType => join!(kind_stem, ".", ext),
            ExportType::SingleStem => join!(self.file_stem.as_str(), "_", kind_stem, ".", ext),
        };
        self.out_dir.join(name)
    }

    /// Parse CLI text into dir + stem. A trailing separator (or an existing
    /// directory) means "directory only"; otherwise the last component is the
    /// stem. A pasted extension is ignored; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let looks_like_dir = s.ends_with('/') || s.ends_with('\\') || Path::new(s).is_dir();

        if looks_like_dir {
            self.out_dir = PathBuf::from(s);
            return;
        }
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                self.out_dir = parent.to_path_buf();
            }
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_string_lossy().into_owned();
            self.export_type = ExportType::SingleStem;
        }
    }
}
