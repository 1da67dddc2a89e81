// src/cli.rs
use std::env;

use crate::config::consts::DEFAULT_HOST;
use crate::config::options::{AppOptions, EventSelector, ExportFormat};
use crate::file;
use crate::progress::Progress;
use crate::records::SessionKind;
use crate::scrape::{self, SHEET_DIVING, SHEET_INDIVIDUAL, SHEET_RELAYS};

struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {} event pages…", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _idx: usize, label: &str) {
        eprintln!("  ok   {label}");
    }
    fn item_failed(&mut self, _idx: usize, label: &str) {
        eprintln!("  FAIL {label}");
    }
    fn finish(&mut self) {
        eprintln!("Done ({} pages).", self.total);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = AppOptions::default();
    let mut list_events = false;
    parse_cli(&mut opts, &mut list_events)?;

    if opts.scrape.meet_url.is_empty() && !opts.scrape.from_cache {
        return Err("Missing --meet <url> (see --help)".into());
    }

    if list_events {
        for s in scrape::list_sessions(&opts.scrape.meet_url)? {
            let num = s.number.as_deref().unwrap_or("-");
            println!("{}\t{}\t{}", num, s.name, s.href);
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress { total: 0 };
    let data = scrape::collect_meet(&opts.scrape, Some(&mut progress))?;

    let written = file::export_datasets(
        &opts.export,
        &[
            (SHEET_INDIVIDUAL, &data.individual),
            (SHEET_RELAYS, &data.relays),
            (SHEET_DIVING, &data.diving),
        ],
    )?;

    if written.is_empty() {
        eprintln!("No results collected; nothing written.");
    }
    for p in written {
        println!("{}", p.display());
    }
    Ok(())
}

fn parse_cli(
    opts: &mut AppOptions,
    list_events: &mut bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-m" | "--meet" => {
                let v = args.next().ok_or("Missing value for --meet")?;
                // Bare meet directory names resolve against the result host.
                opts.scrape.meet_url = if v.starts_with("http") {
                    v
                } else {
                    format!("http://{}/{}/", DEFAULT_HOST, v.trim_matches('/'))
                };
            }
            "--meet-name" => {
                opts.scrape.meet_name = Some(args.next().ok_or("Missing value for --meet-name")?);
            }
            "--events" => {
                let v = args.next().ok_or("Missing value for --events")?;
                opts.scrape.events = EventSelector::Numbers(parse_number_list(&v)?);
            }
            "--sessions" => {
                let v = args.next().ok_or("Missing value for --sessions")?;
                opts.scrape.session = Some(match v.to_ascii_lowercase().as_str() {
                    "prelims" => SessionKind::Prelims,
                    "finals" => SessionKind::Finals,
                    "swim-off" | "swimoff" => SessionKind::SwimOff,
                    other => return Err(format!("Unknown session kind: {}", other).into()),
                });
            }
            "--list-events" => *list_events = true,
            "--from-cache" => opts.scrape.from_cache = true,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                opts.export.set_path(&v);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => opts.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_number_list(s: &str) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some(dash) = part.find('-') {
            let a: u32 = part[..dash].trim().parse()?;
            let b: u32 = part[dash + 1..].trim().parse()?;
            if a > b { return Err(format!("Invalid range: {}", part).into()); }
            out.extend(a..=b);
        } else {
            out.push(part.parse()?);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}
