// src/scrape.rs
//
// Whole-meet collection: discover the event sessions, fetch each page across
// a small worker pool, dispatch every page to the result parsers, and
// aggregate per event type. Per-page failures are logged and skipped; a
// single bad page never aborts the meet.

use std::{
    error::Error, thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }},
};

use crate::{
    config::consts::{ INDEX_FILE, JITTER_MS, REQUEST_PAUSE_MS, WORKERS },
    config::options::{ EventSelector, ScrapeOptions },
    core::{ html, net },
    progress::Progress,
    records::{ self, EventRecords, EventSession, MeetContext },
    specs,
    store::{ self, DataSet },
};

pub const SHEET_INDIVIDUAL: &str = "individual";
pub const SHEET_RELAYS: &str = "relays";
pub const SHEET_DIVING: &str = "diving";

pub struct MeetData {
    pub meet: MeetContext,
    pub individual: DataSet,
    pub relays: DataSet,
    pub diving: DataSet,
}

/// Resolve the meet index URL (a bare meet URL gets `evtindex.htm` appended).
fn index_url(meet_url: &str) -> String {
    let trimmed = meet_url.trim_end_matches('/');
    if trimmed.ends_with(".htm") || trimmed.ends_with(".html") {
        s!(meet_url)
    } else {
        join!(trimmed, "/", INDEX_FILE)
    }
}

/// Fetch and parse the session list of a meet.
pub fn list_sessions(meet_url: &str) -> Result<Vec<EventSession>, Box<dyn Error>> {
    let idx = index_url(meet_url);
    let (host, path) = net::split_url(&idx)?;
    let doc = net::http_get(&host, &path)?;
    Ok(specs::meet_index::parse_sessions(&doc, &idx))
}

fn selected(sessions: Vec<EventSession>, opts: &ScrapeOptions) -> Vec<EventSession> {
    sessions
        .into_iter()
        .filter(|s| match &opts.events {
            EventSelector::All => true,
            EventSelector::Numbers(wanted) => s
                .number
                .as_deref()
                .and_then(|n| n.parse::<u32>().ok())
                .map(|n| wanted.contains(&n))
                .unwrap_or(false),
        })
        .filter(|s| opts.session.map(|k| s.session == k).unwrap_or(true))
        .collect()
}

/// Fetch one event page and return its preformatted result text. Pages
/// without a `<pre>` block degrade to the tag-stripped document body.
fn fetch_page_text(url: &str) -> Result<String, Box<dyn Error>> {
    let (host, path) = net::split_url(url)?;
    let doc = net::http_get(&host, &path)?;
    Ok(html::pre_text(&doc).unwrap_or_else(|| {
        crate::core::sanitize::normalize_entities(&html::strip_tags_keep_layout(&doc))
    }))
}

/// Collect a whole meet into the three event-type datasets.
pub fn collect_meet(
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<MeetData, Box<dyn Error>> {

    if opts.from_cache {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Loading cached datasets…");
        }
        return Ok(MeetData {
            meet: MeetContext {
                meet_name: opts.meet_name.clone().unwrap_or_default(),
                meet_url: opts.meet_url.clone(),
            },
            individual: store::load_dataset(SHEET_INDIVIDUAL).unwrap_or_else(DataSet::empty),
            relays: store::load_dataset(SHEET_RELAYS).unwrap_or_else(DataSet::empty),
            diving: store::load_dataset(SHEET_DIVING).unwrap_or_else(DataSet::empty),
        });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log("Discovering event sessions…");
    }
    let sessions = selected(list_sessions(&opts.meet_url)?, opts);
    logf!("Meet {}: {} sessions selected", opts.meet_url, sessions.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(sessions.len());
    }

    // Concurrency: workers pull session indices off a shared counter and
    // send back (index, page text or error).
    type FetchResult = (usize, Result<String, String>);

    let urls: Arc<Vec<String>> = Arc::new(sessions.iter().map(|s| s.url.clone()).collect());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<FetchResult>();

    let workers = WORKERS.min(urls.len()).max(1);

    for _ in 0..workers {
        let urls = Arc::clone(&urls);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= urls.len() {
                    break;
                }
                let result = fetch_page_text(&urls[i]).map_err(|e| e.to_string());
                let _ = tx.send((i, result));
                let jitter = (i as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Receive out of order; slot back by session index.
    let mut pages: Vec<Option<String>> = vec![None; sessions.len()];
    for _ in 0..sessions.len() {
        match res_rx.recv() {
            Ok((i, Ok(text))) => {
                pages[i] = Some(text);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, &sessions[i].name);
                }
            }
            Ok((i, Err(msg))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, &sessions[i].name);
                }
                loge!("Session {}: {}", sessions[i].name, msg);
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Meet name: explicit override, else the banner of the first fetched page.
    let meet_name = opts
        .meet_name
        .clone()
        .or_else(|| pages.iter().flatten().find_map(|t| specs::extract_meet_name(t)))
        .unwrap_or_else(|| s!("Unknown Meet"));
    let meet = MeetContext { meet_name, meet_url: opts.meet_url.clone() };

    // Dispatch pages in session order and gather per event type.
    let mut individual = Vec::new();
    let mut relay_rows = Vec::new();
    let mut diving_rows = Vec::new();

    for text in pages.iter().flatten() {
        let parsed = specs::parse_event_page(text);
        let Some(header) = parsed.header else {
            logd!("Page without event header; skipped");
            continue;
        };
        match parsed.records {
            EventRecords::Individual(recs) => individual.push((header, recs)),
            EventRecords::Relay(recs) => {
                for r in &recs {
                    relay_rows.push(records::relay_row(&meet, &header, r));
                }
            }
            EventRecords::Diving(recs) => {
                for r in &recs {
                    diving_rows.push(records::diving_row(&meet, &header, r));
                }
            }
            EventRecords::None => {}
        }
    }

    // Individual sheets widen to the largest split count actually present.
    let max_splits = individual
        .iter()
        .flat_map(|(_, recs)| recs.iter().map(|r| r.splits.len()))
        .max()
        .unwrap_or(0);
    let mut individual_rows = Vec::new();
    for (header, recs) in &individual {
        for r in recs {
            individual_rows.push(records::individual_row(&meet, header, r, max_splits));
        }
    }

    let data = MeetData {
        meet,
        individual: DataSet {
            headers: Some(records::individual_headers(max_splits)),
            rows: individual_rows,
        },
        relays: DataSet { headers: Some(records::relay_headers()), rows: relay_rows },
        diving: DataSet { headers: Some(records::diving_headers()), rows: diving_rows },
    };

    // Cache, but ignore any IO error (best-effort).
    for (sheet, ds) in [
        (SHEET_INDIVIDUAL, &data.individual),
        (SHEET_RELAYS, &data.relays),
        (SHEET_DIVING, &data.diving),
    ] {
        if !ds.is_empty() {
            let _ = store::save_dataset(sheet, ds);
        }
    }

    logf!(
        "Collected {} individual / {} relay / {} diving rows",
        data.individual.rows.len(),
        data.relays.rows.len(),
        data.diving.rows.len()
    );
    Ok(data)
}
