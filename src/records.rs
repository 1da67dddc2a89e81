// src/records.rs
//
// Typed records produced by the result parsers, the uniform per-page result
// shape, and the flat-row conversion the export/cache layers consume.

/// Closed event classification, computed once per page from the header.
/// Priority: relay first, then diving, else individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Relay,
    Diving,
    Individual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHeader {
    pub number: String,
    pub name: String,
    pub kind: EventKind,
}

impl EventHeader {
    pub fn classify(name: &str) -> EventKind {
        if name.contains("Relay") {
            EventKind::Relay
        } else if name.contains("Diving") {
            EventKind::Diving
        } else {
            EventKind::Individual
        }
    }
}

/// One 50-yard/meter segment of an individual swim. `distance` is positional
/// (index × 50), never read from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitEntry {
    pub distance: u32,
    pub split: Option<String>,
    pub cumulative: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualRecord {
    pub rank: String,
    pub name: String,
    pub year: Option<String>,
    pub school: Option<String>,
    pub finals: Option<String>,
    pub splits: Vec<SplitEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayLegRecord {
    pub team: Option<String>,
    pub swimmer: String,
    pub leg_order: u32,
    pub split: String,
    pub leg_time: String,
    pub cumulative: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivingRecord {
    pub rank: String,
    pub name: String,
    pub year: Option<String>,
    pub school: Option<String>,
    pub score: Option<String>,
}

/// Uniform record set + type tag handed to the output side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRecords {
    Individual(Vec<IndividualRecord>),
    Relay(Vec<RelayLegRecord>),
    Diving(Vec<DivingRecord>),
    None,
}

impl EventRecords {
    pub fn len(&self) -> usize {
        match self {
            EventRecords::Individual(v) => v.len(),
            EventRecords::Relay(v) => v.len(),
            EventRecords::Diving(v) => v.len(),
            EventRecords::None => 0,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of dispatching one page. `header == None` means the page carried
/// no parseable event at all (skip it, not an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub header: Option<EventHeader>,
    pub records: EventRecords,
}

/// Per-meet context attached to every exported row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeetContext {
    pub meet_name: String,
    pub meet_url: String,
}

/// Session classification from the meet index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Prelims,
    Finals,
    SwimOff,
    Unspecified,
}

/// One event link on the meet index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSession {
    pub number: Option<String>,
    pub name: String,
    pub session: SessionKind,
    pub href: String,
    pub url: String,
}

/* ---------------- Flat-row conversion ---------------- */

fn context_cells(ctx: &MeetContext, header: &EventHeader) -> Vec<String> {
    vec![
        ctx.meet_name.clone(),
        ctx.meet_url.clone(),
        header.number.clone(),
        header.name.clone(),
    ]
}

fn context_headers() -> Vec<String> {
    vec![s!("Meet"), s!("Meet URL"), s!("Event #"), s!("Event")]
}

/// Headers widened to the largest split count actually present — never a
/// fixed 33-pair schema.
pub fn individual_headers(max_splits: usize) -> Vec<String> {
    let mut h = context_headers();
    h.extend([s!("Rank"), s!("Name"), s!("Year"), s!("School"), s!("Finals")]);
    for i in 1..=max_splits {
        let d = (i as u32) * 50;
        h.push(format!("{} Split", d));
        h.push(format!("{} Cum", d));
    }
    h
}

pub fn relay_headers() -> Vec<String> {
    let mut h = context_headers();
    h.extend([
        s!("Team"), s!("Swimmer"), s!("Leg"),
        s!("Split"), s!("Leg Time"), s!("Cumulative"),
    ]);
    h
}

pub fn diving_headers() -> Vec<String> {
    let mut h = context_headers();
    h.extend([s!("Rank"), s!("Name"), s!("Year"), s!("School"), s!("Score")]);
    h
}

/// One flat row per swimmer; split cells padded out to `max_splits` pairs so
/// every row of the sheet has the same width.
pub fn individual_row(
    ctx: &MeetContext,
    header: &EventHeader,
    rec: &IndividualRecord,
    max_splits: usize,
) -> Vec<String> {
    let mut row = context_cells(ctx, header);
    row.push(rec.rank.clone());
    row.push(rec.name.clone());
    row.push(rec.year.clone().unwrap_or_default());
    row.push(rec.school.clone().unwrap_or_default());
    row.push(rec.finals.clone().unwrap_or_default());
    for i in 0..max_splits {
        match rec.splits.get(i) {
            Some(sp) => {
                row.push(sp.split.clone().unwrap_or_default());
                row.push(sp.cumulative.clone().unwrap_or_default());
            }
            None => {
                row.push(s!());
                row.push(s!());
            }
        }
    }
    row
}

pub fn relay_row(ctx: &MeetContext, header: &EventHeader, rec: &RelayLegRecord) -> Vec<String> {
    let mut row = context_cells(ctx, header);
    row.push(rec.team.clone().unwrap_or_default());
    row.push(rec.swimmer.clone());
    row.push(rec.leg_order.to_string());
    row.push(rec.split.clone());
    row.push(rec.leg_time.clone());
    row.push(rec.cumulative.clone());
    row
}

pub fn diving_row(ctx: &MeetContext, header: &EventHeader, rec: &DivingRecord) -> Vec<String> {
    let mut row = context_cells(ctx, header);
    row.push(rec.rank.clone());
    row.push(rec.name.clone());
    row.push(rec.year.clone().unwrap_or_default());
    row.push(rec.school.clone().unwrap_or_default());
    row.push(rec.score.clone().unwrap_or_default());
    row
}
