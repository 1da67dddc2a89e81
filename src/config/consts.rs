// src/config/consts.rs

// Net config
pub const DEFAULT_HOST: &str = "swimmeetresults.tech";
pub const INDEX_FILE: &str = "evtindex.htm";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';

// Parsing bounds
pub const SEPARATOR_MIN_LEN: usize = 40;
pub const MAX_SPLITS: usize = 33;
pub const SPLIT_SCAN_LINES: usize = 16; // per swimmer
pub const RELAY_ORDER_SCAN_LINES: usize = 8; // per team
pub const RELAY_SPLIT_SCAN_LINES: usize = 16; // per team

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "meet";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite
pub const JITTER_MS: u64 = 150; // extra 0..150 ms
