// src/config/consts.rs

// Source
pub const SOURCE_URL: &str = "https://www.imdb.com/chart/top";
pub const USER_AGENT: &str = concat!("imdb_scrape/", env!("CARGO_PKG_VERSION"));
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.8";

// Fetch timeouts (seconds): short connect, longer read
pub const CONNECT_TIMEOUT_SECS: f64 = 1.0;
pub const READ_TIMEOUT_SECS: f64 = 5.0;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "Movies_imdb";
pub const UTF8_BOM: &str = "\u{feff}";

// Extraction bounds
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 10.0;

// Charts
pub const DEFAULT_PAGE_COUNT: usize = 5;
pub const RATING_TICKS: usize = 11;
pub const TEXT_CHART_WIDTH: usize = 100;
