//! Default values for `VerifyConfig`. The match thresholds and decay
//! constants are empirical and tunable, pending product-level calibration.

pub const DEFAULT_DESTINATION: &str = "London";

pub const DEFAULT_MAX_RESULTS: usize = 8;
pub const DEFAULT_MAX_SOURCES: usize = 5;
pub const DEFAULT_QUERY_KEYWORDS: usize = 8;
pub const DEFAULT_SITE_HINT_DOMAINS: usize = 2;

pub const DEFAULT_SNIPPET_KEYWORDS: usize = 5;
pub const DEFAULT_SNIPPET_MATCH_THRESHOLD: f64 = 0.5;
// Lower than the snippet threshold: full-page text is noisier and keyword
// density naturally drops.
pub const DEFAULT_PAGE_MATCH_THRESHOLD: f64 = 0.4;

pub const DEFAULT_MAX_PAGE_BYTES: usize = 500 * 1024;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = "FactlensBot/0.1 (+https://factlens.dev/bot)";

pub const DEFAULT_SEARCH_MAX_RETRIES: u32 = 2;
pub const DEFAULT_FETCH_MAX_RETRIES: u32 = 1;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;
pub const DEFAULT_SEARCH_MAX_DELAY_MS: u64 = 10_000;
pub const DEFAULT_FETCH_MAX_DELAY_MS: u64 = 4_000;

pub const DEFAULT_VOLATILE_STALE_DAYS: i64 = 90;
pub const DEFAULT_VOLATILE_STALE_PENALTY: u32 = 20;
pub const DEFAULT_VOLATILE_STALE_FLOOR: u32 = 20;
pub const DEFAULT_VOLATILE_AGING_DAYS: i64 = 30;
pub const DEFAULT_VOLATILE_AGING_PENALTY: u32 = 10;
pub const DEFAULT_VOLATILE_AGING_FLOOR: u32 = 30;
pub const DEFAULT_GLOBAL_STALE_DAYS: i64 = 180;
pub const DEFAULT_GLOBAL_STALE_PENALTY: u32 = 15;
pub const DEFAULT_GLOBAL_STALE_FLOOR: u32 = 25;
