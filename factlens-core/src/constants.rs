/// Factlens system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Confidence credited for having completed a search at all.
pub const BASE_CONFIDENCE: u32 = 20;

/// Upper bound on any computed confidence.
pub const MAX_CONFIDENCE: u32 = 95;

/// Confidence contributed by one matching tier-1 (official) source.
pub const TIER1_WEIGHT: u32 = 25;

/// Confidence contributed by one matching tier-2 (authority) source.
pub const TIER2_WEIGHT: u32 = 15;

/// Confidence contributed by one matching tier-3 (reference) source.
pub const TIER3_WEIGHT: u32 = 10;

/// Minimum surviving keywords required to attempt verification.
pub const MIN_KEYWORDS: usize = 2;

/// Fixed confidence when fewer than `MIN_KEYWORDS` keywords survive extraction.
pub const INSUFFICIENT_KEYWORDS_CONFIDENCE: u8 = 30;

/// Fixed confidence when the search returns zero results.
pub const NO_RESULTS_CONFIDENCE: u8 = 25;

/// Confidence cap when sources were checked but none corroborated the claim.
pub const REVIEW_CONFIDENCE_CAP: u32 = 35;

/// Below this confidence a corroborated fact is still classified as outdated.
pub const OUTDATED_BELOW: u32 = 40;

/// Match count and confidence required for an outright verified verdict.
pub const STRONG_MATCH_COUNT: u32 = 2;
pub const STRONG_CONFIDENCE: u32 = 60;

/// Confidence required for a partial (single-match) verified verdict.
pub const PARTIAL_CONFIDENCE: u32 = 45;

/// `source` marker for the zero-search-results short-circuit.
pub const SOURCE_NO_RESULTS: &str = "search-no-results";

/// `source` marker for the insufficient-keywords short-circuit.
pub const SOURCE_INSUFFICIENT_KEYWORDS: &str = "insufficient-keywords";
