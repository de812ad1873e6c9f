use serde::{Deserialize, Serialize};

/// One parsed search-engine result. Ephemeral: produced by the search
/// client, consumed by the prioritizer and matcher, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    /// Outbound URL, already unwrapped from any engine redirect.
    pub url: String,
    pub snippet: String,
}
