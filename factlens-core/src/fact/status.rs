use serde::{Deserialize, Serialize};

/// Publication state of a fact within the content pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactStatus {
    /// Awaiting verification or editorial review.
    Pending,
    /// Live on the site.
    Published,
    /// Rejected by verification or a human editor.
    Rejected,
}
