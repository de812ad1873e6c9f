//! Two-stage source matching: cheap snippet check, then full page fetch.

pub mod content;

use factlens_core::config::VerifyConfig;
use factlens_core::models::SearchHit;
use factlens_core::traits::PageFetcher;

/// Bytes of page text kept before/after the first matched keyword.
const SNIPPET_BEFORE: usize = 80;
const SNIPPET_AFTER: usize = 120;

/// How one candidate source was (or wasn't) matched. The snippet/full-fetch
/// distinction is an explicit branch, not implicit control flow.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// The search snippet alone carried enough keywords — no fetch issued.
    SnippetMatch { evidence: String },
    /// The fetched page body cleared the coverage threshold.
    PageMatch { evidence: String, ratio: f64 },
    /// The page was reachable but didn't cover enough keywords.
    NoMatch { detail: String },
    /// The page couldn't be checked at all.
    FetchFailed { reason: String },
}

impl CheckOutcome {
    /// Whether the source was actually evaluated: a snippet match or a
    /// completed fetch. Fetch failures leave the source unchecked.
    pub fn checked(&self) -> bool {
        !matches!(self, CheckOutcome::FetchFailed { .. })
    }
}

/// Check one prioritized search result against the fact's keywords.
///
/// Stage 1 compares the leading keywords against the engine snippet; a hit
/// records the snippet as evidence and skips the fetch — cheaper for us and
/// for the third-party site. Stage 2 fetches the page, reduces it to
/// content text, and requires the configured coverage across all keywords.
pub async fn check_source(
    hit: &SearchHit,
    keywords: &[String],
    fetcher: &dyn PageFetcher,
    config: &VerifyConfig,
) -> CheckOutcome {
    let lead = &keywords[..keywords.len().min(config.snippet_keywords)];
    let snippet_lower = hit.snippet.to_lowercase();
    let snip = content::coverage(lead, &snippet_lower);
    if snip.ratio >= config.snippet_match_threshold {
        tracing::debug!(
            "matcher: snippet hit on {} ({}/{} keywords)",
            hit.url,
            snip.hits,
            snip.total
        );
        return CheckOutcome::SnippetMatch {
            evidence: hit.snippet.clone(),
        };
    }

    let body = match fetcher.fetch(&hit.url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("matcher: fetch failed for {}: {e}", hit.url);
            return CheckOutcome::FetchFailed {
                reason: e.to_string(),
            };
        }
    };

    let text = content::extract_text(&body).to_lowercase();
    let cov = content::coverage(keywords, &text);
    let percent = (cov.ratio * 100.0).round() as u32;
    if cov.ratio >= config.page_match_threshold {
        let window = cov
            .first_offset
            .map(|offset| content::snippet_window(&text, offset, SNIPPET_BEFORE, SNIPPET_AFTER))
            .unwrap_or_default();
        CheckOutcome::PageMatch {
            evidence: format!("...{window}... ({percent}% keyword match)"),
            ratio: cov.ratio,
        }
    } else {
        CheckOutcome::NoMatch {
            detail: format!("matched {}/{} keywords ({percent}%)", cov.hits, cov.total),
        }
    }
}
