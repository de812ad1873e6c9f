//! DuckDuckGo plain-HTML search client.
//!
//! Scrapes the `html.duckduckgo.com` results endpoint — stable markup, no
//! JavaScript — and unwraps the engine's outbound redirect links. This is
//! one `SearchProvider` implementation; the engine never depends on it
//! directly, so the scraping strategy (or a licensed API) can be swapped
//! without touching matching or scoring.

use async_trait::async_trait;
use scraper::{Html, Selector};

use factlens_core::config::VerifyConfig;
use factlens_core::errors::{FetchError, SearchError};
use factlens_core::models::SearchHit;
use factlens_core::traits::SearchProvider;

use crate::transport::HttpClient;

const RESULTS_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Search responses are small; cap well below the page-fetch limit.
const MAX_RESPONSE_BYTES: usize = 2 * 1024 * 1024;

pub struct DuckDuckGoClient {
    http: HttpClient,
}

impl DuckDuckGoClient {
    pub fn new(config: &VerifyConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new(
                &config.user_agent,
                config.search_timeout_secs,
                config.search_retry,
            )?,
        })
    }

    /// Run a query, surfacing transport and markup failures as errors.
    /// A results page with zero hits is `Ok(vec![])` — meaningful data.
    pub async fn try_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let url = format!("{RESULTS_ENDPOINT}?q={}", urlencoding::encode(query));
        let body = self
            .http
            .get_text(&url, MAX_RESPONSE_BYTES)
            .await
            .map_err(|e| match e {
                FetchError::Http { status: 429 } => SearchError::RateLimited { status: 429 },
                FetchError::Http { status } => SearchError::Http { status },
                other => SearchError::Network {
                    reason: other.to_string(),
                },
            })?;
        parse_results(&body, limit)
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoClient {
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        match self.try_search(query, limit).await {
            Ok(hits) => {
                tracing::debug!("search: {} results for {query:?}", hits.len());
                hits
            }
            Err(e) => {
                tracing::warn!("search: request failed for {query:?}: {e}");
                Vec::new()
            }
        }
    }
}

/// Extract result blocks from a DuckDuckGo HTML results page.
///
/// Errors only when the results container is missing entirely (markup
/// change or a bot-interstitial page); an empty container parses to an
/// empty list.
pub(crate) fn parse_results(html: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
    let container_sel = Selector::parse("#links").map_err(|_| SearchError::Parse)?;
    let result_sel = Selector::parse(".result").map_err(|_| SearchError::Parse)?;
    let title_sel = Selector::parse(".result__title a").map_err(|_| SearchError::Parse)?;
    let snippet_sel = Selector::parse(".result__snippet").map_err(|_| SearchError::Parse)?;

    let document = Html::parse_document(html);
    if document.select(&container_sel).next().is_none() {
        return Err(SearchError::Parse);
    }

    let mut hits = Vec::new();
    for block in document.select(&result_sel) {
        if hits.len() >= limit {
            break;
        }
        // Sponsored blocks carry the result--ad modifier.
        if block.value().classes().any(|c| c == "result--ad") {
            continue;
        }
        let Some(anchor) = block.select(&title_sel).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(url) = unwrap_redirect(href) else {
            continue;
        };
        let title = collapse_ws(&anchor.text().collect::<String>());
        if title.is_empty() {
            continue;
        }
        let snippet = block
            .select(&snippet_sel)
            .next()
            .map(|el| collapse_ws(&el.text().collect::<String>()))
            .unwrap_or_default();
        hits.push(SearchHit { title, url, snippet });
    }
    Ok(hits)
}

/// DuckDuckGo wraps outbound links as `//duckduckgo.com/l/?uddg=<encoded>`.
/// Returns the unwrapped target, the href itself if it is already a plain
/// http(s) URL, or None for anything else.
fn unwrap_redirect(href: &str) -> Option<String> {
    if let Some(rest) = href.strip_prefix("//") {
        return unwrap_redirect(&format!("https://{rest}"));
    }
    if href.starts_with("/l/") {
        return unwrap_redirect(&format!("https://duckduckgo.com{href}"));
    }

    let parsed = url::Url::parse(href).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let is_redirect = parsed
        .host_str()
        .is_some_and(|h| h == "duckduckgo.com" || h.ends_with(".duckduckgo.com"))
        && parsed.path() == "/l/";
    if is_redirect {
        return parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned());
    }
    Some(href.to_string())
}

fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r##"
<!DOCTYPE html>
<html><body>
<div id="links" class="results">
  <div class="result results_links results_links_deep web-result result--ad">
    <div class="links_main links_deep result__body">
      <h2 class="result__title">
        <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fads.example.com%2Fbuy">Sponsored: cheap travel cards</a>
      </h2>
      <a class="result__snippet" href="#">Buy now</a>
    </div>
  </div>
  <div class="result results_links results_links_deep web-result">
    <div class="links_main links_deep result__body">
      <h2 class="result__title">
        <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Ftfl.gov.uk%2Ffares%2Ffind-fares&amp;rut=abc123">Caps and Travelcard prices - Transport for London</a>
      </h2>
      <a class="result__snippet" href="#">Pay as you go caps. The daily cap for Zones 1-2 is shown on this page.</a>
    </div>
  </div>
  <div class="result results_links results_links_deep web-result">
    <div class="links_main links_deep result__body">
      <h2 class="result__title">
        <a rel="nofollow" class="result__a" href="https://www.visitlondon.com/traveller-information/getting-around-london/oyster-cards">Oyster cards and travel - visitlondon.com</a>
      </h2>
      <a class="result__snippet" href="#">Everything you need to know about Oyster cards and daily caps.</a>
    </div>
  </div>
  <div class="result results_links results_links_deep web-result">
    <div class="links_main links_deep result__body">
      <h2 class="result__title">
        <a rel="nofollow" class="result__a" href="https://forum.example.org/thread/42">Forum thread on fares</a>
      </h2>
    </div>
  </div>
</div>
</body></html>
"##;

    #[test]
    fn parses_result_blocks_and_unwraps_redirects() {
        let hits = parse_results(FIXTURE, 10).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].url, "https://tfl.gov.uk/fares/find-fares");
        assert!(hits[0].title.contains("Transport for London"));
        assert!(hits[0].snippet.contains("daily cap for Zones 1-2"));
        assert_eq!(
            hits[1].url,
            "https://www.visitlondon.com/traveller-information/getting-around-london/oyster-cards"
        );
        // Missing snippet parses as empty, not as a skipped result.
        assert_eq!(hits[2].url, "https://forum.example.org/thread/42");
        assert_eq!(hits[2].snippet, "");
    }

    #[test]
    fn skips_sponsored_blocks() {
        let hits = parse_results(FIXTURE, 10).unwrap();
        assert!(hits.iter().all(|h| !h.url.contains("ads.example.com")));
    }

    #[test]
    fn respects_result_limit() {
        let hits = parse_results(FIXTURE, 2).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn missing_results_container_is_a_parse_error() {
        let html = "<html><body><h1>Please verify you are human</h1></body></html>";
        assert!(matches!(
            parse_results(html, 10),
            Err(SearchError::Parse)
        ));
    }

    #[test]
    fn empty_container_is_zero_results_not_an_error() {
        let html = r#"<html><body><div id="links"></div></body></html>"#;
        let hits = parse_results(html, 10).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn unwraps_protocol_relative_redirect() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Ftfl.gov.uk%2Ffares&rut=abc";
        assert_eq!(
            unwrap_redirect(href).as_deref(),
            Some("https://tfl.gov.uk/fares")
        );
    }

    #[test]
    fn unwraps_path_relative_redirect() {
        let href = "/l/?uddg=https%3A%2F%2Fwww.gov.uk%2Fvisa-rules";
        assert_eq!(
            unwrap_redirect(href).as_deref(),
            Some("https://www.gov.uk/visa-rules")
        );
    }

    #[test]
    fn passes_plain_urls_through() {
        assert_eq!(
            unwrap_redirect("https://example.com/page").as_deref(),
            Some("https://example.com/page")
        );
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert_eq!(unwrap_redirect("javascript:void(0)"), None);
        assert_eq!(unwrap_redirect("mailto:bot@example.com"), None);
    }
}
