//! Deterministic reordering of search results by source trust.

use factlens_core::models::SearchHit;

/// Extract the hostname of `url`, lowercased. None for unparseable URLs.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed.host_str().map(|h| h.to_ascii_lowercase())
}

/// Stable in-place reorder: hosts trusted for the fact's own category
/// first, then hosts trusted for any category, then the rest. Pure — no
/// I/O; trust is injected as predicates so this stays registry-agnostic.
pub fn prioritize(
    hits: &mut [SearchHit],
    category_trusted: &dyn Fn(&str) -> bool,
    any_trusted: &dyn Fn(&str) -> bool,
) {
    hits.sort_by_key(|hit| trust_rank(hit, category_trusted, any_trusted));
}

fn trust_rank(
    hit: &SearchHit,
    category_trusted: &dyn Fn(&str) -> bool,
    any_trusted: &dyn Fn(&str) -> bool,
) -> u8 {
    match host_of(&hit.url) {
        Some(host) if category_trusted(&host) => 0,
        Some(host) if any_trusted(&host) => 1,
        _ => 2,
    }
}
