//! Search query construction.

use factlens_core::{FactCategory, VerifyConfig};

use crate::registry::DomainRegistry;

/// Compose the search query: the leading keywords, a destination hint when
/// the fact doesn't name it, and a `site:` restriction for categories whose
/// authoritative sources are few enough to enumerate. The keyword cap keeps
/// queries short enough for search engines.
pub fn build(
    keywords: &[String],
    fact_text: &str,
    category: FactCategory,
    registry: &DomainRegistry,
    config: &VerifyConfig,
) -> String {
    let mut query = keywords
        .iter()
        .take(config.query_keywords)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    if !fact_text
        .to_lowercase()
        .contains(&config.destination.to_lowercase())
    {
        query.push(' ');
        query.push_str(&config.destination);
    }

    if category.has_site_hints() {
        let hints = registry.site_hints(category, config.site_hint_domains);
        if !hints.is_empty() {
            let clause = hints
                .iter()
                .map(|d| format!("site:{d}"))
                .collect::<Vec<_>>()
                .join(" OR ");
            query.push(' ');
            query.push_str(&clause);
        }
    }

    query
}
