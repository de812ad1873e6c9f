//! VerificationEngine — the single entry point. Data flows strictly
//! downward for one fact: extract → gate → query → search → prioritize →
//! check (≤5, sequential) → score → decay → classify.

use chrono::{DateTime, Utc};

use factlens_core::constants::{
    INSUFFICIENT_KEYWORDS_CONFIDENCE, MIN_KEYWORDS, NO_RESULTS_CONFIDENCE,
    SOURCE_INSUFFICIENT_KEYWORDS, SOURCE_NO_RESULTS,
};
use factlens_core::models::{SourceCheck, VerificationVerdict, WebVerificationResult};
use factlens_core::traits::{PageFetcher, SearchProvider};
use factlens_core::{Fact, VerifyConfig, VerifyResult};
use factlens_search::{host_of, prioritize, DuckDuckGoClient, HttpPageFetcher};

use crate::classify::{classify, Assessment};
use crate::matcher::{check_source, CheckOutcome};
use crate::registry::DomainRegistry;
use crate::scoring::{decay, match_score, TierTally};
use crate::{keywords, query};

/// Stateless fact-verification engine. One call per fact, nothing retained
/// between calls — a single engine serves any number of concurrent
/// verifications from separate tasks.
pub struct VerificationEngine {
    config: VerifyConfig,
    registry: DomainRegistry,
    search: Box<dyn SearchProvider>,
    fetcher: Box<dyn PageFetcher>,
}

impl VerificationEngine {
    /// Engine with the default DuckDuckGo provider and HTTP page fetcher.
    pub fn new(config: VerifyConfig) -> VerifyResult<Self> {
        let search = DuckDuckGoClient::new(&config)?;
        let fetcher = HttpPageFetcher::new(&config)?;
        Self::with_providers(config, Box::new(search), Box::new(fetcher))
    }

    /// Engine with injected providers — the seam for a licensed search API,
    /// an alternative scraper, or tests.
    pub fn with_providers(
        config: VerifyConfig,
        search: Box<dyn SearchProvider>,
        fetcher: Box<dyn PageFetcher>,
    ) -> VerifyResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry: DomainRegistry,
            search,
            fetcher,
        })
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Verify one fact against independent web sources. Infallible:
    /// network trouble degrades the result instead of erroring.
    pub async fn verify_fact(&self, fact: &Fact) -> WebVerificationResult {
        self.verify_fact_at(fact, Utc::now()).await
    }

    /// As `verify_fact`, with an explicit clock for age computation.
    pub async fn verify_fact_at(
        &self,
        fact: &Fact,
        now: DateTime<Utc>,
    ) -> WebVerificationResult {
        let keywords = keywords::extract(&fact.fact_text);
        if keywords.len() < MIN_KEYWORDS {
            tracing::info!(
                "verify: fact {} has {} salient keyword(s), skipping search",
                fact.id,
                keywords.len()
            );
            return WebVerificationResult {
                confidence: INSUFFICIENT_KEYWORDS_CONFIDENCE,
                result: VerificationVerdict::Unverifiable,
                source: SOURCE_INSUFFICIENT_KEYWORDS.to_string(),
                notes: format!(
                    "only {} salient keyword(s) extracted; a search this vague is indistinguishable from noise",
                    keywords.len()
                ),
                sources_checked: Vec::new(),
            };
        }

        let query = query::build(
            &keywords,
            &fact.fact_text,
            fact.category,
            &self.registry,
            &self.config,
        );
        let mut hits = self.search.search(&query, self.config.max_results).await;
        if hits.is_empty() {
            tracing::info!("verify: no search results for fact {}", fact.id);
            return WebVerificationResult {
                confidence: NO_RESULTS_CONFIDENCE,
                result: VerificationVerdict::Unverifiable,
                source: SOURCE_NO_RESULTS.to_string(),
                notes: format!("the search engine returned no results for {query:?}"),
                sources_checked: Vec::new(),
            };
        }

        let category = fact.category;
        let registry = &self.registry;
        prioritize(
            &mut hits,
            &|host| registry.is_trusted_for(category, host),
            &|host| registry.is_trusted_any(host),
        );

        let mut checks: Vec<SourceCheck> = Vec::new();
        let mut tally = TierTally::default();
        let mut sources_ok = 0usize;
        for hit in hits.iter().take(self.config.max_sources) {
            let domain = host_of(&hit.url).unwrap_or_else(|| hit.url.clone());
            let tier = registry.tier_for(category, &domain);

            let outcome = check_source(hit, &keywords, self.fetcher.as_ref(), &self.config).await;
            if outcome.checked() {
                sources_ok += 1;
            }
            let (matched, snippet) = match outcome {
                CheckOutcome::SnippetMatch { evidence } => {
                    tally.record(tier);
                    (true, evidence)
                }
                CheckOutcome::PageMatch { evidence, .. } => {
                    tally.record(tier);
                    (true, evidence)
                }
                CheckOutcome::NoMatch { detail } => (false, detail),
                CheckOutcome::FetchFailed { reason } => (false, reason),
            };
            tracing::debug!(
                "verify: {} {domain} ({tier})",
                if matched { "matched" } else { "no match on" }
            );
            checks.push(SourceCheck {
                url: hit.url.clone(),
                domain,
                tier,
                matched,
                snippet,
            });
        }

        let age_days = fact.age_days(now);
        let scored = match_score(&tally);
        let decayed = decay::apply(scored, category, age_days, &self.config.decay);
        let classification = classify(&Assessment {
            tally: &tally,
            sources_ok,
            checks: &checks,
            confidence: decayed,
            category,
            age_days,
        });

        let matched_domains: Vec<&str> = checks
            .iter()
            .filter(|c| c.matched)
            .map(|c| c.domain.as_str())
            .collect();
        let source = if matched_domains.is_empty() {
            checks
                .iter()
                .map(|c| c.domain.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            matched_domains.join(", ")
        };

        tracing::info!(
            "verify: fact {} -> {} at confidence {}",
            fact.id,
            classification.verdict,
            classification.confidence
        );
        WebVerificationResult {
            confidence: classification.confidence.min(u8::MAX as u32) as u8,
            result: classification.verdict,
            source,
            notes: classification.notes,
            sources_checked: checks,
        }
    }
}
