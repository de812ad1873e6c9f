use factlens_core::{FactCategory, VerifyConfig};
use factlens_verify::{keywords, query, DomainRegistry};

fn build(text: &str, category: FactCategory) -> String {
    let config = VerifyConfig::default();
    let extracted = keywords::extract(text);
    query::build(&extracted, text, category, &DomainRegistry, &config)
}

#[test]
fn joins_leading_keywords_with_spaces() {
    let q = build(
        "Oyster card daily cap is £8.10 in Zones 1-2 London",
        FactCategory::Price,
    );
    assert!(q.starts_with("Oyster card daily cap £8.10 Zones 1-2"));
}

#[test]
fn caps_keywords_at_the_configured_limit() {
    let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet London";
    let q = build(text, FactCategory::Uncategorized);
    assert!(q.contains("hotel"));
    assert!(!q.contains("india"), "ninth keyword leaked into query: {q}");
}

#[test]
fn appends_destination_when_fact_omits_it() {
    let q = build("Oyster card daily cap is £8.10", FactCategory::Price);
    assert!(q.ends_with(" London"), "no destination hint in {q:?}");
}

#[test]
fn skips_destination_when_fact_mentions_it() {
    let q = build(
        "Oyster card daily cap in london is £8.10",
        FactCategory::Price,
    );
    assert_eq!(q.matches("ondon").count(), 1);
}

#[test]
fn transport_queries_carry_a_site_restriction() {
    let q = build("Night tube runs Friday and Saturday", FactCategory::Transport);
    assert!(
        q.contains("site:tfl.gov.uk OR site:nationalrail.co.uk"),
        "missing site clause in {q:?}"
    );
}

#[test]
fn price_queries_carry_no_site_restriction() {
    let q = build("Oyster card daily cap is £8.10", FactCategory::Price);
    assert!(!q.contains("site:"));
}
