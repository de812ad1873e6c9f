//! Keyword extraction: salient, searchable tokens from a fact statement.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Runs of alphanumerics plus the punctuation that matters to prices,
/// postcodes, and ranges. Tokens never start with bare punctuation.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9A-Za-z£$€][0-9A-Za-z£$€.,-]*").expect("static token pattern")
});

/// Words with no search salience: articles, pronouns, auxiliary verbs,
/// common prepositions and conjunctions, plus a few filler nouns that
/// describe every destination equally well.
const STOP_WORDS: &[&str] = &[
    // Articles & determiners.
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "each", "all", "such",
    // Pronouns.
    "i", "you", "he", "she", "it", "we", "they", "its", "his", "her", "their", "there", "here",
    // Auxiliary verbs.
    "is", "are", "was", "were", "be", "been", "being", "has", "have", "had", "do", "does",
    "did", "will", "would", "can", "could", "should", "may", "might", "must", "shall",
    // Prepositions & conjunctions.
    "in", "on", "at", "to", "for", "of", "with", "from", "by", "as", "into", "about", "over",
    "under", "between", "during", "per", "and", "or", "but", "if", "than", "then", "so",
    "because", "while",
    // Fillers.
    "not", "no", "also", "very", "only", "just", "more", "most",
    // Salience-free place nouns.
    "city", "town", "place", "area",
];

/// Extract ranked, de-duplicated keywords from a fact statement.
///
/// Case is preserved for display; comparison and de-duplication are
/// case-insensitive, first occurrence wins. Tokens shorter than two
/// characters are dropped, as are stop-words; survivors must be three
/// characters or longer unless they carry a digit, so postcodes, prices,
/// and years come through even when short.
pub fn extract(text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();

    for token in TOKEN.find_iter(text) {
        let token = token.as_str().trim_end_matches(['.', ',', '-']);
        let chars = token.chars().count();
        if chars < 2 {
            continue;
        }
        let lower = token.to_lowercase();
        if STOP_WORDS.contains(&lower.as_str()) {
            continue;
        }
        let has_digit = token.chars().any(|c| c.is_ascii_digit());
        if chars < 3 && !has_digit {
            continue;
        }
        if seen.insert(lower) {
            keywords.push(token.to_string());
        }
    }

    keywords
}
