//! Page-content reduction and keyword coverage.

use scraper::{Html, Selector};

/// Content-area selectors tried in order before falling back to block
/// elements. Selecting a content area drops scripts, styles, navigation,
/// footers, and cookie-banner chrome without element-by-element stripping.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".content",
    "#content",
    ".post-content",
    ".entry-content",
];

/// Fallback when no content area is recognizable.
const BLOCK_SELECTOR: &str = "p, h1, h2, h3, li, td";

/// A content area shorter than this is probably a stub wrapper; keep
/// looking.
const MIN_CONTENT_CHARS: usize = 100;

/// Reduce raw HTML to readable content text with collapsed whitespace.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    for selector in CONTENT_SELECTORS {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = document.select(&sel).next() {
            let text = collapse(element.text().collect::<String>());
            if text.chars().count() >= MIN_CONTENT_CHARS {
                return text;
            }
        }
    }

    let Ok(sel) = Selector::parse(BLOCK_SELECTOR) else {
        return String::new();
    };
    let blocks: Vec<String> = document
        .select(&sel)
        .map(|el| collapse(el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect();
    blocks.join(" ")
}

/// Keyword coverage of a text: how many keywords appear, the fraction, and
/// where the first matched keyword (in keyword order) sits.
#[derive(Debug, Clone, Copy)]
pub struct Coverage {
    pub hits: usize,
    pub total: usize,
    pub ratio: f64,
    /// Byte offset of the first matched keyword, if any.
    pub first_offset: Option<usize>,
}

/// Case-insensitive substring coverage. `text_lower` must already be
/// lowercased; keywords are lowercased here.
pub fn coverage(keywords: &[String], text_lower: &str) -> Coverage {
    let mut hits = 0;
    let mut first_offset = None;
    for keyword in keywords {
        if let Some(pos) = text_lower.find(&keyword.to_lowercase()) {
            hits += 1;
            if first_offset.is_none() {
                first_offset = Some(pos);
            }
        }
    }
    let total = keywords.len();
    let ratio = if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    };
    Coverage {
        hits,
        total,
        ratio,
        first_offset,
    }
}

/// A char-boundary-safe window of `before`/`after` bytes around `offset`.
pub fn snippet_window(text: &str, offset: usize, before: usize, after: usize) -> &str {
    let mut start = offset.saturating_sub(before);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (offset.saturating_add(after)).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

fn collapse(text: String) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
