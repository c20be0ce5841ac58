//! Keyword extraction for materials search
//!
//! A deliberately simple lexical filter, not NLP: lowercase, strip
//! punctuation, drop short tokens and stop words. No stemming, no synonym
//! expansion.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};

/// Tokens shorter than this carry too little signal to keep
const MIN_TOKEN_LEN: usize = 3;

/// Common words excluded from extraction
///
/// Closed, small list; words of one or two characters never reach it
/// because of the length filter.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "was", "were", "with", "this",
        "that", "these", "those", "from", "have", "has", "had", "will", "would", "can", "could",
        "should", "what", "when", "where", "which", "how", "why", "who", "all", "any", "its",
        "into", "about", "there", "their", "they", "them", "then", "than", "our", "out", "your",
    ]
    .into_iter()
    .collect()
});

/// Extract the normalized keyword set from free text
///
/// Lowercases, maps every non-alphanumeric character to whitespace, splits,
/// then drops tokens shorter than three characters and stop words. Returns
/// a `BTreeSet` so iteration order is deterministic.
///
/// # Example
///
/// ```
/// use studyhall_search::keywords::extract;
///
/// let keywords = extract("The Binary Search Tree!");
/// assert!(keywords.contains("binary"));
/// assert!(keywords.contains("search"));
/// assert!(keywords.contains("tree"));
/// assert!(!keywords.contains("the"));
/// ```
pub fn extract(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(String::from)
        .collect()
}
