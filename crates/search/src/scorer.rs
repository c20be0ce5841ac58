//! Relevance scoring for materials search
//!
//! Scoring is a keyword-overlap ratio scaled to 0..100: a document matches a
//! query keyword if the keyword is in its index-time keyword set or appears
//! as a substring of its lowercased title+content. Deterministic for a given
//! `(document, query keywords)` pair; never fails on well-formed input.
//!
//! Ranking (filter by minimum relevance, stable sort by score descending,
//! truncate) lives in [`rank`], applied over all candidate documents.

use crate::keywords::extract;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use studyhall_core::limits::{
    DEFAULT_MIN_RELEVANCE, DEFAULT_SEARCH_LIMIT, SNIPPET_LEAD, SNIPPET_MAX_LEN,
};
use studyhall_core::Material;
use tracing::debug;

// ============================================================================
// SearchDocument
// ============================================================================

/// Ephemeral view of a material for scoring
///
/// Created per query from a stored record; never mutated in place — every
/// query produces fresh scored results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    /// Source record id
    pub id: String,
    /// Material title
    pub title: String,
    /// Full text content (snippets come from here)
    pub content: String,
    /// Index-time keyword set, lowercased
    pub keywords: Vec<String>,
}

impl SearchDocument {
    /// Create a document with explicit keywords
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        SearchDocument {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            keywords,
        }
    }

    /// Build a document from a stored material
    ///
    /// Uses the material's index-time keywords when present, otherwise
    /// extracts them from title+content on the fly.
    pub fn from_material(material: &Material) -> Self {
        let keywords = if material.keywords.is_empty() {
            extract(&format!("{} {}", material.title, material.content))
                .into_iter()
                .collect()
        } else {
            material.keywords.clone()
        };
        SearchDocument {
            id: material.id.clone(),
            title: material.title.clone(),
            content: material.content.clone(),
            keywords,
        }
    }

    /// Lowercased concatenation of title and content
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.content).to_lowercase()
    }
}

// ============================================================================
// ScoredResult
// ============================================================================

/// A document scored against one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    /// The scored document
    pub document: SearchDocument,
    /// Fraction of query keywords matched, scaled to 0..=100
    pub relevance_score: u8,
    /// Which query keywords matched (always a subset of the query's set)
    pub matched_keywords: Vec<String>,
    /// Display snippet centered on the first matched keyword
    pub snippet: String,
}

// ============================================================================
// Scoring
// ============================================================================

/// Score one document against a query's keyword set
///
/// A query with zero extracted keywords scores 0 for every document.
pub fn score(
    doc: &SearchDocument,
    query_keywords: &BTreeSet<String>,
    snippet_max_len: usize,
) -> ScoredResult {
    let searchable = doc.searchable_text();
    let matched_keywords: Vec<String> = query_keywords
        .iter()
        .filter(|k| {
            doc.keywords.iter().any(|dk| dk.eq_ignore_ascii_case(k))
                || searchable.contains(k.as_str())
        })
        .cloned()
        .collect();

    let relevance_score = if query_keywords.is_empty() {
        0
    } else {
        (100.0 * matched_keywords.len() as f64 / query_keywords.len() as f64).round() as u8
    };

    let snippet = make_snippet(&doc.content, &matched_keywords, snippet_max_len);

    ScoredResult {
        document: doc.clone(),
        relevance_score,
        matched_keywords,
        snippet,
    }
}

/// Cut a display window out of `content` around the earliest matched keyword
///
/// The window starts [`SNIPPET_LEAD`] characters before the first
/// (case-insensitive) occurrence of any matched keyword, clamped to content
/// bounds, with `...` affixed on whichever sides were cut. No match means
/// the window starts at the beginning.
///
/// Hit offsets are found on a length-preserving case fold so they stay valid
/// byte positions in the original content.
fn make_snippet(content: &str, matched: &[String], max_len: usize) -> String {
    let folded = fold_case(content);
    let first_hit = matched
        .iter()
        .filter_map(|k| folded.find(k.as_str()))
        .min();

    let start = snap_down(
        content,
        first_hit.map(|o| o.saturating_sub(SNIPPET_LEAD)).unwrap_or(0),
    );
    let end = snap_down(content, (start + max_len).min(content.len()));

    let mut snippet = String::with_capacity(end - start + 6);
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&content[start..end]);
    if end < content.len() {
        snippet.push_str("...");
    }
    snippet
}

/// Lowercase each char only when its lowercase form has the same UTF-8
/// length, so every byte offset in the fold is the same offset in the input
fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
                _ => c,
            }
        })
        .collect()
}

fn snap_down(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

// ============================================================================
// Ranking
// ============================================================================

/// Ranking policy for a search
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Maximum results returned
    pub limit: usize,
    /// Minimum relevance score (0..=100) a hit must reach to be kept
    pub min_relevance: u8,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: DEFAULT_SEARCH_LIMIT,
            min_relevance: DEFAULT_MIN_RELEVANCE,
        }
    }
}

impl SearchOptions {
    /// Builder: set result count
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Builder: set minimum relevance
    pub fn with_min_relevance(mut self, min: u8) -> Self {
        self.min_relevance = min;
        self
    }
}

/// Score all candidates against a free-text query and return the ranked list
///
/// Extracts the query's keyword set once, scores every document, discards
/// hits under `min_relevance`, sorts by score descending (stable — ties keep
/// candidate order), and truncates to `limit`.
pub fn rank(
    documents: &[SearchDocument],
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredResult> {
    let query_keywords = extract(query);
    let mut results: Vec<ScoredResult> = documents
        .iter()
        .map(|doc| score(doc, &query_keywords, SNIPPET_MAX_LEN))
        .filter(|r| r.relevance_score >= options.min_relevance)
        .collect();
    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results.truncate(options.limit);

    debug!(
        target: "studyhall::search",
        query_keywords = query_keywords.len(),
        candidates = documents.len(),
        hits = results.len(),
        "search ranked"
    );

    results
}
