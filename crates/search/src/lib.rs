//! Keyword-relevance search for course materials
//!
//! This crate provides:
//! - Keyword extraction (lowercase, strip punctuation, drop short and
//!   stop-word tokens)
//! - A relevance scorer producing 0..100 keyword-overlap scores with
//!   highlighted snippets
//! - Ranking (minimum-relevance filter, stable descending sort, truncation)
//!
//! Intentionally lexical: no stemming, no synonyms, no semantic search.
//! Everything here is pure and synchronous; candidates are fetched by the
//! repository layer and passed in.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keywords;
pub mod scorer;

pub use keywords::extract;
pub use scorer::{rank, score, ScoredResult, SearchDocument, SearchOptions};
