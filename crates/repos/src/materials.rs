//! Course material repository and the materials-search endpoint

use std::sync::Arc;
use studyhall_core::limits::{DEFAULT_MIN_RELEVANCE, DEFAULT_SEARCH_LIMIT};
use studyhall_core::{Direction, Error, Material, Page, PageRequest, Result};
use studyhall_query::paginate;
use studyhall_search::{extract, rank, ScoredResult, SearchDocument, SearchOptions};
use studyhall_store::RecordStore;

// ============================================================================
// SearchQuery
// ============================================================================

/// A materials-search request
///
/// # Examples
///
/// ```
/// use studyhall_repos::SearchQuery;
///
/// let query = SearchQuery::new("binary search tree")
///     .scoped_to("course-1")
///     .with_limit(5)
///     .with_min_relevance(50);
/// assert_eq!(query.limit, 5);
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free-text query
    pub text: String,
    /// Restrict to one course's materials; `None` searches everything
    pub course_id: Option<String>,
    /// Restrict to these material kinds; empty means every kind
    pub kinds: Vec<String>,
    /// Maximum results
    pub limit: usize,
    /// Minimum relevance score a hit must reach
    pub min_relevance: u8,
}

impl SearchQuery {
    /// Create a query with default limit and relevance floor
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery {
            text: text.into(),
            course_id: None,
            kinds: vec![],
            limit: DEFAULT_SEARCH_LIMIT,
            min_relevance: DEFAULT_MIN_RELEVANCE,
        }
    }

    /// Builder: restrict to one course
    pub fn scoped_to(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// Builder: restrict to a material kind; repeatable
    pub fn of_kind(mut self, kind: impl Into<String>) -> Self {
        self.kinds.push(kind.into());
        self
    }

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

// ============================================================================
// MaterialRepo
// ============================================================================

/// Repository for course materials
#[derive(Clone)]
pub struct MaterialRepo {
    store: Arc<dyn RecordStore<Material>>,
}

impl MaterialRepo {
    /// Create a repository over a material collection
    pub fn new(store: Arc<dyn RecordStore<Material>>) -> Self {
        MaterialRepo { store }
    }

    /// Insert a new material
    ///
    /// When the caller supplies no keywords, the index-time set is extracted
    /// from title+content here, once, so queries don't re-tokenize stored
    /// text on every search.
    pub fn create(&self, mut material: Material) -> Result<Material> {
        if material.keywords.is_empty() {
            material.keywords =
                extract(&format!("{} {}", material.title, material.content))
                    .into_iter()
                    .collect();
        }
        self.store.insert(material)
    }

    /// Fetch a material by id
    pub fn get(&self, id: &str) -> Result<Option<Material>> {
        self.store.get(id)
    }

    /// Fetch a material by id, failing if absent
    pub fn get_required(&self, id: &str) -> Result<Material> {
        self.get(id)?.ok_or_else(|| Error::NotFound {
            collection: "materials",
            id: id.to_string(),
        })
    }

    /// Page through one course's materials
    pub fn list_by_course(&self, course_id: &str, request: &PageRequest) -> Result<Page<Material>> {
        paginate(
            self.store.as_ref(),
            &|m: &Material| m.course_id == course_id,
            request,
        )
    }

    /// Keyword-relevance search over materials
    ///
    /// Fetches candidates (oldest first, so relevance ties rank stably by
    /// insertion order), scores each against the query's keyword set, and
    /// returns the ranked, filtered, truncated result list.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<ScoredResult>> {
        let scope = query.course_id.clone();
        let kinds = query.kinds.clone();
        let candidates = self.store.scan(
            &move |m: &Material| {
                let in_course = match &scope {
                    Some(course_id) => m.course_id == *course_id,
                    None => true,
                };
                in_course && (kinds.is_empty() || kinds.contains(&m.kind))
            },
            Direction::Asc,
            usize::MAX,
        )?;

        let documents: Vec<SearchDocument> = candidates
            .iter()
            .map(SearchDocument::from_material)
            .collect();
        let options = SearchOptions::default()
            .with_limit(query.limit)
            .with_min_relevance(query.min_relevance);
        Ok(rank(&documents, &query.text, &options))
    }

    /// Delete a material; returns whether it existed
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(id)
    }
}
