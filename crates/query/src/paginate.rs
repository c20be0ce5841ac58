//! Keyset paginator
//!
//! Turns a logical "page after cursor X, N records, direction D" request
//! into one ordered store scan and a correctly-shaped page, using the
//! N+1-fetch technique: ask for one record past the limit, and the presence
//! of that extra record is the has-more signal.
//!
//! The continuation predicate is a strict compound comparison on the
//! `(sort value, id)` pair — for descending, `(F, id) < (cursor.F, cursor.id)`;
//! ascending is the mirror image. The id tiebreaker makes the order total,
//! so no record is skipped or repeated across pages even when sort values
//! collide, and a cursor keeps working after its record is deleted: the
//! comparison needs only the cursor's values, not the record's existence.

use crate::cursor::Cursor;
use studyhall_core::limits::clamp_limit;
use studyhall_core::{Direction, Entity, Page, PageRequest, Result, SortKey};
use studyhall_store::{Filter, RecordStore};
use tracing::debug;

/// Fetch one page of records matching `filter`, ordered per the request
///
/// # Errors
///
/// A malformed cursor fails with `CursorError::Malformed` before any store
/// I/O is issued. Store failures pass through unchanged. An empty result is
/// an empty page, not an error.
pub fn paginate<R: Entity>(
    store: &dyn RecordStore<R>,
    filter: &Filter<R>,
    request: &PageRequest,
) -> Result<Page<R>> {
    let limit = clamp_limit(request.limit);
    let direction = request.direction;

    // Decode before querying so a malformed cursor costs no I/O.
    let after: Option<SortKey> = match &request.cursor {
        Some(raw) => Some(Cursor::decode(raw)?.sort_key()),
        None => None,
    };

    let combined = move |record: &R| -> bool {
        let past_cursor = match &after {
            None => true,
            Some(boundary) => match direction {
                Direction::Desc => record.sort_key() < *boundary,
                Direction::Asc => record.sort_key() > *boundary,
            },
        };
        past_cursor && filter(record)
    };

    let mut rows = store.scan(&combined, direction, limit + 1)?;

    let has_more = rows.len() > limit;
    let next_cursor = if has_more {
        rows.truncate(limit);
        rows.last()
            .map(|last| Cursor::from_sort_key(&last.sort_key()).encode())
    } else {
        None
    };

    debug!(
        target: "studyhall::query",
        collection = R::COLLECTION,
        rows = rows.len(),
        has_more,
        "page served"
    );

    Ok(Page {
        data: rows,
        next_cursor,
        has_more,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use studyhall_core::{Error, Thread};
    use studyhall_store::MemCollection;

    fn seed(n: usize) -> MemCollection<Thread> {
        let collection = MemCollection::new();
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for i in 0..n {
            let thread = Thread::new("c1", "u1", format!("t{i}"), "body")
                .with_id(format!("id-{i:03}"))
                .with_created_at(base + Duration::minutes(i as i64));
            collection.insert(thread).unwrap();
        }
        collection
    }

    fn all(_: &Thread) -> bool {
        true
    }

    #[test]
    fn test_first_page_descending() {
        let store = seed(25);
        let page = paginate(&store, &all, &PageRequest::newest_first().with_limit(10)).unwrap();
        assert_eq!(page.len(), 10);
        assert!(page.has_more);
        assert!(page.next_cursor.is_some());
        assert_eq!(page.data[0].id, "id-024");
        assert_eq!(page.data[9].id, "id-015");
    }

    #[test]
    fn test_three_page_walk() {
        // 25 records, limit 10, descending: 10 + 10 + 5
        let store = seed(25);
        let mut request = PageRequest::newest_first().with_limit(10);

        let first = paginate(&store, &all, &request).unwrap();
        assert_eq!(first.len(), 10);
        assert!(first.has_more);

        request = request.with_cursor(first.next_cursor.clone().unwrap());
        let second = paginate(&store, &all, &request).unwrap();
        assert_eq!(second.len(), 10);
        assert!(second.has_more);

        request = request.with_cursor(second.next_cursor.clone().unwrap());
        let third = paginate(&store, &all, &request).unwrap();
        assert_eq!(third.len(), 5);
        assert!(!third.has_more);
        assert!(third.next_cursor.is_none());

        // Concatenation covers every record exactly once, newest first.
        let mut seen: Vec<String> = vec![];
        for page in [&first, &second, &third] {
            seen.extend(page.data.iter().map(|t| t.id.clone()));
        }
        let expected: Vec<String> = (0..25).rev().map(|i| format!("id-{i:03}")).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        let store = seed(20);
        let first = paginate(&store, &all, &PageRequest::newest_first().with_limit(10)).unwrap();
        assert!(first.has_more);
        let second = paginate(
            &store,
            &all,
            &PageRequest::newest_first()
                .with_limit(10)
                .with_cursor(first.next_cursor.unwrap()),
        )
        .unwrap();
        assert_eq!(second.len(), 10);
        assert!(!second.has_more);
        assert!(second.next_cursor.is_none());
    }

    #[test]
    fn test_ascending_walk() {
        let store = seed(5);
        let first = paginate(&store, &all, &PageRequest::oldest_first().with_limit(3)).unwrap();
        let ids: Vec<&str> = first.data.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["id-000", "id-001", "id-002"]);

        let second = paginate(
            &store,
            &all,
            &PageRequest::oldest_first()
                .with_limit(3)
                .with_cursor(first.next_cursor.unwrap()),
        )
        .unwrap();
        let ids: Vec<&str> = second.data.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["id-003", "id-004"]);
        assert!(!second.has_more);
    }

    #[test]
    fn test_shared_sort_value_id_tiebreak() {
        // Three records share a timestamp; descending limit=1 walks c, b, a.
        let store = MemCollection::new();
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for id in ["a", "b", "c"] {
            store
                .insert(
                    Thread::new("c1", "u1", id, "body")
                        .with_id(id)
                        .with_created_at(ts),
                )
                .unwrap();
        }

        let mut cursor: Option<String> = None;
        let mut walked = vec![];
        loop {
            let mut request = PageRequest::newest_first().with_limit(1);
            if let Some(c) = cursor.take() {
                request = request.with_cursor(c);
            }
            let page = paginate(&store, &all, &request).unwrap();
            walked.extend(page.data.iter().map(|t| t.id.clone()));
            if !page.has_more {
                break;
            }
            cursor = page.next_cursor;
        }
        assert_eq!(walked, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_stale_cursor_continues_from_value() {
        let store = seed(10);
        let first = paginate(&store, &all, &PageRequest::newest_first().with_limit(3)).unwrap();
        let boundary_id = first.data.last().unwrap().id.clone();
        let cursor = first.next_cursor.unwrap();

        let without_deletion = paginate(
            &store,
            &all,
            &PageRequest::newest_first().with_limit(3).with_cursor(cursor.clone()),
        )
        .unwrap();

        // Delete the record the cursor points at; the walk must not shift.
        store.delete_by_id(&boundary_id).unwrap();
        let after_deletion = paginate(
            &store,
            &all,
            &PageRequest::newest_first().with_limit(3).with_cursor(cursor),
        )
        .unwrap();

        let ids = |page: &Page<Thread>| -> Vec<String> {
            page.data.iter().map(|t| t.id.clone()).collect()
        };
        assert_eq!(ids(&without_deletion), ids(&after_deletion));
    }

    #[test]
    fn test_malformed_cursor_fails_before_io() {
        let store = seed(3);
        let err = paginate(
            &store,
            &all,
            &PageRequest::newest_first().with_cursor("not-base64!!"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Cursor(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_limit_clamping() {
        let store = seed(10);
        let min_page = paginate(&store, &all, &PageRequest::newest_first().with_limit(0)).unwrap();
        assert_eq!(min_page.len(), 1);
        let min_page = paginate(&store, &all, &PageRequest::newest_first().with_limit(-5)).unwrap();
        assert_eq!(min_page.len(), 1);
        let capped = paginate(&store, &all, &PageRequest::newest_first().with_limit(1000)).unwrap();
        assert_eq!(capped.len(), 10); // all rows; cap is 100
        assert!(!capped.has_more);
    }

    #[test]
    fn test_empty_result_is_empty_page() {
        let store = seed(5);
        let page = paginate(
            &store,
            &|t: &Thread| t.course_id == "other-course",
            &PageRequest::newest_first(),
        )
        .unwrap();
        assert!(page.is_empty());
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_caller_filter_composes_with_cursor() {
        let store = seed(10);
        let evens = |t: &Thread| {
            t.id.trim_start_matches("id-")
                .parse::<u32>()
                .map(|n| n % 2 == 0)
                .unwrap_or(false)
        };
        let first = paginate(&store, &evens, &PageRequest::newest_first().with_limit(2)).unwrap();
        let ids: Vec<&str> = first.data.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["id-008", "id-006"]);

        let second = paginate(
            &store,
            &evens,
            &PageRequest::newest_first()
                .with_limit(2)
                .with_cursor(first.next_cursor.unwrap()),
        )
        .unwrap();
        let ids: Vec<&str> = second.data.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["id-004", "id-002"]);
    }
}
