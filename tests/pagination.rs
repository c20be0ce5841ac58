//! Pagination behavior through the repository layer
//!
//! Walks pages the way an API client would: request, follow `next_cursor`,
//! repeat until `has_more` is false.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use studyhall::{Direction, Forum, Page, PageRequest, Thread};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn seed_threads(forum: &Forum, n: usize) {
    init_tracing();
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    for i in 0..n {
        forum
            .threads()
            .create(
                Thread::new("c1", "u1", format!("question {i}"), "body")
                    .with_id(format!("id-{i:03}"))
                    .with_created_at(base + Duration::hours(i as i64)),
            )
            .unwrap();
    }
}

fn walk(forum: &Forum, mut request: PageRequest) -> Vec<String> {
    let mut ids = vec![];
    loop {
        let page: Page<Thread> = forum.threads().list_by_course("c1", &request).unwrap();
        assert!(page.has_more == page.next_cursor.is_some());
        ids.extend(page.data.iter().map(|t| t.id.clone()));
        match page.next_cursor {
            Some(cursor) => request = request.with_cursor(cursor),
            None => return ids,
        }
    }
}

#[test]
fn twenty_five_records_paginate_in_three_pages() {
    let forum = Forum::in_memory();
    seed_threads(&forum, 25);

    let request = PageRequest::newest_first().with_limit(10);
    let first = forum.threads().list_by_course("c1", &request).unwrap();
    assert_eq!(first.len(), 10);
    assert!(first.has_more);
    assert_eq!(first.data[0].id, "id-024"); // newest

    let second = forum
        .threads()
        .list_by_course("c1", &request.clone().with_cursor(first.next_cursor.unwrap()))
        .unwrap();
    assert_eq!(second.len(), 10);
    assert!(second.has_more);

    let third = forum
        .threads()
        .list_by_course("c1", &request.with_cursor(second.next_cursor.unwrap()))
        .unwrap();
    assert_eq!(third.len(), 5);
    assert!(!third.has_more);
    assert!(third.next_cursor.is_none());
}

#[test]
fn shared_timestamps_walk_in_id_order_without_repeats() {
    let forum = Forum::in_memory();
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    for id in ["a", "b", "c"] {
        forum
            .threads()
            .create(
                Thread::new("c1", "u1", id, "body")
                    .with_id(id)
                    .with_created_at(ts),
            )
            .unwrap();
    }

    let ids = walk(&forum, PageRequest::newest_first().with_limit(1));
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[test]
fn full_walk_equals_sorted_result_set() {
    let forum = Forum::in_memory();
    seed_threads(&forum, 37);

    let descending = walk(&forum, PageRequest::newest_first().with_limit(7));
    let expected: Vec<String> = (0..37).rev().map(|i| format!("id-{i:03}")).collect();
    assert_eq!(descending, expected);

    let ascending = walk(&forum, PageRequest::oldest_first().with_limit(7));
    let expected: Vec<String> = (0..37).map(|i| format!("id-{i:03}")).collect();
    assert_eq!(ascending, expected);
}

#[test]
fn stale_cursor_walks_the_same_tail() {
    let forum = Forum::in_memory();
    seed_threads(&forum, 12);

    let first = forum
        .threads()
        .list_by_course("c1", &PageRequest::newest_first().with_limit(4))
        .unwrap();
    let cursor = first.next_cursor.unwrap();
    let boundary_id = first.data.last().unwrap().id.clone();

    let tail_before = forum
        .threads()
        .list_by_course(
            "c1",
            &PageRequest::newest_first().with_limit(4).with_cursor(cursor.clone()),
        )
        .unwrap();

    // Delete the record the cursor was minted from
    assert!(forum.threads().delete(&boundary_id).unwrap());

    let tail_after = forum
        .threads()
        .list_by_course(
            "c1",
            &PageRequest::newest_first().with_limit(4).with_cursor(cursor),
        )
        .unwrap();

    let ids = |page: &Page<Thread>| page.data.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&tail_before), ids(&tail_after));
}

#[test]
fn out_of_range_limits_are_clamped_not_rejected() {
    let forum = Forum::in_memory();
    seed_threads(&forum, 5);

    for bad_limit in [0, -5] {
        let page = forum
            .threads()
            .list_by_course("c1", &PageRequest::newest_first().with_limit(bad_limit))
            .unwrap();
        assert_eq!(page.len(), 1);
    }

    let page = forum
        .threads()
        .list_by_course("c1", &PageRequest::newest_first().with_limit(1000))
        .unwrap();
    assert_eq!(page.len(), 5);
    assert!(!page.has_more);
}

#[test]
fn malformed_cursor_is_a_client_error() {
    let forum = Forum::in_memory();
    seed_threads(&forum, 2);

    let err = forum
        .threads()
        .list_by_course(
            "c1",
            &PageRequest::newest_first().with_cursor("not-base64!!"),
        )
        .unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "invalid pagination cursor");
}

#[test]
fn empty_collection_returns_empty_page() {
    let forum = Forum::in_memory();
    let page = forum
        .threads()
        .list_by_course("c1", &PageRequest::newest_first())
        .unwrap();
    assert!(page.is_empty());
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());
}

proptest! {
    /// Concatenated pages equal the full filtered, sorted result set —
    /// no skips, no duplicates — for any record count, page size,
    /// direction, and timestamp collision pattern.
    #[test]
    fn walk_never_skips_or_repeats(
        n in 0usize..50,
        limit in 1i64..15,
        descending in any::<bool>(),
        // Few distinct timestamps, so collisions are common
        slots in prop::collection::vec(0i64..5, 0..50),
    ) {
        let forum = Forum::in_memory();
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let count = n.min(slots.len());
        for i in 0..count {
            forum
                .threads()
                .create(
                    Thread::new("c1", "u1", format!("q{i}"), "body")
                        .with_id(format!("id-{i:03}"))
                        .with_created_at(base + Duration::minutes(slots[i])),
                )
                .unwrap();
        }

        let direction = if descending { Direction::Desc } else { Direction::Asc };
        let walked = walk(
            &forum,
            PageRequest::newest_first().with_direction(direction).with_limit(limit),
        );

        // Expected: every record, ordered by (timestamp, id) per direction
        let mut expected: Vec<(String, String)> = (0..count)
            .map(|i| {
                let id = format!("id-{i:03}");
                let ts = base + Duration::minutes(slots[i]);
                (studyhall::sort_timestamp(ts), id)
            })
            .collect();
        expected.sort();
        if descending {
            expected.reverse();
        }
        let expected_ids: Vec<String> = expected.into_iter().map(|(_, id)| id).collect();
        prop_assert_eq!(walked, expected_ids);
    }
}
