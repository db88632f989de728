//! The engine degrades to no matches until the index is ready.

use crate::common::book_fixture;
use navsieve::{search, IndexHandle, IndexStatus, LoadError, SearchIndex};
use std::sync::Arc;

#[test]
fn uninitialized_returns_nothing() {
    let handle = IndexHandle::new();
    assert_eq!(handle.status(), IndexStatus::Uninitialized);
    assert!(search(&handle, "book").is_empty());
}

#[test]
fn loading_returns_nothing() {
    let handle = IndexHandle::new();
    handle.begin_load().unwrap();
    assert_eq!(handle.status(), IndexStatus::Loading);
    assert!(search(&handle, "book").is_empty());
}

#[test]
fn failed_returns_nothing_forever() {
    let handle = IndexHandle::new();
    handle.begin_load().unwrap();
    handle
        .fail(&LoadError::Fetch {
            url: "/search_index.json".to_string(),
            reason: "404".to_string(),
        })
        .unwrap();
    assert!(search(&handle, "book").is_empty());

    let late = SearchIndex::from_json(&book_fixture().to_json()).unwrap();
    assert!(matches!(
        handle.publish(Arc::new(late)),
        Err(LoadError::PreviouslyFailed(_))
    ));
    assert!(search(&handle, "book").is_empty());
}

#[test]
fn ready_handle_is_shared_by_clones() {
    let handle = IndexHandle::new();
    let engine_side = handle.clone();
    handle.begin_load().unwrap();
    assert!(search(&engine_side, "book").is_empty());

    let index = SearchIndex::from_json(&book_fixture().to_json()).unwrap();
    handle.publish(Arc::new(index)).unwrap();
    assert!(!search(&engine_side, "book").is_empty());
}

#[test]
fn empty_query_returns_nothing_even_when_ready() {
    let handle = crate::common::ready_handle();
    assert!(search(&handle, "").is_empty());
    assert!(search(&handle, "   ").is_empty());
    assert!(search(&handle, "?!").is_empty());
}
