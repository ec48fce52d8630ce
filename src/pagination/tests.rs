//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use crate::navigation::{MemoryNavigator, NavigationPort, NavigationState};
use crate::storage::{KeyValueStore, MemoryStore};
use std::sync::{Arc, Mutex};
use test_case::test_case;

fn items(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

fn engine() -> PaginationEngine {
    PaginationEngine::new(PaginationConfig::new(), MemoryStore::new())
}

/// Store whose every operation fails
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::storage("security error"))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::storage("quota exceeded"))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(Error::storage("security error"))
    }
}

/// Navigator that refuses writes
struct ReadOnlyNavigator;

impl NavigationPort for ReadOnlyNavigator {
    fn read(&self) -> NavigationState {
        NavigationState::new(2, 10)
    }

    fn write(&self, _page: u32, _page_size: u32) -> Result<()> {
        Err(Error::navigation("history locked"))
    }
}

// ============================================================================
// Clamp Helper Tests
// ============================================================================

#[test_case(0 => 1; "zero")]
#[test_case(-1 => 1; "minus one")]
#[test_case(i64::MIN => 1; "most negative")]
#[test_case(1 => 1; "first page")]
#[test_case(7 => 7; "in range")]
#[test_case(i64::MAX => u32::MAX; "saturates")]
fn test_clamp_page(input: i64) -> u32 {
    clamp_page(input)
}

#[test_case(0, 10 => 1; "empty collection still has one page")]
#[test_case(10, 10 => 1)]
#[test_case(11, 10 => 2)]
#[test_case(55, 10 => 6)]
#[test_case(5, 0 => 5; "zero page size treated as one")]
fn test_total_pages(count: usize, size: u32) -> usize {
    total_pages(count, size)
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_state_default() {
    let state = PaginationState::default();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.page_size, 25);
}

#[test]
fn test_state_new_clamps() {
    let state = PaginationState::new(0, 0);
    assert_eq!(state, PaginationState::new(1, 1));
}

#[test]
fn test_state_derive() {
    let bounds = PaginationState::new(3, 10).derive(25);
    assert_eq!(bounds.total_pages, 3);
    assert_eq!(bounds.start_index, 20);
    assert_eq!(bounds.end_index, 25);
    assert_eq!(bounds.len(), 5);
}

#[test]
fn test_state_derive_past_end() {
    let bounds = PaginationState::new(9, 10).derive(25);
    assert_eq!(bounds.start_index, 80);
    assert_eq!(bounds.end_index, 25);
    assert!(bounds.is_empty());
}

// ============================================================================
// Setter Tests
// ============================================================================

#[test_case(0)]
#[test_case(-1)]
#[test_case(-500)]
fn test_set_current_page_non_positive_is_one(page: i64) {
    let mut engine = engine();
    engine.set_current_page(4);
    engine.set_current_page(page);
    assert_eq!(engine.current_page(), 1);
}

#[test_case(0)]
#[test_case(-1)]
#[test_case(-25)]
fn test_set_page_size_non_positive_is_one(size: i64) {
    let mut engine = engine();
    engine.set_page_size(size);
    assert_eq!(engine.page_size(), 1);
}

#[test_case(1)]
#[test_case(10)]
#[test_case(100)]
fn test_set_page_size_resets_page(size: i64) {
    let mut engine = engine();
    engine.set_current_page(7);
    engine.set_page_size(size);
    assert_eq!(engine.current_page(), 1);
    assert_eq!(i64::from(engine.page_size()), size);
}

#[test]
fn test_set_current_page_has_no_upper_bound() {
    let mut engine = engine();
    engine.set_current_page(1_000);
    assert_eq!(engine.current_page(), 1_000);
}

#[test]
fn test_reset_pagination_keeps_size() {
    let mut engine = engine();
    engine.set_current_page(5);
    engine.set_page_size(50);
    engine.set_current_page(5);
    engine.reset_pagination();

    assert_eq!(engine.current_page(), 1);
    assert_eq!(engine.page_size(), 50);
}

#[test]
fn test_next_and_previous_page() {
    let mut engine = engine();
    engine.previous_page();
    assert_eq!(engine.current_page(), 1);

    engine.next_page();
    engine.next_page();
    assert_eq!(engine.current_page(), 3);

    engine.previous_page();
    assert_eq!(engine.current_page(), 2);
}

// ============================================================================
// Slicing Tests
// ============================================================================

#[test]
fn test_fifty_five_items_by_ten() {
    let data = items(55);
    let mut engine = engine();
    engine.set_page_size(10);

    let page = engine.get_paginated_items(&data);
    assert_eq!(page.items, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(page.total_pages, 6);
    assert_eq!(page.start_index, 0);
    assert_eq!(page.end_index, 10);

    engine.set_current_page(6);
    let page = engine.get_paginated_items(&data);
    assert_eq!(page.items, &[51, 52, 53, 54, 55]);
    assert_eq!(page.len(), 5);
    assert_eq!(page.total_pages, 6);
    assert_eq!(page.start_index, 50);
    assert_eq!(page.end_index, 55);
    assert!(!page.has_next_page());
    assert!(page.has_previous_page());
}

#[test]
fn test_out_of_range_page_is_empty_and_not_mutated() {
    let data = items(12);
    let mut engine = engine();
    engine.set_page_size(5);
    engine.set_current_page(9);

    let page = engine.get_paginated_items(&data);
    assert!(page.is_empty());
    assert!(page.is_out_of_range());
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, 12);
    assert_eq!(engine.current_page(), 9);
}

#[test]
fn test_empty_collection() {
    let data: Vec<u8> = Vec::new();
    let engine = engine();

    let page = engine.get_paginated_items(&data);
    assert!(page.is_empty());
    assert_eq!(page.total_pages, 1);
    assert!(!page.is_out_of_range());
    assert!(!page.has_next_page());
}

#[test]
fn test_clamp_to_after_shrink() {
    let mut engine = engine();
    engine.set_page_size(10);
    engine.set_current_page(6);

    // Collection shrank from 55 to 31 items
    assert_eq!(engine.clamp_to(31), 4);
    assert_eq!(engine.current_page(), 4);

    // In range: untouched
    assert_eq!(engine.clamp_to(100), 4);
}

// ============================================================================
// Page Window Tests
// ============================================================================

fn window_for(page: i64, total_pages: usize, max: usize) -> Vec<Option<usize>> {
    let data = items(total_pages * 10);
    let mut engine = engine();
    engine.set_page_size(10);
    engine.set_current_page(page);
    engine.get_paginated_items(&data).page_window(max)
}

#[test]
fn test_page_window_small() {
    assert_eq!(
        window_for(2, 4, 7),
        vec![Some(1), Some(2), Some(3), Some(4)]
    );
}

#[test]
fn test_page_window_near_start() {
    assert_eq!(
        window_for(3, 20, 7),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
    );
}

#[test]
fn test_page_window_middle() {
    assert_eq!(
        window_for(10, 20, 7),
        vec![Some(1), None, Some(9), Some(10), Some(11), None, Some(20)]
    );
}

#[test]
fn test_page_window_near_end() {
    assert_eq!(
        window_for(19, 20, 7),
        vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
    );
}

#[test]
fn test_page_window_single_hidden_page_is_shown() {
    assert_eq!(
        window_for(3, 10, 5),
        vec![Some(1), Some(2), Some(3), None, Some(10)]
    );
    assert_eq!(
        window_for(8, 10, 5),
        vec![Some(1), None, Some(8), Some(9), Some(10)]
    );
}

#[test]
fn test_page_window_ellipsis_hides_several_pages() {
    for max in [5, 7, 9] {
        for page in 1..=30 {
            let window = window_for(page, 30, max);
            for (i, entry) in window.iter().enumerate() {
                if entry.is_none() {
                    let before = window[i - 1].unwrap();
                    let after = window[i + 1].unwrap();
                    assert!(after - before > 2, "page {page}, max {max}: {window:?}");
                }
            }
        }
    }
}

#[test]
fn test_page_window_length_is_bounded() {
    for page in 1..=30 {
        assert_eq!(window_for(page, 30, 9).len(), 9);
    }
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[test]
fn test_defaults_without_preference() {
    let engine = engine();
    assert_eq!(engine.state(), PaginationState::new(1, 25));
}

#[test]
fn test_initial_values() {
    let config = PaginationConfig::new().initial_page(3).initial_page_size(10);
    let engine = PaginationEngine::new(config, MemoryStore::new());
    assert_eq!(engine.state(), PaginationState::new(3, 10));
}

#[test]
fn test_page_size_survives_reinitialization() {
    let store = MemoryStore::new();

    let mut first = PaginationEngine::new(PaginationConfig::new(), store.clone());
    first.set_page_size(100);
    drop(first);

    let second = PaginationEngine::new(PaginationConfig::new(), store.clone());
    assert_eq!(second.page_size(), 100);
    assert_eq!(
        store.get("pagination.pageSize").unwrap(),
        Some("100".to_string())
    );
}

#[test]
fn test_persisted_size_beats_initial_size() {
    let store = MemoryStore::with_entries([("pagination.pageSize", "50")]);
    let config = PaginationConfig::new().initial_page_size(10);
    let engine = PaginationEngine::new(config, store);
    assert_eq!(engine.page_size(), 50);
}

#[test]
fn test_invalid_persisted_size_is_ignored() {
    let store = MemoryStore::with_entries([("pagination.pageSize", "lots")]);
    let config = PaginationConfig::new().initial_page_size(10);
    let engine = PaginationEngine::new(config, store);
    assert_eq!(engine.page_size(), 10);

    let store = MemoryStore::with_entries([("pagination.pageSize", "0")]);
    let engine = PaginationEngine::new(PaginationConfig::new(), store);
    assert_eq!(engine.page_size(), 25);
}

#[test]
fn test_custom_storage_key() {
    let store = MemoryStore::new();
    let config = PaginationConfig::new().storage_key("questions.pageSize");
    let mut engine = PaginationEngine::new(config, store.clone());
    engine.set_page_size(10);

    assert_eq!(
        store.get("questions.pageSize").unwrap(),
        Some("10".to_string())
    );
    assert_eq!(store.get("pagination.pageSize").unwrap(), None);
}

#[test]
fn test_storage_failures_are_swallowed() {
    let mut engine =
        PaginationEngine::new(PaginationConfig::new().initial_page_size(10), BrokenStore);
    assert_eq!(engine.page_size(), 10);

    engine.set_page_size(40);
    assert_eq!(engine.page_size(), 40);
    assert_eq!(engine.current_page(), 1);
}

#[test]
fn test_from_settings() {
    let settings = crate::config::PaginationSettings {
        default_page_size: 15,
        ..Default::default()
    };
    let engine = PaginationEngine::new(
        PaginationConfig::from_settings(&settings),
        MemoryStore::new(),
    );
    assert_eq!(engine.page_size(), 15);
}

// ============================================================================
// URL Sync Tests
// ============================================================================

#[test]
fn test_url_values_read_at_init() {
    let nav = MemoryNavigator::with_state(NavigationState::new(4, 20));
    let store = MemoryStore::with_entries([("pagination.pageSize", "50")]);
    let config = PaginationConfig::new().sync_with_url(true).initial_page(2);

    let engine = PaginationEngine::with_navigator(config, store, nav);
    assert_eq!(engine.state(), PaginationState::new(4, 20));
    assert!(engine.is_syncing_url());
}

#[test]
fn test_url_ignored_when_sync_disabled() {
    let nav = MemoryNavigator::with_state(NavigationState::new(4, 20));
    let mut engine =
        PaginationEngine::with_navigator(PaginationConfig::new(), MemoryStore::new(), nav.clone());
    assert_eq!(engine.state(), PaginationState::new(1, 25));
    assert!(!engine.is_syncing_url());

    engine.set_current_page(3);
    assert_eq!(nav.replacements(), 0);
}

#[test]
fn test_setters_replace_url_state() {
    let nav = MemoryNavigator::new();
    let config = PaginationConfig::new().sync_with_url(true);
    let mut engine = PaginationEngine::with_navigator(config, MemoryStore::new(), nav.clone());

    engine.set_current_page(3);
    assert_eq!(nav.read(), NavigationState::new(3, 25));

    engine.set_page_size(10);
    assert_eq!(nav.read(), NavigationState::new(1, 10));

    engine.set_current_page(2);
    engine.reset_pagination();
    assert_eq!(nav.read(), NavigationState::new(1, 10));
    assert_eq!(nav.replacements(), 4);
}

#[test]
fn test_partial_url_falls_back() {
    let nav = MemoryNavigator::with_state(NavigationState {
        page: Some(3),
        page_size: None,
    });
    let store = MemoryStore::with_entries([("pagination.pageSize", "50")]);
    let config = PaginationConfig::new().sync_with_url(true);
    let engine = PaginationEngine::with_navigator(config, store, nav);
    assert_eq!(engine.state(), PaginationState::new(3, 50));
}

#[test]
fn test_navigation_failures_are_swallowed() {
    let config = PaginationConfig::new().sync_with_url(true);
    let mut engine =
        PaginationEngine::with_navigator(config, MemoryStore::new(), ReadOnlyNavigator);
    assert_eq!(engine.state(), PaginationState::new(2, 10));

    engine.set_current_page(5);
    assert_eq!(engine.current_page(), 5);
}

// ============================================================================
// Callback Tests
// ============================================================================

#[test]
fn test_on_page_change_receives_clamped_value() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let config = PaginationConfig::new().on_page_change(move |p| sink.lock().unwrap().push(p));
    let mut engine = PaginationEngine::new(config, MemoryStore::new());

    engine.set_current_page(4);
    engine.set_current_page(-2);
    engine.set_current_page(0);

    assert_eq!(*seen.lock().unwrap(), vec![4, 1, 1]);
}

#[test]
fn test_on_page_size_change_receives_clamped_value() {
    let sizes = Arc::new(Mutex::new(Vec::new()));
    let pages = Arc::new(Mutex::new(Vec::new()));
    let size_sink = Arc::clone(&sizes);
    let page_sink = Arc::clone(&pages);
    let config = PaginationConfig::new()
        .on_page_size_change(move |s| size_sink.lock().unwrap().push(s))
        .on_page_change(move |p| page_sink.lock().unwrap().push(p));
    let mut engine = PaginationEngine::new(config, MemoryStore::new());

    engine.set_page_size(50);
    engine.set_page_size(-7);

    assert_eq!(*sizes.lock().unwrap(), vec![50, 1]);
    // Size changes do not report a page change
    assert!(pages.lock().unwrap().is_empty());
}

#[test]
fn test_callback_sees_committed_state() {
    let store = MemoryStore::new();
    let probe = store.clone();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    let config = PaginationConfig::new().on_page_size_change(move |_| {
        *sink.lock().unwrap() = probe.get("pagination.pageSize").unwrap();
    });
    let mut engine = PaginationEngine::new(config, store);

    engine.set_page_size(30);
    assert_eq!(*seen.lock().unwrap(), Some("30".to_string()));
}

#[test]
fn test_config_debug_hides_callbacks() {
    let config = PaginationConfig::new().on_page_change(|_| {});
    let debug = format!("{config:?}");
    assert!(debug.contains("on_page_change: true"));
    assert!(debug.contains("on_page_size_change: false"));
}
