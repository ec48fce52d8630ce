//! Pagination engine
//!
//! Owns the current page and page size for one view over an in-memory
//! collection. Setters clamp instead of failing; the page-size preference is
//! written to an injected [`KeyValueStore`] and, when URL sync is enabled,
//! both values are mirrored into a [`NavigationPort`] with replace semantics.
//!
//! Storage and navigation failures are logged and swallowed: a preference
//! that fails to save must never block rendering.

use super::types::{clamp_page, clamp_page_size, total_pages, PageSlice, PaginationState};
use crate::config::{PaginationSettings, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PAGE_SIZE_STORAGE_KEY};
use crate::navigation::{parse_positive, NavigationPort};
use crate::storage::KeyValueStore;
use std::fmt;

/// Callback receiving a committed page or page size
pub type PageCallback = Box<dyn Fn(u32) + Send + Sync>;

// ============================================================================
// Configuration
// ============================================================================

/// Engine configuration
///
/// Every field is optional:
/// - `initial_page` defaults to 1
/// - `initial_page_size` defaults to `default_page_size` (25) and loses to a
///   persisted preference
/// - `sync_with_url` defaults to false
/// - `storage_key` defaults to `pagination.pageSize`
pub struct PaginationConfig {
    /// Page to start on
    pub initial_page: Option<u32>,
    /// Caller-supplied page size
    pub initial_page_size: Option<u32>,
    /// Fallback page size when nothing else supplies one
    pub default_page_size: u32,
    /// Mirror page and size into the navigable location
    pub sync_with_url: bool,
    /// Key holding the persisted page-size preference
    pub storage_key: String,
    /// Invoked after every committed page change
    pub on_page_change: Option<PageCallback>,
    /// Invoked after every committed page-size change
    pub on_page_size_change: Option<PageCallback>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_page: None,
            initial_page_size: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            sync_with_url: false,
            storage_key: PAGE_SIZE_STORAGE_KEY.to_string(),
            on_page_change: None,
            on_page_size_change: None,
        }
    }
}

impl fmt::Debug for PaginationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationConfig")
            .field("initial_page", &self.initial_page)
            .field("initial_page_size", &self.initial_page_size)
            .field("default_page_size", &self.default_page_size)
            .field("sync_with_url", &self.sync_with_url)
            .field("storage_key", &self.storage_key)
            .field("on_page_change", &self.on_page_change.is_some())
            .field("on_page_size_change", &self.on_page_size_change.is_some())
            .finish()
    }
}

impl PaginationConfig {
    /// Create a config with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from loaded settings
    pub fn from_settings(settings: &PaginationSettings) -> Self {
        Self {
            default_page_size: settings.default_page_size.max(1),
            sync_with_url: settings.sync_with_url,
            storage_key: settings.storage_key.clone(),
            ..Self::default()
        }
    }

    /// Set the initial page
    #[must_use]
    pub fn initial_page(mut self, page: u32) -> Self {
        self.initial_page = Some(page);
        self
    }

    /// Set the caller-supplied page size
    #[must_use]
    pub fn initial_page_size(mut self, size: u32) -> Self {
        self.initial_page_size = Some(size);
        self
    }

    /// Enable or disable URL sync
    #[must_use]
    pub fn sync_with_url(mut self, enabled: bool) -> Self {
        self.sync_with_url = enabled;
        self
    }

    /// Override the preference key
    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Register a page-change callback
    #[must_use]
    pub fn on_page_change(mut self, f: impl Fn(u32) + Send + Sync + 'static) -> Self {
        self.on_page_change = Some(Box::new(f));
        self
    }

    /// Register a page-size-change callback
    #[must_use]
    pub fn on_page_size_change(mut self, f: impl Fn(u32) + Send + Sync + 'static) -> Self {
        self.on_page_size_change = Some(Box::new(f));
        self
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Client-side pagination engine
pub struct PaginationEngine {
    state: PaginationState,
    config: PaginationConfig,
    store: Box<dyn KeyValueStore>,
    navigator: Option<Box<dyn NavigationPort>>,
}

impl fmt::Debug for PaginationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationEngine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("has_navigator", &self.navigator.is_some())
            .finish_non_exhaustive()
    }
}

impl PaginationEngine {
    /// Create an engine without a navigable location
    pub fn new(config: PaginationConfig, store: impl KeyValueStore + 'static) -> Self {
        Self::build(config, Box::new(store), None)
    }

    /// Create an engine that can mirror its state into `navigator`
    ///
    /// The navigator is only read and written when `sync_with_url` is set.
    pub fn with_navigator(
        config: PaginationConfig,
        store: impl KeyValueStore + 'static,
        navigator: impl NavigationPort + 'static,
    ) -> Self {
        Self::build(config, Box::new(store), Some(Box::new(navigator)))
    }

    fn build(
        config: PaginationConfig,
        store: Box<dyn KeyValueStore>,
        navigator: Option<Box<dyn NavigationPort>>,
    ) -> Self {
        let from_url = match (&navigator, config.sync_with_url) {
            (Some(nav), true) => nav.read(),
            _ => Default::default(),
        };
        let persisted = read_persisted_size(store.as_ref(), &config.storage_key);

        let current_page = from_url
            .page
            .or(config.initial_page)
            .unwrap_or(DEFAULT_PAGE);
        let page_size = from_url
            .page_size
            .or(persisted)
            .or(config.initial_page_size)
            .unwrap_or(config.default_page_size);

        let state = PaginationState::new(current_page, page_size);
        tracing::debug!(
            current_page = state.current_page,
            page_size = state.page_size,
            sync_with_url = config.sync_with_url,
            "Initialized pagination"
        );

        Self {
            state,
            config,
            store,
            navigator,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Current page (1-based)
    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    /// Current page size
    pub fn page_size(&self) -> u32 {
        self.state.page_size
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Check if URL sync is active
    pub fn is_syncing_url(&self) -> bool {
        self.config.sync_with_url && self.navigator.is_some()
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    /// Move to `page`, clamped to at least 1
    ///
    /// The upper bound is not enforced here; see [`Self::clamp_to`].
    pub fn set_current_page(&mut self, page: i64) {
        let page = clamp_page(page);
        self.state.current_page = page;
        tracing::debug!(page, "Set current page");

        self.sync_url();
        if let Some(cb) = &self.config.on_page_change {
            cb(page);
        }
    }

    /// Change the page size, clamped to at least 1
    ///
    /// Always returns to page 1 and persists the new size.
    pub fn set_page_size(&mut self, size: i64) {
        let size = clamp_page_size(size);
        self.state.page_size = size;
        self.state.current_page = 1;
        tracing::debug!(page_size = size, "Set page size");

        self.persist_size(size);
        self.sync_url();
        if let Some(cb) = &self.config.on_page_size_change {
            cb(size);
        }
    }

    /// Return to page 1, leaving the page size untouched
    pub fn reset_pagination(&mut self) {
        self.set_current_page(1);
    }

    /// Advance one page (no upper bound, like [`Self::set_current_page`])
    pub fn next_page(&mut self) {
        self.set_current_page(i64::from(self.state.current_page) + 1);
    }

    /// Go back one page, staying on page 1 at the start
    pub fn previous_page(&mut self) {
        self.set_current_page(i64::from(self.state.current_page) - 1);
    }

    /// Re-clamp the current page against a collection of `item_count` items
    ///
    /// Only moves (and notifies) when the current page lies past the end.
    /// Returns the resulting page.
    pub fn clamp_to(&mut self, item_count: usize) -> u32 {
        let last = total_pages(item_count, self.state.page_size);
        if self.state.current_page as usize > last {
            self.set_current_page(last as i64);
        }
        self.state.current_page
    }

    // ------------------------------------------------------------------------
    // Query
    // ------------------------------------------------------------------------

    /// Slice `items` for the current page
    ///
    /// Never mutates the engine: a page past the end yields an empty slice.
    pub fn get_paginated_items<'a, T>(&self, items: &'a [T]) -> PageSlice<'a, T> {
        PageSlice::new(items, self.state)
    }

    // ------------------------------------------------------------------------
    // Side effects
    // ------------------------------------------------------------------------

    fn persist_size(&self, size: u32) {
        if let Err(e) = self.store.set(&self.config.storage_key, &size.to_string()) {
            tracing::warn!(
                key = %self.config.storage_key,
                error = %e,
                "Failed to persist page size preference"
            );
        }
    }

    fn sync_url(&self) {
        if !self.config.sync_with_url {
            return;
        }
        let Some(nav) = &self.navigator else {
            return;
        };
        if let Err(e) = nav.write(self.state.current_page, self.state.page_size) {
            tracing::warn!(error = %e, "Failed to update navigation state");
        }
    }
}

/// Read the persisted page size, ignoring anything unusable
fn read_persisted_size(store: &dyn KeyValueStore, key: &str) -> Option<u32> {
    match store.get(key) {
        Ok(Some(raw)) => {
            let parsed = parse_positive(&raw);
            if parsed.is_none() {
                tracing::warn!(key, value = %raw, "Ignoring invalid persisted page size");
            }
            parsed
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read page size preference");
            None
        }
    }
}
