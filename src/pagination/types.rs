//! Pagination types
//!
//! Page state, clamp helpers, and the slice view handed back to callers.

use serde::{Deserialize, Serialize};

/// Clamp a requested page into `1..=u32::MAX`
pub fn clamp_page(page: i64) -> u32 {
    page.clamp(1, i64::from(u32::MAX)) as u32
}

/// Clamp a requested page size into `1..=u32::MAX`
pub fn clamp_page_size(size: i64) -> u32 {
    size.clamp(1, i64::from(u32::MAX)) as u32
}

/// Number of pages needed for `item_count` items, never less than 1
pub fn total_pages(item_count: usize, page_size: u32) -> usize {
    let page_size = page_size.max(1) as usize;
    item_count.div_ceil(page_size).max(1)
}

/// Current page and page size
///
/// Both fields are always `>= 1`; the derived numbers live in [`PageBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Current page (1-based)
    pub current_page: u32,
    /// Items per page
    pub page_size: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: crate::config::DEFAULT_PAGE,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// Create a state, clamping both values to at least 1
    pub fn new(current_page: u32, page_size: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Derive page bounds for a collection of `item_count` items
    ///
    /// The current page is used as-is, so a stale page past the end yields
    /// an empty range rather than being moved.
    pub fn derive(&self, item_count: usize) -> PageBounds {
        let page_size = self.page_size.max(1) as usize;
        let start_index = (self.current_page.max(1) as usize - 1).saturating_mul(page_size);
        let end_index = start_index.saturating_add(page_size).min(item_count);
        PageBounds {
            total_pages: total_pages(item_count, self.page_size),
            start_index,
            end_index,
        }
    }
}

/// Derived numbers for one page of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBounds {
    /// Total pages (at least 1)
    pub total_pages: usize,
    /// Zero-based index of the first item on the page
    pub start_index: usize,
    /// Zero-based exclusive end, capped at the collection length
    pub end_index: usize,
}

impl PageBounds {
    /// Number of items the page contains
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One page of a caller-supplied collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// Page this slice was computed for
    pub current_page: u32,
    /// Page size this slice was computed with
    pub page_size: u32,
    /// Total pages (at least 1)
    pub total_pages: usize,
    /// Zero-based index of the first item
    pub start_index: usize,
    /// Zero-based exclusive end index
    pub end_index: usize,
    /// Length of the whole collection
    pub total_items: usize,
}

impl<'a, T> PageSlice<'a, T> {
    /// Slice `items` according to `state`
    pub fn new(items: &'a [T], state: PaginationState) -> Self {
        let bounds = state.derive(items.len());
        let page_items = items.get(bounds.start_index..bounds.end_index).unwrap_or(&[]);
        Self {
            items: page_items,
            current_page: state.current_page,
            page_size: state.page_size,
            total_pages: bounds.total_pages,
            start_index: bounds.start_index,
            end_index: bounds.end_index,
            total_items: items.len(),
        }
    }

    /// Check if the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if a later page exists
    pub fn has_next_page(&self) -> bool {
        (self.current_page as usize) < self.total_pages
    }

    /// Check if an earlier page exists
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Check if the page lies past the end of the collection
    pub fn is_out_of_range(&self) -> bool {
        (self.current_page as usize) > self.total_pages
    }

    /// Page numbers to render in a pager, `None` marking an ellipsis
    ///
    /// First and last pages are always shown. `max_buttons` is raised to 5
    /// so there is room for both ellipses around the current page.
    pub fn page_window(&self, max_buttons: usize) -> Vec<Option<usize>> {
        let total = self.total_pages;
        let max = max_buttons.max(5);
        if total <= max {
            return (1..=total).map(Some).collect();
        }

        let current = (self.current_page as usize).clamp(1, total);
        // Slots between the first and last page buttons
        let inner = max - 2;

        let mut window = Vec::with_capacity(max);
        window.push(Some(1));
        if current < inner {
            window.extend((2..=inner).map(Some));
            window.push(None);
        } else if current > total - inner + 1 {
            window.push(None);
            window.extend((total - inner + 1..total).map(Some));
        } else {
            let middle = inner - 2;
            let start = current - (middle - 1) / 2;
            window.push(None);
            window.extend((start..start + middle).map(Some));
            window.push(None);
        }
        window.push(Some(total));

        // An ellipsis never stands for a single page
        for i in 1..window.len() - 1 {
            if let (None, Some(before), Some(after)) = (window[i], window[i - 1], window[i + 1]) {
                if after - before == 2 {
                    window[i] = Some(before + 1);
                }
            }
        }
        window
    }
}
