//! Pagination module
//!
//! Client-side pagination over an in-memory collection.
//!
//! # Overview
//!
//! - `PaginationEngine` - owns current page and page size, clamps input,
//!   persists the page-size preference, optionally mirrors state into the URL
//! - `PaginationConfig` - named optional settings with documented defaults
//! - `PageSlice` - one page of a collection plus derived numbers
//!
//! Slicing is lazy: a page that has fallen past the end of a shrunken
//! collection yields an empty slice until the caller re-clamps.

mod engine;
mod types;

pub use engine::{PageCallback, PaginationConfig, PaginationEngine};
pub use types::{
    clamp_page, clamp_page_size, total_pages, PageBounds, PageSlice, PaginationState,
};

#[cfg(test)]
mod tests;
