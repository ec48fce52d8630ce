//! Navigation-state module
//!
//! Models the navigable location (the address bar) as an explicit port so
//! the pagination engine can mirror page and page size into a shareable link
//! without depending on any routing library.
//!
//! # Overview
//!
//! - `NavigationPort` - read `{page, page_size}`, write with replace semantics
//! - `MemoryNavigator` - in-memory port that counts replacements
//! - `UrlNavigator` - rewrites two query parameters of a `url::Url`

mod location;
mod memory;
mod types;

pub use location::UrlNavigator;
pub use memory::MemoryNavigator;
pub use types::{parse_positive, NavigationPort, NavigationState};
