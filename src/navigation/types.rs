//! Navigation types and traits

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Page and page size as carried by the navigable location
///
/// A field is `None` when the location does not carry a usable value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current page (1-based)
    pub page: Option<u32>,
    /// Page size
    pub page_size: Option<u32>,
}

impl NavigationState {
    /// Create a state carrying both values
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Check if neither value is present
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.page_size.is_none()
    }
}

/// Port onto the navigable location
pub trait NavigationPort: Send + Sync {
    /// Read page and page size from the current location
    fn read(&self) -> NavigationState;

    /// Replace page and page size in the current location without adding
    /// a history entry
    fn write(&self, page: u32, page_size: u32) -> Result<()>;
}

/// Parse a decimal string into a positive integer
///
/// Returns `None` for anything that is not a whole number `>= 1`.
pub fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}
