//! In-memory navigator

use super::types::{NavigationPort, NavigationState};
use crate::error::{Error, Result};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Inner {
    state: NavigationState,
    replacements: usize,
}

/// In-memory navigation port
///
/// Clones share the same location, which lets a test hold one handle while
/// the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryNavigator {
    /// Create a navigator with an empty location
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator whose location already carries values
    pub fn with_state(state: NavigationState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state,
                replacements: 0,
            })),
        }
    }

    /// Number of `write` calls performed so far
    pub fn replacements(&self) -> usize {
        self.inner.read().map(|i| i.replacements).unwrap_or_default()
    }
}

impl NavigationPort for MemoryNavigator {
    fn read(&self) -> NavigationState {
        self.inner.read().map(|i| i.state).unwrap_or_default()
    }

    fn write(&self, page: u32, page_size: u32) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Error::navigation("navigator lock poisoned"))?;
        inner.state = NavigationState::new(page, page_size);
        inner.replacements += 1;
        Ok(())
    }
}
