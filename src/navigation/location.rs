//! URL-backed navigator
//!
//! Reads and rewrites the page/page-size query parameters of a URL while
//! preserving every other query pair and the fragment.

use super::types::{parse_positive, NavigationPort, NavigationState};
use crate::config::{PAGE_PARAM, PAGE_SIZE_PARAM};
use crate::error::{Error, Result};
use std::sync::{Arc, RwLock};
use url::Url;

/// Navigation port over a `url::Url`
#[derive(Debug, Clone)]
pub struct UrlNavigator {
    url: Arc<RwLock<Url>>,
    page_param: String,
    page_size_param: String,
}

impl UrlNavigator {
    /// Create a navigator using the default `page` / `pageSize` parameters
    pub fn new(url: Url) -> Self {
        Self::with_params(url, PAGE_PARAM, PAGE_SIZE_PARAM)
    }

    /// Parse `raw` as a URL and create a navigator over it
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(raw)?))
    }

    /// Create a navigator with custom parameter names
    pub fn with_params(
        url: Url,
        page_param: impl Into<String>,
        page_size_param: impl Into<String>,
    ) -> Self {
        Self {
            url: Arc::new(RwLock::new(url)),
            page_param: page_param.into(),
            page_size_param: page_size_param.into(),
        }
    }

    /// The current location as a string
    pub fn current(&self) -> String {
        self.url().map(String::from).unwrap_or_default()
    }

    /// The current location as a parsed URL
    pub fn url(&self) -> Option<Url> {
        self.url.read().ok().map(|u| u.clone())
    }

    /// Read a query parameter; the last occurrence wins
    fn param(url: &Url, name: &str) -> Option<u32> {
        url.query_pairs()
            .filter(|(k, _)| k == name)
            .last()
            .and_then(|(_, v)| parse_positive(&v))
    }
}

impl NavigationPort for UrlNavigator {
    fn read(&self) -> NavigationState {
        let Ok(url) = self.url.read() else {
            return NavigationState::default();
        };
        NavigationState {
            page: Self::param(&url, &self.page_param),
            page_size: Self::param(&url, &self.page_size_param),
        }
    }

    fn write(&self, page: u32, page_size: u32) -> Result<()> {
        let mut url = self
            .url
            .write()
            .map_err(|_| Error::navigation("navigator lock poisoned"))?;
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != &self.page_param && k != &self.page_size_param)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(&self.page_param, &page.to_string())
            .append_pair(&self.page_size_param, &page_size.to_string());

        tracing::debug!(url = %url, "Replaced navigation state");
        Ok(())
    }
}
