//! Settings for the quizdeck library and binary
//!
//! Settings are loaded from an optional YAML file. Every field has a
//! documented default so an empty document (or no file at all) is valid.

use crate::error::{Error, Result};
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default page size when neither the caller nor a stored preference supplies one
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Default first page
pub const DEFAULT_PAGE: u32 = 1;

/// Storage key holding the persisted page-size preference
pub const PAGE_SIZE_STORAGE_KEY: &str = "pagination.pageSize";

/// Query parameter carrying the current page
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";

// ============================================================================
// Top-Level Settings
// ============================================================================

/// Complete settings loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default)]
    pub log_level: LogLevel,

    /// File backing the persisted preferences
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,

    /// Pagination defaults
    #[serde(default)]
    pub pagination: PaginationSettings,
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from(".quizdeck/preferences.json")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            preferences_path: default_preferences_path(),
            pagination: PaginationSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Load settings from a file if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<()> {
        self.pagination.validate()
    }
}

// ============================================================================
// Pagination Settings
// ============================================================================

/// Pagination defaults shared by every engine the binary builds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaginationSettings {
    /// Page size used when nothing else supplies one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Persisted-preference key
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Query parameter for the current page
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Query parameter for the page size
    #[serde(default = "default_page_size_param")]
    pub page_size_param: String,

    /// Mirror page/size into the URL
    #[serde(default)]
    pub sync_with_url: bool,

    /// Page sizes offered to the user
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_storage_key() -> String {
    PAGE_SIZE_STORAGE_KEY.to_string()
}

fn default_page_param() -> String {
    PAGE_PARAM.to_string()
}

fn default_page_size_param() -> String {
    PAGE_SIZE_PARAM.to_string()
}

fn default_page_size_options() -> Vec<u32> {
    vec![10, 25, 50, 100]
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            storage_key: default_storage_key(),
            page_param: default_page_param(),
            page_size_param: default_page_size_param(),
            sync_with_url: false,
            page_size_options: default_page_size_options(),
        }
    }
}

impl PaginationSettings {
    /// Validate the pagination settings
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::invalid_value(
                "pagination.default_page_size",
                "must be at least 1",
            ));
        }
        if self.storage_key.trim().is_empty() {
            return Err(Error::invalid_value(
                "pagination.storage_key",
                "cannot be empty",
            ));
        }
        if self.page_param.trim().is_empty() {
            return Err(Error::invalid_value(
                "pagination.page_param",
                "cannot be empty",
            ));
        }
        if self.page_size_param.trim().is_empty() {
            return Err(Error::invalid_value(
                "pagination.page_size_param",
                "cannot be empty",
            ));
        }
        if self.page_param == self.page_size_param {
            return Err(Error::invalid_value(
                "pagination.page_size_param",
                format!("must differ from page_param '{}'", self.page_param),
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(Error::invalid_value(
                "pagination.page_size_options",
                "options must be at least 1",
            ));
        }
        Ok(())
    }
}
