//! Common types used throughout quizdeck
//!
//! Shared type aliases and small enums used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Ordered string-to-string map (persisted preference files)
pub type StringMap = BTreeMap<String, String>;

/// YAML value type (re-exported from serde_yaml)
pub type YamlValue = serde_yaml::Value;

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the binary's subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Helper Traits
// ============================================================================

/// Extension trait for optional strings coming out of loosely-typed documents
pub trait OptionStringExt {
    /// Returns true if None or a string that is empty after trimming
    fn is_blank(&self) -> bool;
}

impl OptionStringExt for Option<String> {
    fn is_blank(&self) -> bool {
        self.as_deref().map_or(true, |s| s.trim().is_empty())
    }
}

impl OptionStringExt for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}
