// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # quizdeck
//!
//! Building blocks for certification practice quizzes: a client-side
//! pagination engine with persisted page-size preference and optional URL
//! sync, and a question-set import pipeline that reports every bad question
//! instead of stopping at the first.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quizdeck::import::import_questions_file;
//! use quizdeck::pagination::{PaginationConfig, PaginationEngine};
//! use quizdeck::storage::FileStore;
//!
//! let report = import_questions_file("questions/aws.yaml")?;
//! for line in report.error_messages() {
//!     eprintln!("{line}");
//! }
//!
//! let store = FileStore::open(".quizdeck/preferences.json")?;
//! let mut engine = PaginationEngine::new(PaginationConfig::new(), store);
//! engine.set_page_size(10);
//! let page = engine.get_paginated_items(&report.questions);
//! println!("page {} of {}", page.current_page, page.total_pages);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐    ┌───────────────────────────────┐
//! │       PaginationEngine       │    │        Import pipeline        │
//! │ set_current_page  set_page_  │    │ parse (fatal) → validate rows │
//! │ size  reset  get_paginated_  │    │ (accumulate) → ImportReport   │
//! │ items                        │    │                               │
//! └──────┬───────────────┬───────┘    └───────────────────────────────┘
//!        │               │
//! ┌──────┴──────┐ ┌──────┴────────┐
//! │KeyValueStore│ │NavigationPort │
//! │ Memory/File │ │ Memory / Url  │
//! └─────────────┘ └───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Settings and defaults
pub mod config;

/// Preference storage
pub mod storage;

/// Navigable-location port
pub mod navigation;

/// Client-side pagination
pub mod pagination;

/// Question-set import and validation
pub mod import;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use import::{import_questions, import_questions_file, ImportReport};
pub use pagination::{PageSlice, PaginationConfig, PaginationEngine, PaginationState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
