//! Preference storage module
//!
//! A small key-value capability injected into the pagination engine so the
//! persisted page-size preference never depends on ambient global storage.
//!
//! # Overview
//!
//! The storage module provides:
//! - `KeyValueStore` - get/set/remove string values by key
//! - `MemoryStore` - shared in-memory map (tests, embedding)
//! - `FileStore` - JSON file persistence with atomic writes

mod file;
mod memory;
mod types;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use types::KeyValueStore;
