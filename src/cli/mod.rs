//! CLI module
//!
//! Command-line interface over the library.
//!
//! # Commands
//!
//! - `import` - validate a question-set file and print the report
//! - `page` - page through the valid questions of a file
//! - `prefs` - show or reset the persisted page-size preference

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
