//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quiz question-set tooling
#[derive(Parser, Debug)]
#[command(name = "quizdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short = 'S', long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a question-set file and report per-question problems
    Import {
        /// Question-set file (YAML)
        file: PathBuf,

        /// Fail if any question is rejected
        #[arg(long)]
        strict: bool,
    },

    /// Show one page of the valid questions in a file
    Page {
        /// Question-set file (YAML)
        file: PathBuf,

        /// Page to show (values below 1 are treated as 1)
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Page size (values below 1 are treated as 1); remembered for next time
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,

        /// Location to read page/page size from and write them back to
        #[arg(long)]
        url: Option<String>,
    },

    /// Show the persisted page-size preference
    Prefs {
        /// Forget the stored preference
        #[arg(long)]
        reset: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
