//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::import::{import_questions_file, ImportReport, QuestionImportData};
use crate::navigation::UrlNavigator;
use crate::pagination::{PageSlice, PaginationConfig, PaginationEngine};
use crate::storage::{FileStore, KeyValueStore};
use serde_json::json;
use std::fmt::Write as _;
use std::path::Path;
use url::Url;

/// Pager buttons shown in pretty output
const PAGER_BUTTONS: usize = 7;

/// CLI runner
pub struct Runner {
    cli: Cli,
    settings: Settings,
}

impl Runner {
    /// Create a runner, loading settings from `--settings` if given
    pub fn new(cli: Cli) -> Result<Self> {
        let settings = Settings::load_or_default(cli.settings.as_deref())?;
        Ok(Self { cli, settings })
    }

    /// Create a runner with already-loaded settings
    pub fn with_settings(cli: Cli, settings: Settings) -> Self {
        Self { cli, settings }
    }

    /// Loaded settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether `--verbose` was passed
    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    /// Run the command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Import { file, strict } => self.import(file, *strict),
            Commands::Page {
                file,
                page,
                page_size,
                url,
            } => self.page(file, *page, *page_size, url.as_deref()),
            Commands::Prefs { reset } => self.prefs(*reset),
        }
    }

    // ------------------------------------------------------------------------
    // import
    // ------------------------------------------------------------------------

    fn import(&self, file: &Path, strict: bool) -> Result<String> {
        let report = import_questions_file(file)?;
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            OutputFormat::Pretty => render_report(&report),
        };

        if strict && !report.is_clean() {
            // Strict mode still shows what was wrong
            eprintln!("{output}");
            return Err(Error::RowsRejected {
                failed: report.skipped_count(),
                total: report.total_rows,
            });
        }
        Ok(output)
    }

    // ------------------------------------------------------------------------
    // page
    // ------------------------------------------------------------------------

    fn page(
        &self,
        file: &Path,
        page: Option<i64>,
        page_size: Option<i64>,
        url: Option<&str>,
    ) -> Result<String> {
        let report = import_questions_file(file)?;
        let store = FileStore::open(&self.settings.preferences_path)?;
        let pagination = &self.settings.pagination;
        let config = PaginationConfig::from_settings(pagination);

        let navigator = url
            .map(|raw| -> Result<UrlNavigator> {
                Ok(UrlNavigator::with_params(
                    Url::parse(raw)?,
                    pagination.page_param.clone(),
                    pagination.page_size_param.clone(),
                ))
            })
            .transpose()?;

        let mut engine = match &navigator {
            Some(nav) => {
                PaginationEngine::with_navigator(config.sync_with_url(true), store, nav.clone())
            }
            None => PaginationEngine::new(config, store),
        };

        if let Some(size) = page_size {
            engine.set_page_size(size);
        }
        if let Some(page) = page {
            engine.set_current_page(page);
        }

        let slice = engine.get_paginated_items(&report.questions);
        let location = navigator.as_ref().map(UrlNavigator::current);

        Ok(match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(&json!({
                "category": report.category,
                "page": slice.current_page,
                "pageSize": slice.page_size,
                "totalPages": slice.total_pages,
                "startIndex": slice.start_index,
                "endIndex": slice.end_index,
                "totalItems": slice.total_items,
                "questions": slice.items,
                "url": location,
            }))?,
            OutputFormat::Pretty => render_page(&report.category, &slice, location.as_deref()),
        })
    }

    // ------------------------------------------------------------------------
    // prefs
    // ------------------------------------------------------------------------

    fn prefs(&self, reset: bool) -> Result<String> {
        let store = FileStore::open(&self.settings.preferences_path)?;
        let key = &self.settings.pagination.storage_key;
        if reset {
            store.remove(key)?;
        }
        let stored = store.get(key)?;

        Ok(match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(&json!({
                "key": key,
                "pageSize": stored,
                "default": self.settings.pagination.default_page_size,
                "options": self.settings.pagination.page_size_options,
            }))?,
            OutputFormat::Pretty => match stored {
                Some(size) => format!("{key} = {size}"),
                None => format!(
                    "{key} is not set (default {})",
                    self.settings.pagination.default_page_size
                ),
            },
        })
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render_report(report: &ImportReport) -> String {
    let mut out = format!(
        "Imported {} of {} questions into \"{}\"",
        report.imported_count(),
        report.total_rows,
        report.category
    );
    if report.skipped_count() > 0 {
        let _ = write!(out, " ({} skipped)", report.skipped_count());
    }
    if !report.errors.is_empty() {
        out.push_str("\nErrors:");
        for message in report.error_messages() {
            let _ = write!(out, "\n  - {message}");
        }
    }
    out
}

fn render_page(
    category: &str,
    slice: &PageSlice<'_, QuestionImportData>,
    url: Option<&str>,
) -> String {
    let mut out = format!(
        "{category}: page {} of {}",
        slice.current_page, slice.total_pages
    );
    if slice.is_empty() {
        out.push_str(" (no questions on this page)");
    } else {
        let _ = write!(
            out,
            " (questions {}-{} of {})",
            slice.start_index + 1,
            slice.end_index,
            slice.total_items
        );
    }

    for (offset, question) in slice.items.iter().enumerate() {
        let _ = write!(out, "\n{:>4}. {}", slice.start_index + offset + 1, question.text);
        for option in &question.options {
            let marker = if option.id == question.correct_answer { '*' } else { ' ' };
            let _ = write!(out, "\n      {marker} {}) {}", option.id, option.text);
        }
    }

    let pager: Vec<String> = slice
        .page_window(PAGER_BUTTONS)
        .into_iter()
        .map(|entry| match entry {
            Some(n) if n == slice.current_page as usize => format!("[{n}]"),
            Some(n) => n.to_string(),
            None => "...".to_string(),
        })
        .collect();
    let _ = write!(out, "\n{}", pager.join(" "));

    if let Some(url) = url {
        let _ = write!(out, "\n{url}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    const QUESTIONS: &str = r"
category: Kubernetes
questions:
  - text: Smallest deployable unit?
    options: [{ id: a, text: Pod }, { id: b, text: Node }]
    correctAnswer: a
  - text: Default namespace name?
    options: [{ id: a, text: default }, { id: b, text: main }]
    correctAnswer: a
  - text: Broken row
    options: [{ id: a, text: A }]
    correctAnswer: q
";

    fn runner(dir: &Path, args: &[&str]) -> Runner {
        let mut argv = vec!["quizdeck"];
        argv.extend_from_slice(args);
        let cli = Cli::parse_from(argv);
        let settings = Settings {
            preferences_path: dir.join("prefs.json"),
            ..Settings::default()
        };
        Runner::with_settings(cli, settings)
    }

    fn write_questions(dir: &Path) -> String {
        let path = dir.join("questions.yaml");
        std::fs::write(&path, QUESTIONS).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_import_pretty() {
        let dir = tempdir().unwrap();
        let file = write_questions(dir.path());

        let output = runner(dir.path(), &["import", &file]).execute().unwrap();
        assert!(output.starts_with("Imported 2 of 3 questions into \"Kubernetes\" (1 skipped)"));
        assert!(output.contains("Question 3: correctAnswer \"q\""));
    }

    #[test]
    fn test_import_strict_rejects() {
        let dir = tempdir().unwrap();
        let file = write_questions(dir.path());

        let err = runner(dir.path(), &["import", &file, "--strict"])
            .execute()
            .unwrap_err();
        assert!(matches!(err, Error::RowsRejected { failed: 1, total: 3 }));
    }

    #[test]
    fn test_import_json() {
        let dir = tempdir().unwrap();
        let file = write_questions(dir.path());

        let output = runner(dir.path(), &["--format", "json", "import", &file])
            .execute()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["totalRows"], 3);
        assert_eq!(value["errors"][0]["question"], 3);
    }

    #[test]
    fn test_page_persists_size() {
        let dir = tempdir().unwrap();
        let file = write_questions(dir.path());

        let output = runner(dir.path(), &["page", &file, "--page-size", "1", "--page", "2"])
            .execute()
            .unwrap();
        assert!(output.starts_with("Kubernetes: page 2 of 2 (questions 2-2 of 2)"));
        assert!(output.contains("Default namespace name?"));
        assert!(output.contains("1 [2]"));

        // Size is remembered, page is not
        let output = runner(dir.path(), &["page", &file]).execute().unwrap();
        assert!(output.starts_with("Kubernetes: page 1 of 2"));

        let prefs = runner(dir.path(), &["prefs"]).execute().unwrap();
        assert_eq!(prefs, "pagination.pageSize = 1");
    }

    #[test]
    fn test_page_with_url() {
        let dir = tempdir().unwrap();
        let file = write_questions(dir.path());

        let output = runner(
            dir.path(),
            &[
                "--format",
                "json",
                "page",
                &file,
                "--url",
                "https://quiz.example.com/k8s?page=2&pageSize=1&tab=all",
                "--page",
                "1",
            ],
        )
        .execute()
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["page"], 1);
        assert_eq!(value["pageSize"], 1);
        assert_eq!(value["totalPages"], 2);
        assert_eq!(
            value["url"],
            "https://quiz.example.com/k8s?tab=all&page=1&pageSize=1"
        );
    }

    #[test]
    fn test_page_out_of_range() {
        let dir = tempdir().unwrap();
        let file = write_questions(dir.path());

        let output = runner(dir.path(), &["page", &file, "--page", "9"])
            .execute()
            .unwrap();
        assert!(output.contains("page 9 of 1 (no questions on this page)"));
    }

    #[test]
    fn test_prefs_reset() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
        store.set("pagination.pageSize", "50").unwrap();

        let output = runner(dir.path(), &["prefs", "--reset"]).execute().unwrap();
        assert_eq!(output, "pagination.pageSize is not set (default 25)");
    }
}
