//! Import types
//!
//! Parsed document, validated questions, and the per-row error report.

use crate::types::YamlValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Parsed Document
// ============================================================================

/// A question set whose structure parsed but whose rows are not yet checked
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSetDocument {
    /// Certification category the questions belong to
    pub category: String,
    /// Optional description of the set
    pub description: Option<String>,
    /// Raw question rows, in document order
    pub questions: Vec<YamlValue>,
}

// ============================================================================
// Validated Question
// ============================================================================

/// One answer option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Option id referenced by `correct_answer`
    pub id: String,
    /// Option text shown to the user
    pub text: String,
}

/// Question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!(
                "difficulty must be one of easy, medium, hard (got \"{other}\")"
            )),
        }
    }
}

/// A question that passed every row check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionImportData {
    /// 1-based position of the row in the source document
    pub row: usize,
    /// Question text
    pub text: String,
    /// Answer options, in authored order
    pub options: Vec<AnswerOption>,
    /// Id of the correct option
    pub correct_answer: String,
    /// Explanation shown after answering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Difficulty rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

// ============================================================================
// Report
// ============================================================================

/// A problem with a single question row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowValidationError {
    /// 1-based question number
    pub question: usize,
    /// Human-readable description
    pub message: String,
}

impl RowValidationError {
    /// Create a row error
    pub fn new(question: usize, message: impl Into<String>) -> Self {
        Self {
            question,
            message: message.into(),
        }
    }
}

impl fmt::Display for RowValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {}: {}", self.question, self.message)
    }
}

/// Outcome of importing a question set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Category of the set
    pub category: String,
    /// Description of the set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Questions that passed validation
    pub questions: Vec<QuestionImportData>,
    /// Every row problem found, in row order
    pub errors: Vec<RowValidationError>,
    /// Number of rows in the document
    pub total_rows: usize,
}

impl ImportReport {
    /// Number of imported questions
    pub fn imported_count(&self) -> usize {
        self.questions.len()
    }

    /// Number of rows skipped because of at least one error
    pub fn skipped_count(&self) -> usize {
        self.total_rows - self.questions.len()
    }

    /// Check if every row was imported
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formatted error lines, e.g. `Question 3: text is required`
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
