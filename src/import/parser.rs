//! Question-set parser
//!
//! Checks document structure only. Row contents are left to the validator so
//! that one bad question never hides the others.

use super::types::{ImportReport, QuestionSetDocument};
use super::validate::validate_question_set;
use crate::error::{Error, Result};
use crate::types::YamlValue;
use std::fs;
use std::path::Path;

/// Parse a question-set document
///
/// Fails when the YAML is malformed, the top level is not a mapping,
/// `category` is missing or blank, or `questions` is missing or not a list.
pub fn parse_question_set(yaml: &str) -> Result<QuestionSetDocument> {
    if yaml.trim().is_empty() {
        return Err(Error::parse("document is empty"));
    }

    let value: YamlValue =
        serde_yaml::from_str(yaml).map_err(|e| Error::parse(format!("invalid YAML: {e}")))?;

    let YamlValue::Mapping(map) = value else {
        return Err(Error::parse("top level must be a mapping"));
    };

    let questions = match map.get("questions") {
        None | Some(YamlValue::Null) => {
            return Err(Error::parse("missing required 'questions' list"));
        }
        Some(YamlValue::Sequence(rows)) => rows.clone(),
        Some(_) => return Err(Error::parse("'questions' must be a list")),
    };

    let category = match map.get("category") {
        Some(YamlValue::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(YamlValue::String(_)) => return Err(Error::parse("'category' cannot be empty")),
        Some(YamlValue::Null) | None => return Err(Error::parse("missing required 'category'")),
        Some(_) => return Err(Error::parse("'category' must be a string")),
    };

    let description = match map.get("description") {
        None | Some(YamlValue::Null) => None,
        Some(YamlValue::String(s)) => Some(s.clone()),
        Some(_) => return Err(Error::parse("'description' must be a string")),
    };

    tracing::debug!(category = %category, rows = questions.len(), "Parsed question set");

    Ok(QuestionSetDocument {
        category,
        description,
        questions,
    })
}

/// Parse and validate a question set from a YAML string
pub fn import_questions(yaml: &str) -> Result<ImportReport> {
    let document = parse_question_set(yaml)?;
    Ok(validate_question_set(&document))
}

/// Parse and validate a question set from a YAML file
pub fn import_questions_file(path: impl AsRef<Path>) -> Result<ImportReport> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    import_questions(&content)
}
