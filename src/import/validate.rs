//! Row validation
//!
//! Each check is independent and yields either a value or an error string.
//! `validate_question` collects every failing check for a row; the answer
//! check only runs once the options themselves validated.

use super::types::{
    AnswerOption, Difficulty, ImportReport, QuestionImportData, QuestionSetDocument,
    RowValidationError,
};
use crate::types::{OptionStringExt, YamlValue};
use regex::Regex;
use serde_yaml::Mapping;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Well-formed option ids: alphanumeric start, then alphanumerics, `_`, `.`, `-`
static OPTION_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").unwrap());

/// Validate every row of a parsed question set
///
/// Never stops early: the report holds all valid rows and all row errors.
pub fn validate_question_set(document: &QuestionSetDocument) -> ImportReport {
    let mut questions = Vec::new();
    let mut errors = Vec::new();

    for (index, row) in document.questions.iter().enumerate() {
        match validate_question(index + 1, row) {
            Ok(question) => questions.push(question),
            Err(row_errors) => {
                for err in &row_errors {
                    tracing::warn!(question = err.question, "{}", err.message);
                }
                errors.extend(row_errors);
            }
        }
    }

    let report = ImportReport {
        category: document.category.clone(),
        description: document.description.clone(),
        questions,
        errors,
        total_rows: document.questions.len(),
    };

    tracing::info!(
        category = %report.category,
        imported = report.imported_count(),
        skipped = report.skipped_count(),
        "Validated question set"
    );

    report
}

/// Validate one question row (`question` is its 1-based number)
pub fn validate_question(
    question: usize,
    row: &YamlValue,
) -> Result<QuestionImportData, Vec<RowValidationError>> {
    let Some(map) = row.as_mapping() else {
        return Err(vec![RowValidationError::new(
            question,
            "question must be a mapping",
        )]);
    };

    let mut messages = Vec::new();

    let text = check_text(field(map, &["text"]))
        .map_err(|m| messages.push(m))
        .ok();

    let options = validate_options(field(map, &["options"]))
        .map_err(|m| messages.push(m))
        .ok();

    let correct_answer = options.as_ref().and_then(|opts| {
        check_correct_answer(field(map, &["correctAnswer", "correct_answer"]), opts)
            .map_err(|m| messages.push(m))
            .ok()
    });

    let explanation = check_explanation(field(map, &["explanation"]))
        .map_err(|m| messages.push(m))
        .ok()
        .flatten();

    let difficulty = check_difficulty(field(map, &["difficulty"]))
        .map_err(|m| messages.push(m))
        .ok()
        .flatten();

    let tags = check_tags(field(map, &["tags"]))
        .map_err(|m| messages.push(m))
        .ok();

    match (text, options, correct_answer, tags) {
        (Some(text), Some(options), Some(correct_answer), Some(tags)) if messages.is_empty() => {
            Ok(QuestionImportData {
                row: question,
                text,
                options,
                correct_answer,
                explanation,
                difficulty,
                tags,
            })
        }
        _ => Err(messages
            .into_iter()
            .map(|m| RowValidationError::new(question, m))
            .collect()),
    }
}

/// Validate a question's `options` against the options schema
///
/// The list must be non-empty, each entry a mapping with a well-formed `id`
/// and non-empty `text`, and ids unique. All entry problems are joined into
/// one message.
pub fn validate_options(value: Option<&YamlValue>) -> Result<Vec<AnswerOption>, String> {
    let entries = match value {
        None | Some(YamlValue::Null) => return Err("options is required".to_string()),
        Some(YamlValue::Sequence(entries)) => entries,
        Some(_) => return Err("options must be a list".to_string()),
    };
    if entries.is_empty() {
        return Err("options must contain at least one option".to_string());
    }

    let mut problems = Vec::new();
    let mut options = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let number = index + 1;
        let Some(map) = entry.as_mapping() else {
            problems.push(format!(
                "option {number} must be a mapping with 'id' and 'text'"
            ));
            continue;
        };

        let id = match present(field(map, &["id"])).map(scalar_string) {
            None => {
                problems.push(format!("option {number} is missing an id"));
                None
            }
            Some(None) => {
                problems.push(format!("option {number} id must be a string or integer"));
                None
            }
            Some(Some(id)) if id.is_blank() => {
                problems.push(format!("option {number} is missing an id"));
                None
            }
            Some(Some(id)) if !OPTION_ID_REGEX.is_match(&id) => {
                problems.push(format!("option {number} has malformed id \"{id}\""));
                None
            }
            Some(Some(id)) => Some(id),
        };

        let text = match present(field(map, &["text"])) {
            Some(YamlValue::String(text)) if !text.is_blank() => Some(text.trim().to_string()),
            Some(YamlValue::String(_)) | None => {
                problems.push(format!("option {number} is missing text"));
                None
            }
            Some(_) => {
                problems.push(format!("option {number} text must be a string"));
                None
            }
        };

        if let Some(id) = &id {
            if !seen.insert(id.clone()) {
                problems.push(format!("duplicate option id \"{id}\""));
            }
        }

        if let (Some(id), Some(text)) = (id, text) {
            options.push(AnswerOption { id, text });
        }
    }

    if problems.is_empty() {
        Ok(options)
    } else {
        Err(format!("invalid options: {}", problems.join("; ")))
    }
}

/// Check that `correctAnswer` names one of the validated options
pub fn check_correct_answer(
    value: Option<&YamlValue>,
    options: &[AnswerOption],
) -> Result<String, String> {
    let Some(value) = present(value) else {
        return Err("correctAnswer is required".to_string());
    };
    let Some(answer) = scalar_string(value) else {
        return Err("correctAnswer must be a string or integer".to_string());
    };
    if answer.is_blank() {
        return Err("correctAnswer is required".to_string());
    }

    if options.iter().any(|o| o.id == answer) {
        Ok(answer)
    } else {
        let valid: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        Err(format!(
            "correctAnswer \"{answer}\" does not match any option id (valid ids: {})",
            valid.join(", ")
        ))
    }
}

fn check_text(value: Option<&YamlValue>) -> Result<String, String> {
    match value {
        None | Some(YamlValue::Null) => Err("text is required".to_string()),
        Some(YamlValue::String(s)) if !s.is_blank() => Ok(s.trim().to_string()),
        Some(_) => Err("text must be a non-empty string".to_string()),
    }
}

fn check_explanation(value: Option<&YamlValue>) -> Result<Option<String>, String> {
    match value {
        None | Some(YamlValue::Null) => Ok(None),
        Some(YamlValue::String(s)) if s.is_blank() => Ok(None),
        Some(YamlValue::String(s)) => Ok(Some(s.trim().to_string())),
        Some(_) => Err("explanation must be a string".to_string()),
    }
}

fn check_difficulty(value: Option<&YamlValue>) -> Result<Option<Difficulty>, String> {
    match value {
        None | Some(YamlValue::Null) => Ok(None),
        Some(YamlValue::String(s)) => s.parse::<Difficulty>().map(Some),
        Some(_) => Err("difficulty must be one of easy, medium, hard".to_string()),
    }
}

fn check_tags(value: Option<&YamlValue>) -> Result<Vec<String>, String> {
    match value {
        None | Some(YamlValue::Null) => Ok(Vec::new()),
        Some(YamlValue::Sequence(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|s| s.trim().to_string())
                    .ok_or_else(|| "tags must be a list of strings".to_string())
            })
            .collect(),
        Some(_) => Err("tags must be a list of strings".to_string()),
    }
}

/// Look up the first present key among `names`
fn field<'a>(map: &'a Mapping, names: &[&str]) -> Option<&'a YamlValue> {
    names.iter().find_map(|name| map.get(*name))
}

/// Treat an explicit `null` the same as an absent key
fn present(value: Option<&YamlValue>) -> Option<&YamlValue> {
    value.filter(|v| !v.is_null())
}

/// Render a string or integer scalar as a string
fn scalar_string(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.trim().to_string()),
        YamlValue::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}
