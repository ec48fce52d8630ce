//! Question-set import module
//!
//! Turns an authored YAML question set into validated questions.
//!
//! # Overview
//!
//! Import runs in two stages:
//! - **parse** - document structure (`category`, `questions` list). Any
//!   failure here is fatal and aborts the whole import with `Error::Parse`.
//! - **validate** - every question row is checked independently and all
//!   problems are collected into an `ImportReport`; valid rows are still
//!   imported.

mod parser;
mod types;
mod validate;

pub use parser::{import_questions, import_questions_file, parse_question_set};
pub use types::{
    AnswerOption, Difficulty, ImportReport, QuestionImportData, QuestionSetDocument,
    RowValidationError,
};
pub use validate::{
    check_correct_answer, validate_options, validate_question, validate_question_set,
};
