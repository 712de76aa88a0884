//! Static checks for bank documents.
//!
//! None of these stop a bank from loading; they flag questions that will
//! render badly or can never be answered correctly.

use serde_json::Value;

use crate::evaluate::unresolved_option_refs;
use crate::format::count_markers;
use crate::model::{Answer, Bank, LoadedQuestion};

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Origin index of the question, or `None` for bank-level warnings.
    pub origin_index: Option<usize>,
    pub message: String,
}

/// Validate a bank for common authoring mistakes.
pub fn validate_bank(bank: &Bank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(ValidationWarning {
            origin_index: None,
            message: "bank has no questions".into(),
        });
    }

    for question in &bank.questions {
        for message in question_warnings(question) {
            warnings.push(ValidationWarning {
                origin_index: Some(question.origin_index),
                message,
            });
        }
    }

    warnings
}

fn question_warnings(loaded: &LoadedQuestion) -> Vec<String> {
    let question = &loaded.question;
    let mut messages = Vec::new();

    if question.content.trim().is_empty() {
        messages.push("content is empty".to_string());
    }

    let options = question.options.as_deref();
    match &question.answer {
        Answer::Unknown(raw) => {
            messages.push(format!("answer {raw} has no recognized shape and can never be correct"));
        }
        Answer::Fill(blanks) => {
            let markers = count_markers(&question.content);
            if markers < blanks.len() {
                messages.push(format!(
                    "{} blank(s) expected but only {markers} marker(s) found",
                    blanks.len()
                ));
            }
        }
        Answer::Single(index) => check_selections(&[Value::from(*index)], options, &mut messages),
        Answer::Multiple(selections) => check_selections(selections, options, &mut messages),
        Answer::Judge(_) | Answer::Essay(_) => {}
    }

    if let Some(analysis) = &question.analysis {
        match options {
            Some(options) => {
                for number in unresolved_option_refs(analysis, options) {
                    messages.push(format!("analysis references missing option {number}"));
                }
            }
            None if !unresolved_option_refs(analysis, &[]).is_empty() => {
                messages.push("analysis references options but the question has none".into());
            }
            None => {}
        }
    }

    messages
}

fn check_selections(selections: &[Value], options: Option<&[String]>, messages: &mut Vec<String>) {
    let Some(options) = options else {
        messages.push("choice question has no options".into());
        return;
    };
    for selection in selections {
        let Some(index) = selection.as_i64() else {
            messages.push(format!("answer selection {selection} is not an option index"));
            continue;
        };
        if usize::try_from(index).map_or(true, |i| i >= options.len()) {
            messages.push(format!(
                "answer index {index} is outside the {} option(s)",
                options.len()
            ));
        }
    }
}
