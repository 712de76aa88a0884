//! Answer evaluation and explanation resolution.
//!
//! Correctness is decided by the stored answer's tag; the submitted answer
//! arrives as untyped JSON from the client.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::Value;

use crate::error::QuizError;
use crate::model::{Answer, Bank, QuestionType};

/// Explanation returned for questions without one.
pub const DEFAULT_ANALYSIS: &str = "No analysis available.";

/// `{{OPT:N}}` with a 1-based option number.
static OPTION_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{OPT:(\d+)\}\}").expect("option reference pattern is valid"));

/// Outcome of checking one submitted answer.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub is_correct: bool,
    pub correct_answer: Answer,
    /// Explanation with option references resolved.
    pub analysis: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

/// Judge `submitted` against the question at `origin_index`.
pub fn evaluate(bank: &Bank, origin_index: i64, submitted: &Value) -> Result<Evaluation, QuizError> {
    let question = usize::try_from(origin_index)
        .ok()
        .and_then(|i| bank.question(i))
        .ok_or(QuizError::IndexOutOfRange {
            index: origin_index,
            len: bank.len(),
        })?;

    let stored = &question.question;
    let is_correct = is_correct(&stored.answer, submitted)?;
    let analysis = resolve_analysis(
        stored.analysis.as_deref().unwrap_or(DEFAULT_ANALYSIS),
        stored.options.as_deref(),
    );

    Ok(Evaluation {
        is_correct,
        correct_answer: stored.answer.clone(),
        analysis,
        question_type: question.question_type,
    })
}

/// Compare a submitted answer with the stored one.
///
/// A submission of the wrong shape is simply incorrect, except where the
/// comparison itself is undefined: `multiple` needs a list and `essay`
/// needs text.
pub fn is_correct(stored: &Answer, submitted: &Value) -> Result<bool, QuizError> {
    let correct = match stored {
        Answer::Judge(expected) => submitted.as_bool() == Some(*expected),
        Answer::Single(expected) => submitted.as_i64() == Some(*expected),
        Answer::Multiple(expected) => {
            let given = submitted.as_array().ok_or_else(|| {
                QuizError::InvalidAnswer("multiple-choice answers must be a list of selections".into())
            })?;
            same_selections(given, expected)
        }
        Answer::Fill(expected) => submitted
            .as_array()
            .is_some_and(|given| given == expected),
        Answer::Essay(expected) => {
            let given = submitted.as_str().ok_or_else(|| {
                QuizError::InvalidAnswer("essay answers must be text".into())
            })?;
            normalize(given) == normalize(expected)
        }
        Answer::Unknown(_) => false,
    };
    Ok(correct)
}

/// Equal as multisets: order is ignored, repeats count.
fn same_selections(given: &[Value], expected: &[Value]) -> bool {
    if given.len() != expected.len() {
        return false;
    }
    let mut remaining: Vec<&Value> = expected.iter().collect();
    given.iter().all(|selection| {
        match remaining.iter().position(|candidate| *candidate == selection) {
            Some(at) => {
                remaining.swap_remove(at);
                true
            }
            None => false,
        }
    })
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Replace every resolvable `{{OPT:N}}` with the text of option `N`.
///
/// References past the end of `options` (or `{{OPT:0}}`) stay as written.
/// Without options the text is returned unchanged.
pub fn resolve_analysis(analysis: &str, options: Option<&[String]>) -> String {
    let Some(options) = options else {
        return analysis.to_string();
    };

    OPTION_REF
        .replace_all(analysis, |caps: &Captures<'_>| {
            option_at(options, &caps[1])
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// 1-based option numbers referenced by `analysis` that `options` cannot
/// resolve, in order of appearance.
pub fn unresolved_option_refs(analysis: &str, options: &[String]) -> Vec<String> {
    OPTION_REF
        .captures_iter(analysis)
        .filter(|caps| option_at(options, &caps[1]).is_none())
        .map(|caps| caps[1].to_string())
        .collect()
}

fn option_at<'a>(options: &'a [String], number: &str) -> Option<&'a str> {
    number
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .map(String::as_str)
}
