//! Question-type inference from the shape of a stored answer.
//!
//! Checks run in a fixed order: booleans before integers, text-led
//! sequences before other sequences. Only the first element of a sequence
//! decides its type. Classification is total; shapes that match no rule
//! become [`QuestionType::Unknown`].

use serde_json::Value;

use crate::model::{Answer, QuestionType};

/// Infer the question type of a raw answer value.
///
/// `None` stands for a question whose answer field is missing.
pub fn classify(answer: Option<&Value>) -> QuestionType {
    match answer {
        Some(value) => parse_answer(value.clone()).question_type(),
        None => QuestionType::Unknown,
    }
}

/// Tag a raw answer value with its shape.
pub fn parse_answer(value: Value) -> Answer {
    match value {
        Value::Bool(b) => Answer::Judge(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Answer::Single(i),
            None => Answer::Unknown(Value::Number(n)),
        },
        Value::Array(items) => parse_sequence(items),
        Value::String(s) => Answer::Essay(s),
        other => Answer::Unknown(other),
    }
}

fn parse_sequence(items: Vec<Value>) -> Answer {
    if matches!(items.first(), Some(Value::String(_))) {
        Answer::Fill(items)
    } else {
        Answer::Multiple(items)
    }
}
