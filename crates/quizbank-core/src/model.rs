//! Core data model types for quizbank.
//!
//! A bank document holds raw [`Question`]s; loading wraps each one in a
//! [`LoadedQuestion`] carrying its origin index, inferred type and display
//! content.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::classify::parse_answer;
use crate::format::format_content;

/// The closed set of question kinds, inferred from the stored answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Judge,
    Single,
    Multiple,
    Fill,
    Essay,
    Unknown,
}

impl QuestionType {
    pub const ALL: [QuestionType; 6] = [
        QuestionType::Judge,
        QuestionType::Single,
        QuestionType::Multiple,
        QuestionType::Fill,
        QuestionType::Essay,
        QuestionType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Judge => "judge",
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
            QuestionType::Fill => "fill",
            QuestionType::Essay => "essay",
            QuestionType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown question type: {s}"))
    }
}

/// A stored answer, tagged once at load time by its JSON shape.
///
/// Serializes back to the shape it was read from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Answer {
    /// `true` / `false`.
    Judge(bool),
    /// Index of the selected option.
    Single(i64),
    /// All selected options, order-independent. Usually option indices.
    Multiple(Vec<Value>),
    /// One expected value per blank, in order. The first is always text.
    Fill(Vec<Value>),
    /// Free text.
    Essay(String),
    /// Anything else, kept verbatim.
    Unknown(Value),
}

impl Answer {
    pub fn question_type(&self) -> QuestionType {
        match self {
            Answer::Judge(_) => QuestionType::Judge,
            Answer::Single(_) => QuestionType::Single,
            Answer::Multiple(_) => QuestionType::Multiple,
            Answer::Fill(_) => QuestionType::Fill,
            Answer::Essay(_) => QuestionType::Essay,
            Answer::Unknown(_) => QuestionType::Unknown,
        }
    }
}

impl Default for Answer {
    fn default() -> Self {
        Answer::Unknown(Value::Null)
    }
}

impl From<Value> for Answer {
    fn from(value: Value) -> Self {
        parse_answer(value)
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Answer::Judge(b) => serializer.serialize_bool(*b),
            Answer::Single(i) => serializer.serialize_i64(*i),
            Answer::Multiple(selections) => selections.serialize(serializer),
            Answer::Fill(blanks) => blanks.serialize(serializer),
            Answer::Essay(text) => serializer.serialize_str(text),
            Answer::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

/// A question record as stored in a bank document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question text; may contain blank markers.
    #[serde(default)]
    pub content: String,
    /// The stored correct answer.
    #[serde(default)]
    pub answer: Answer,
    /// Option texts for choice questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Explanation; may contain `{{OPT:N}}` references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    /// Knowledge-point tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub knowledge: Vec<String>,
    /// Fields this crate does not interpret, passed through to clients.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A question annotated during bank loading.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedQuestion {
    /// Position in the bank document; stable across filtering and shuffling.
    pub origin_index: usize,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub formatted_content: String,
    #[serde(flatten)]
    pub question: Question,
}

impl LoadedQuestion {
    pub fn new(origin_index: usize, question: Question) -> Self {
        let question_type = question.answer.question_type();
        let formatted_content = format_content(&question.content, &question.answer);
        Self {
            origin_index,
            question_type,
            formatted_content,
            question,
        }
    }
}

/// A question bank freshly loaded from its document.
#[derive(Debug, Clone, Serialize)]
pub struct Bank {
    /// File stem of the backing document.
    pub id: String,
    pub name: String,
    /// Questions in document order; `questions[i].origin_index == i`.
    pub questions: Vec<LoadedQuestion>,
}

impl Bank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by its origin index.
    pub fn question(&self, origin_index: usize) -> Option<&LoadedQuestion> {
        self.questions.get(origin_index)
    }

    /// Count questions per inferred type. Types with no questions are omitted.
    pub fn type_counts(&self) -> BTreeMap<QuestionType, usize> {
        let mut counts = BTreeMap::new();
        for q in &self.questions {
            *counts.entry(q.question_type).or_insert(0) += 1;
        }
        counts
    }
}

/// One row of the bank listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub count: usize,
    pub type_counts: BTreeMap<QuestionType, usize>,
    pub last_updated: NaiveDate,
}

impl BankSummary {
    pub fn new(bank: &Bank, last_updated: NaiveDate) -> Self {
        Self {
            id: bank.id.clone(),
            name: bank.name.clone(),
            count: bank.len(),
            type_counts: bank.type_counts(),
            last_updated,
        }
    }
}
