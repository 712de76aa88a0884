//! Question selection: type filtering and shuffling.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{LoadedQuestion, QuestionType};

/// Target type used when a query does not name one.
pub const DEFAULT_TARGET_TYPE: QuestionType = QuestionType::Single;

/// How questions are picked from a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum PracticeMode {
    /// Every question, in document order.
    #[default]
    All,
    /// Only questions of one type.
    #[serde(rename = "type")]
    ByType,
}

impl From<String> for PracticeMode {
    fn from(mode: String) -> Self {
        if mode.eq_ignore_ascii_case("type") {
            PracticeMode::ByType
        } else {
            PracticeMode::All
        }
    }
}

/// Selection parameters, as sent by a client asking for a bank's questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectQuery {
    #[serde(default)]
    pub mode: PracticeMode,
    /// Type name kept when `mode` is [`PracticeMode::ByType`]. Names outside
    /// [`QuestionType::ALL`] match nothing.
    #[serde(rename = "type", default = "default_target_type")]
    pub question_type: String,
    #[serde(default)]
    pub shuffle: bool,
}

fn default_target_type() -> String {
    DEFAULT_TARGET_TYPE.as_str().to_string()
}

impl Default for SelectQuery {
    fn default() -> Self {
        Self {
            mode: PracticeMode::All,
            question_type: default_target_type(),
            shuffle: false,
        }
    }
}

/// Pick questions according to `query`, leaving `questions` untouched.
///
/// Filtering keeps relative order; shuffling is applied afterwards. Each
/// question keeps its `origin_index`.
pub fn select<R: Rng + ?Sized>(
    questions: &[LoadedQuestion],
    query: &SelectQuery,
    rng: &mut R,
) -> Vec<LoadedQuestion> {
    let mut selected: Vec<LoadedQuestion> = match query.mode {
        PracticeMode::All => questions.to_vec(),
        PracticeMode::ByType => questions
            .iter()
            .filter(|q| q.question_type.as_str() == query.question_type)
            .cloned()
            .collect(),
    };

    if query.shuffle {
        selected.shuffle(rng);
    }

    selected
}
