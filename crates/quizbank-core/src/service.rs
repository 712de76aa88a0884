//! The request/response contract served to the HTTP layer.
//!
//! Every call re-reads the bank from the store, so a submitted answer is
//! judged against the document as it is now, not as the client last saw it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QuizError;
use crate::evaluate::{evaluate, Evaluation};
use crate::model::{BankSummary, LoadedQuestion};
use crate::select::{select, SelectQuery};
use crate::store::BankStore;

/// Body of a `problems` request.
pub type ProblemsRequest = SelectQuery;

/// Body of a `check_answer` request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    /// Origin index of the answered question.
    #[serde(default, alias = "problem_origin_idx")]
    pub origin_index: Option<i64>,
    /// The client's answer, in the stored answer's JSON shape.
    #[serde(default, alias = "user_answer")]
    pub submitted_answer: Value,
}

/// Decode a JSON request body. An empty body means every field takes its
/// default.
pub fn parse_request<T: DeserializeOwned>(body: &str) -> Result<T, QuizError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| QuizError::InvalidRequest(e.to_string()))
}

/// Response envelope: `{code: 200, data}` or `{code, msg}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Ok { code: u16, data: T },
    Err { code: u16, msg: String },
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope::Ok { code: 200, data }
    }

    pub fn error(err: &QuizError) -> Self {
        Envelope::Err {
            code: err.status_code(),
            msg: err.to_string(),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Envelope::Ok { code, .. } | Envelope::Err { code, .. } => *code,
        }
    }
}

impl<T> From<Result<T, QuizError>> for Envelope<T> {
    fn from(result: Result<T, QuizError>) -> Self {
        match result {
            Ok(data) => Envelope::ok(data),
            Err(e) => Envelope::error(&e),
        }
    }
}

/// Stateless front for the bank store.
#[derive(Debug, Clone)]
pub struct QuizService {
    store: BankStore,
}

impl QuizService {
    pub fn new(store: BankStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BankStore {
        &self.store
    }

    /// `GET banks`
    pub fn list_banks(&self) -> Result<Vec<BankSummary>, QuizError> {
        self.store.list_banks()
    }

    /// `POST problems/{bank_id}`
    pub fn problems(
        &self,
        bank_id: &str,
        request: &ProblemsRequest,
    ) -> Result<Vec<LoadedQuestion>, QuizError> {
        let bank = self.store.load_bank(bank_id)?;
        Ok(select(&bank.questions, request, &mut rand::thread_rng()))
    }

    /// `POST check_answer/{bank_id}`
    pub fn check_answer(
        &self,
        bank_id: &str,
        request: &CheckAnswerRequest,
    ) -> Result<Evaluation, QuizError> {
        let origin_index = request
            .origin_index
            .ok_or(QuizError::MissingField("origin_index"))?;
        let bank = self.store.load_bank(bank_id)?;
        let evaluation = evaluate(&bank, origin_index, &request.submitted_answer)?;
        tracing::debug!(
            "checked {bank_id}#{origin_index}: {}",
            if evaluation.is_correct { "correct" } else { "incorrect" }
        );
        Ok(evaluation)
    }
}
