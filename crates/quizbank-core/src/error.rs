//! Error types for bank loading and answer evaluation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the store, the evaluator and the service contract.
#[derive(Debug, Error)]
pub enum QuizError {
    /// No document backs the requested bank id.
    #[error("bank not found: {0}")]
    NotFound(String),

    /// The bank document exists but is not a valid bank.
    #[error("failed to parse bank '{bank_id}': {source}")]
    Parse {
        bank_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The bank document exists but could not be read.
    #[error("failed to read bank '{bank_id}': {source}")]
    Unreadable {
        bank_id: String,
        #[source]
        source: std::io::Error,
    },

    /// The storage location could not be read or created.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A request body could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A required request field was absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The origin index does not address a question in the bank.
    #[error("origin index {index} is out of range for a bank of {len} question(s)")]
    IndexOutOfRange { index: i64, len: usize },

    /// The submitted answer cannot be compared with the stored one.
    #[error("invalid answer: {0}")]
    InvalidAnswer(String),
}

impl QuizError {
    /// Returns `true` if the bank could not be served, whether it is missing,
    /// unreadable or malformed.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            QuizError::NotFound(_) | QuizError::Parse { .. } | QuizError::Unreadable { .. }
        )
    }

    /// Returns `true` if the caller sent a request that can never succeed.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidRequest(_)
                | QuizError::MissingField(_)
                | QuizError::IndexOutOfRange { .. }
                | QuizError::InvalidAnswer(_)
        )
    }

    /// HTTP-style status code for the response envelope.
    pub fn status_code(&self) -> u16 {
        if self.is_unavailable() {
            404
        } else if self.is_invalid_request() {
            400
        } else {
            500
        }
    }
}
