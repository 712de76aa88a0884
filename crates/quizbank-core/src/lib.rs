//! quizbank-core — Question-bank model and answer-evaluation engine.
//!
//! This crate loads question banks from JSON documents, infers each
//! question's type from the shape of its stored answer, prepares display
//! content, and judges submitted answers against the stored ones.

pub mod classify;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod model;
pub mod select;
pub mod service;
pub mod store;
pub mod validate;

pub use error::QuizError;
pub use model::{Answer, Bank, BankSummary, LoadedQuestion, Question, QuestionType};
pub use service::QuizService;
pub use store::BankStore;
