//! Bank discovery and loading.
//!
//! Each bank is one `<id>.json` document in the store directory:
//!
//! ```json
//! { "name": "Geography", "problems": [ { "content": "...", "answer": 1 } ] }
//! ```
//!
//! Documents are re-read on every call; nothing is cached.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::QuizError;
use crate::model::{Bank, BankSummary, LoadedQuestion, Question};

/// File extension of bank documents.
pub const BANK_EXTENSION: &str = "json";

/// Keys attached during loading; stripped from pass-through fields so they
/// cannot be shadowed by the document.
const DERIVED_FIELDS: &[&str] = &["origin_index", "type", "formatted_content"];

#[derive(Debug, Deserialize)]
struct BankDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    problems: Vec<Question>,
}

/// A directory of bank documents.
#[derive(Debug, Clone)]
pub struct BankStore {
    root: PathBuf,
}

impl BankStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Summaries of every readable bank, sorted by id.
    ///
    /// Documents that fail to load are logged and skipped.
    pub fn list_banks(&self) -> Result<Vec<BankSummary>, QuizError> {
        self.ensure_root()?;

        let entries = fs::read_dir(&self.root).map_err(|source| QuizError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut banks = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    tracing::warn!("skipping unreadable entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };
            if !path.is_file() || !path.extension().is_some_and(|ext| ext == BANK_EXTENSION) {
                continue;
            }
            let Some(bank_id) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("skipping {}: file name is not valid UTF-8", path.display());
                continue;
            };

            match read_bank(bank_id, &path) {
                Ok(bank) => banks.push(BankSummary::new(&bank, last_updated(&path))),
                Err(e) => tracing::warn!("skipping {}: {}", path.display(), e),
            }
        }

        banks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(banks)
    }

    /// Load one bank with every question annotated.
    pub fn load_bank(&self, bank_id: &str) -> Result<Bank, QuizError> {
        self.ensure_root()?;

        let path = self
            .bank_path(bank_id)
            .ok_or_else(|| QuizError::NotFound(bank_id.to_string()))?;
        let bank = read_bank(bank_id, &path)?;
        tracing::debug!("loaded bank {} ({} questions)", bank.id, bank.len());
        Ok(bank)
    }

    /// Path of the document backing `bank_id`, or `None` if the id could
    /// escape the store directory.
    pub fn bank_path(&self, bank_id: &str) -> Option<PathBuf> {
        let invalid = bank_id.is_empty()
            || bank_id == "."
            || bank_id == ".."
            || bank_id.contains(['/', '\\']);
        if invalid {
            return None;
        }
        Some(self.root.join(format!("{bank_id}.{BANK_EXTENSION}")))
    }

    fn ensure_root(&self) -> Result<(), QuizError> {
        if self.root.is_dir() {
            return Ok(());
        }
        tracing::info!("creating bank directory {}", self.root.display());
        fs::create_dir_all(&self.root).map_err(|source| QuizError::Io {
            path: self.root.clone(),
            source,
        })
    }
}

fn read_bank(bank_id: &str, path: &Path) -> Result<Bank, QuizError> {
    if !path.is_file() {
        return Err(QuizError::NotFound(bank_id.to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => QuizError::NotFound(bank_id.to_string()),
        _ => QuizError::Unreadable {
            bank_id: bank_id.to_string(),
            source,
        },
    })?;

    parse_bank_str(bank_id, &content).map_err(|source| QuizError::Parse {
        bank_id: bank_id.to_string(),
        source,
    })
}

/// Parse a bank document (useful for testing).
pub fn parse_bank_str(bank_id: &str, content: &str) -> Result<Bank, serde_json::Error> {
    let document: BankDocument = serde_json::from_str(content)?;

    let questions = document
        .problems
        .into_iter()
        .enumerate()
        .map(|(origin_index, mut question)| {
            question
                .extra
                .retain(|key, _| !DERIVED_FIELDS.contains(&key.as_str()));
            LoadedQuestion::new(origin_index, question)
        })
        .collect();

    Ok(Bank {
        id: bank_id.to_string(),
        name: document.name.unwrap_or_else(|| bank_id.to_string()),
        questions,
    })
}

/// Modification date of a document, or today if the filesystem can't say.
fn last_updated(path: &Path) -> NaiveDate {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|modified| DateTime::<Utc>::from(modified).date_naive())
        .unwrap_or_else(|_| Utc::now().date_naive())
}
