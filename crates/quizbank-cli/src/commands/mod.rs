//! Subcommand implementations.

pub mod banks;
pub mod check;
pub mod init;
pub mod problems;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use quizbank_core::config::{load_config_from, QuizbankConfig};
use quizbank_core::service::Envelope;
use quizbank_core::{BankStore, QuizError, QuizService};

/// Options shared by every subcommand.
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl GlobalArgs {
    /// Load the config, applying `--data-dir` on top.
    pub fn config(&self) -> Result<QuizbankConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        tracing::debug!("using bank directory {}", config.data_dir.display());
        Ok(config)
    }
}

pub fn service(config: &QuizbankConfig) -> QuizService {
    QuizService::new(BankStore::new(&config.data_dir))
}

/// Print `result` as a response envelope, failing the command on errors.
pub fn print_envelope<T: Serialize>(result: Result<T, QuizError>) -> Result<()> {
    let failed = result.as_ref().err().map(ToString::to_string);
    let envelope = Envelope::from(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    match failed {
        Some(msg) => anyhow::bail!(msg),
        None => Ok(()),
    }
}
