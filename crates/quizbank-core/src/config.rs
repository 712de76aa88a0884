//! quizbank configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::select::{PracticeMode, DEFAULT_TARGET_TYPE};

/// Environment variable overriding the bank directory.
pub const DATA_DIR_ENV: &str = "QUIZBANK_DATA_DIR";

/// Top-level quizbank configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Directory holding `<bank>.json` documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Practice mode used when a request does not name one.
    #[serde(default)]
    pub default_mode: PracticeMode,
    /// Target type for type-filtered practice.
    #[serde(default = "default_type")]
    pub default_type: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_type() -> String {
    DEFAULT_TARGET_TYPE.as_str().to_string()
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_mode: PracticeMode::All,
            default_type: default_type(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let value = std::env::var(&result[start + 2..start + end]).unwrap_or_default();
        result.replace_range(start..start + end + 1, &value);
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizbank.toml` in the current directory
/// 2. `~/.config/quizbank/config.toml`
///
/// `QUIZBANK_DATA_DIR` overrides `data_dir` from any file.
pub fn load_config() -> Result<QuizbankConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbankConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("quizbank.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbankConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

/// Parse a TOML config string, expanding `${VAR}` in `data_dir`.
pub fn parse_config_str(content: &str) -> Result<QuizbankConfig> {
    let mut config: QuizbankConfig = toml::from_str(content)?;
    config.data_dir = PathBuf::from(resolve_env_vars(&config.data_dir.to_string_lossy()));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbank"))
}
