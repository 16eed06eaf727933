use crate::error::SentSearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Stop word list applied by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordList {
    /// Built-in English list
    English,
    /// Keep every token
    None,
}

impl FromStr for StopWordList {
    type Err = SentSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "none" | "off" | "" => Ok(Self::None),
            other => Err(SentSearchError::config(format!(
                "Unknown stop word list '{}', expected 'english' or 'none'",
                other
            ))),
        }
    }
}

impl fmt::Display for StopWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::None => write!(f, "none"),
        }
    }
}

/// SentSearch application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Corpus CSV file path
    pub corpus_path: PathBuf,

    /// Name of the column holding the sentence text
    pub text_column: String,

    /// Stop words removed before weighting
    pub stop_words: StopWordList,

    /// Log directory (console only when unset)
    pub log_dir: Option<PathBuf>,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("./data/sentences.csv"),
            text_column: "text".to_string(),
            stop_words: StopWordList::English,
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, SentSearchError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let stop_words = match std::env::var("STOP_WORDS") {
            Ok(value) => value.parse()?,
            Err(_) => StopWordList::English,
        };

        let config = Self {
            corpus_path: Self::get_env_path("CORPUS_PATH")
                .unwrap_or_else(|| PathBuf::from("./data/sentences.csv")),
            text_column: std::env::var("TEXT_COLUMN")
                .unwrap_or_else(|_| "text".to_string()),
            stop_words,
            log_dir: Self::get_env_path("LOG_DIR"),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Override the corpus file
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = path.into();
        self
    }

    /// Override the text column name
    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    /// Override the stop word list
    pub fn with_stop_words(mut self, stop_words: StopWordList) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SentSearchError> {
        if self.text_column.trim().is_empty() {
            return Err(SentSearchError::config("Text column name cannot be empty"));
        }

        if self.corpus_path.as_os_str().is_empty() {
            return Err(SentSearchError::config("Corpus path cannot be empty"));
        }

        Ok(())
    }
}
