pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, StopWordList};
pub use error::{validate_query, SentSearchError};
pub type Result<T> = std::result::Result<T, SentSearchError>;
