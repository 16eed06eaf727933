/// SentSearch error types
#[derive(Debug, thiserror::Error)]
pub enum SentSearchError {
    /// Corpus missing or malformed, or no index built yet
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Query is empty after trimming
    #[error("Query is required")]
    EmptyQuery,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SentSearchError {
    /// Create data unavailable error
    pub fn data_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::DataUnavailable(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Trim a raw query and reject it if nothing is left.
///
/// Callers run this before handing the query to the scorer.
pub fn validate_query(raw: &str) -> Result<&str, SentSearchError> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(SentSearchError::EmptyQuery);
    }
    Ok(query)
}
