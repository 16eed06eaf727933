/// One corpus entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 0-based position in load order
    pub position: usize,

    /// Sentence text
    pub text: String,
}

impl Record {
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Best match for a query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Position of the matched record
    pub position: usize,

    /// Matched record text
    pub text: String,

    /// Cosine similarity (0.0 to 1.0)
    pub score: f64,
}

impl SearchResult {
    pub fn new(position: usize, text: String, score: f64) -> Self {
        Self {
            position,
            text,
            score,
        }
    }
}

/// Index statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of records loaded
    pub total_records: usize,

    /// Number of vocabulary terms
    pub vocabulary_size: usize,
}
