use sentsearch_vector::{IndexStats, SearchResult};
use serde::Serialize;
use std::io::Write;

/// Answer to one query
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub best_match: &'a str,
    pub score: f64,
}

impl<'a> SearchResponse<'a> {
    pub fn new(query: &'a str, result: &'a SearchResult) -> Self {
        Self {
            query,
            best_match: &result.text,
            score: result.score,
        }
    }
}

/// Index health summary
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub total_sentences: usize,
    pub vocabulary_size: usize,
}

impl From<IndexStats> for HealthResponse {
    fn from(stats: IndexStats) -> Self {
        Self {
            status: "healthy",
            total_sentences: stats.total_records,
            vocabulary_size: stats.vocabulary_size,
        }
    }
}

/// Full corpus listing
#[derive(Debug, Serialize)]
pub struct SentencesResponse {
    pub sentences: Vec<String>,
}

/// Rejected query
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

pub fn write_search<W: Write>(
    out: &mut W,
    format: Format,
    response: &SearchResponse<'_>,
) -> anyhow::Result<()> {
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string(response)?)?,
        Format::Text => writeln!(out, "{:.4}\t{}", response.score, response.best_match)?,
    }
    Ok(())
}

pub fn write_health<W: Write>(
    out: &mut W,
    format: Format,
    response: &HealthResponse,
) -> anyhow::Result<()> {
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string(response)?)?,
        Format::Text => {
            writeln!(out, "status: {}", response.status)?;
            writeln!(out, "total_sentences: {}", response.total_sentences)?;
            writeln!(out, "vocabulary_size: {}", response.vocabulary_size)?;
        }
    }
    Ok(())
}

pub fn write_sentences<W: Write>(
    out: &mut W,
    format: Format,
    response: &SentencesResponse,
) -> anyhow::Result<()> {
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string(response)?)?,
        Format::Text => {
            for sentence in &response.sentences {
                writeln!(out, "{}", sentence)?;
            }
        }
    }
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, format: Format, message: &str) -> anyhow::Result<()> {
    match format {
        Format::Json => writeln!(
            out,
            "{}",
            serde_json::to_string(&ErrorResponse {
                error: message.to_string()
            })?
        )?,
        Format::Text => writeln!(out, "error: {}", message)?,
    }
    Ok(())
}
