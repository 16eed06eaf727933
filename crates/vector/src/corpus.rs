use sentsearch_common::{Result, SentSearchError};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::types::Record;

/// Load records from a CSV file with a header row
///
/// # Arguments
/// * `path` - CSV file, UTF-8 encoded
/// * `text_column` - Header name of the sentence column
///
/// Fails with `DataUnavailable` when the file is missing, has no rows,
/// lacks the text column, or cannot be parsed.
pub fn load_corpus(path: &Path, text_column: &str) -> Result<Vec<Record>> {
    if !path.is_file() {
        return Err(SentSearchError::data_unavailable(format!(
            "Corpus file not found: {}",
            path.display()
        )));
    }

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| {
            SentSearchError::data_unavailable(format!(
                "Failed to open corpus {}: {}",
                path.display(),
                e
            ))
        })?;

    let records = read_records(reader, text_column)?;
    info!("Corpus loaded - {} records from {}", records.len(), path.display());
    Ok(records)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>, text_column: &str) -> Result<Vec<Record>> {
    let headers = reader
        .headers()
        .map_err(|e| SentSearchError::data_unavailable(format!("Failed to read header: {}", e)))?
        .clone();

    let column = find_column(&headers, text_column).ok_or_else(|| {
        SentSearchError::data_unavailable(format!(
            "Corpus has no '{}' column (found: {})",
            text_column,
            headers.iter().collect::<Vec<_>>().join(", ")
        ))
    })?;
    debug!("Text column '{}' at index {}", text_column, column);

    let mut records = Vec::new();
    for (position, row) in reader.records().enumerate() {
        let row = row.map_err(|e| {
            SentSearchError::data_unavailable(format!(
                "Malformed corpus row {}: {}",
                position + 1,
                e
            ))
        })?;

        let text = row.get(column).ok_or_else(|| {
            SentSearchError::data_unavailable(format!(
                "Corpus row {} is missing the '{}' field",
                position + 1,
                text_column
            ))
        })?;

        records.push(Record::new(position, text));
    }

    if records.is_empty() {
        return Err(SentSearchError::data_unavailable("Corpus contains no records"));
    }

    Ok(records)
}

/// Header lookup tolerant of a UTF-8 BOM and surrounding whitespace
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
}
