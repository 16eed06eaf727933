use sentsearch_common::{AppConfig, Result, SentSearchError};
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::corpus::load_corpus;
use crate::index::VectorIndex;
use crate::similarity::{argmax_first, cosine_scores};
use crate::tokenizer::Tokenizer;
use crate::types::{IndexStats, Record, SearchResult};

/// Immutable, query-ready search engine
///
/// Owns the records, the tokenizer and the TF-IDF index built from them.
/// Safe to share by reference across threads.
#[derive(Debug)]
pub struct SearchEngine {
    records: Vec<Record>,
    tokenizer: Tokenizer,
    index: VectorIndex,
}

impl SearchEngine {
    /// Load the configured corpus and build the index
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let records = load_corpus(&config.corpus_path, &config.text_column)?;
        let tokenizer = Tokenizer::new(config.stop_words)?;
        Ok(Self::from_records(records, tokenizer))
    }

    /// Build the index over already loaded records
    pub fn from_records(records: Vec<Record>, tokenizer: Tokenizer) -> Self {
        let index = VectorIndex::build(&records, &tokenizer);
        Self {
            records,
            tokenizer,
            index,
        }
    }

    /// Best-matching record for a non-empty query
    ///
    /// Queries with no vocabulary terms still succeed with score 0.0 and
    /// the first record. Fails with `DataUnavailable` when there are no
    /// records to rank.
    pub fn search(&self, query: &str) -> Result<SearchResult> {
        debug!("Searching for: {}", query);

        let tokens = self.tokenizer.tokenize(query);
        let query_vector = self.index.vocabulary().weigh(&tokens);
        let scores = cosine_scores(self.index.matrix(), &query_vector);

        let (position, score) = argmax_first(&scores)
            .ok_or_else(|| SentSearchError::data_unavailable("No records indexed"))?;
        let record = &self.records[position];

        debug!(
            "Search completed - position={}, score={:.4}, query_terms={}",
            position,
            score,
            tokens.len()
        );
        Ok(SearchResult::new(position, record.text.clone(), score))
    }

    /// Record and vocabulary counts
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_records: self.records.len(),
            vocabulary_size: self.index.vocabulary().len(),
        }
    }

    /// Every record text in load order
    pub fn list_texts(&self) -> Vec<String> {
        self.records.iter().map(|r| r.text.clone()).collect()
    }
}

/// Startup wrapper: `Uninitialized` until `initialize` succeeds, then `Ready`
/// for the rest of the process lifetime.
#[derive(Debug, Default)]
pub struct SearchService {
    engine: OnceLock<SearchEngine>,
}

impl SearchService {
    /// Create an uninitialized service
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the corpus and build the index, moving to `Ready`
    pub fn initialize(&self, config: &AppConfig) -> Result<&SearchEngine> {
        if self.is_ready() {
            return Err(SentSearchError::invalid_input("Search service already initialized"));
        }
        let engine = SearchEngine::from_config(config)?;
        self.install(engine)
    }

    /// Move to `Ready` with an engine built elsewhere
    pub fn install(&self, engine: SearchEngine) -> Result<&SearchEngine> {
        self.engine
            .set(engine)
            .map_err(|_| SentSearchError::invalid_input("Search service already initialized"))?;
        let engine = self.engine()?;
        let stats = engine.stats();
        info!(
            "Search service ready - {} records, {} terms",
            stats.total_records, stats.vocabulary_size
        );
        Ok(engine)
    }

    pub fn is_ready(&self) -> bool {
        self.engine.get().is_some()
    }

    fn engine(&self) -> Result<&SearchEngine> {
        self.engine
            .get()
            .ok_or_else(|| SentSearchError::data_unavailable("Search index not built yet"))
    }

    pub fn search(&self, query: &str) -> Result<SearchResult> {
        self.engine()?.search(query)
    }

    pub fn stats(&self) -> Result<IndexStats> {
        Ok(self.engine()?.stats())
    }

    pub fn list_texts(&self) -> Result<Vec<String>> {
        Ok(self.engine()?.list_texts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentsearch_common::StopWordList;

    const PETS: &[&str] = &["the cat sat", "dogs bark loudly", "cats and dogs are pets"];

    fn engine(texts: &[&str]) -> SearchEngine {
        let records = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Record::new(i, *t))
            .collect();
        SearchEngine::from_records(records, Tokenizer::new(StopWordList::English).unwrap())
    }

    #[test]
    fn test_cat_finds_cat_sentence() {
        let result = engine(PETS).search("cat").unwrap();
        assert_eq!(result.position, 0);
        assert_eq!(result.text, "the cat sat");
        assert!(result.score > 0.0);
    }

    #[test]
    fn test_exact_text_scores_one() {
        let engine = engine(PETS);
        for (position, text) in PETS.iter().enumerate() {
            let result = engine.search(text).unwrap();
            assert_eq!(result.position, position);
            assert!((result.score - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_out_of_vocabulary_is_zero_at_first_record() {
        let engine = engine(PETS);
        for query in ["zebra", "the of and", "x y z"] {
            let result = engine.search(query).unwrap();
            assert_eq!(result.position, 0);
            assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn test_duplicate_records_tie_to_lowest_position() {
        let result = engine(&["dogs bark", "cats purr", "cats purr"]).search("purr").unwrap();
        assert_eq!(result.position, 1);
    }

    #[test]
    fn test_empty_vocabulary_reports_no_match() {
        let result = engine(&["the", "and of"]).search("anything").unwrap();
        assert_eq!(result.position, 0);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_empty_corpus() {
        let engine = engine(&[]);
        assert_eq!(
            engine.stats(),
            IndexStats {
                total_records: 0,
                vocabulary_size: 0
            }
        );
        let err = engine.search("cat").unwrap_err();
        assert!(matches!(err, SentSearchError::DataUnavailable(_)));
    }

    #[test]
    fn test_stats_and_list() {
        let engine = engine(PETS);
        assert_eq!(
            engine.stats(),
            IndexStats {
                total_records: 3,
                vocabulary_size: 7
            }
        );
        assert_eq!(engine.list_texts(), PETS);
    }

    #[test]
    fn test_service_uninitialized() {
        let service = SearchService::new();
        assert!(!service.is_ready());
        assert!(matches!(service.search("cat"), Err(SentSearchError::DataUnavailable(_))));
        assert!(matches!(service.stats(), Err(SentSearchError::DataUnavailable(_))));
        assert!(matches!(service.list_texts(), Err(SentSearchError::DataUnavailable(_))));
    }

    #[test]
    fn test_service_ready_once() {
        let service = SearchService::new();
        service.install(engine(PETS)).unwrap();
        assert!(service.is_ready());
        assert_eq!(service.search("cat").unwrap().position, 0);
        assert_eq!(service.stats().unwrap().total_records, 3);

        let err = service.install(engine(PETS)).unwrap_err();
        assert!(matches!(err, SentSearchError::InvalidInput(_)));
    }

    #[test]
    fn test_service_failed_startup_stays_uninitialized() {
        let service = SearchService::new();
        let config = AppConfig::default().with_corpus_path("/no/such/corpus.csv");
        let err = service.initialize(&config).unwrap_err();
        assert!(matches!(err, SentSearchError::DataUnavailable(_)));
        assert!(!service.is_ready());
    }
}
