//! TF-IDF vocabulary and document matrix
//!
//! Built once from the loaded records and never mutated afterwards.

use ndarray::{Array1, Array2, ArrayView2};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::info;

use crate::similarity::l2_normalize;
use crate::tokenizer::Tokenizer;
use crate::types::Record;

/// Frozen term -> dimension mapping with per-term IDF weights
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: HashMap<String, usize>,
    idf: Array1<f64>,
}

impl Vocabulary {
    /// Build from tokenized documents
    ///
    /// Dimensions follow lexicographic term order.
    /// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
    fn fit(documents: &[Vec<String>]) -> Self {
        let sorted: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect();

        let terms: HashMap<String, usize> = sorted
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let mut df = vec![0usize; terms.len()];
        for doc in documents {
            let unique: HashSet<usize> = doc.iter().filter_map(|t| terms.get(t).copied()).collect();
            for idx in unique {
                df[idx] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = df
            .into_iter()
            .map(|d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        Self { terms, idf }
    }

    /// Number of terms (vector dimensionality)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Dimension index of a term
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    /// IDF weight of a term
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|idx| self.idf[idx])
    }

    /// L2-normalized TF-IDF vector for a tokenized text
    ///
    /// Out-of-vocabulary terms contribute nothing.
    pub fn weigh(&self, tokens: &[String]) -> Array1<f64> {
        let mut vector = Array1::<f64>::zeros(self.len());
        for token in tokens {
            if let Some(idx) = self.term_index(token) {
                vector[idx] += 1.0;
            }
        }
        vector *= &self.idf;
        l2_normalize(&mut vector);
        vector
    }
}

/// Vocabulary plus one unit-length document vector per record
#[derive(Debug, Clone)]
pub struct VectorIndex {
    vocabulary: Vocabulary,
    matrix: Array2<f64>,
}

impl VectorIndex {
    /// Tokenize, fit the vocabulary and weigh every record
    pub fn build(records: &[Record], tokenizer: &Tokenizer) -> Self {
        let documents: Vec<Vec<String>> = records
            .iter()
            .map(|record| tokenizer.tokenize(&record.text))
            .collect();

        let vocabulary = Vocabulary::fit(&documents);

        let mut matrix = Array2::<f64>::zeros((documents.len(), vocabulary.len()));
        for (mut row, doc) in matrix.rows_mut().into_iter().zip(&documents) {
            row.assign(&vocabulary.weigh(doc));
        }

        info!(
            "Vector index built - {} records, {} terms",
            matrix.nrows(),
            vocabulary.len()
        );

        Self { vocabulary, matrix }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Document vectors, one row per record
    pub fn matrix(&self) -> ArrayView2<'_, f64> {
        self.matrix.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentsearch_common::StopWordList;

    fn records(texts: &[&str]) -> Vec<Record> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Record::new(i, *t))
            .collect()
    }

    fn build(texts: &[&str]) -> VectorIndex {
        let tokenizer = Tokenizer::new(StopWordList::English).unwrap();
        VectorIndex::build(&records(texts), &tokenizer)
    }

    #[test]
    fn test_vocabulary_sorted() {
        let index = build(&["the cat sat", "dogs bark loudly", "cats and dogs are pets"]);
        let vocab = index.vocabulary();
        assert_eq!(vocab.len(), 7);
        assert_eq!(vocab.term_index("bark"), Some(0));
        assert_eq!(vocab.term_index("cat"), Some(1));
        assert_eq!(vocab.term_index("sat"), Some(6));
        assert_eq!(vocab.term_index("the"), None);
    }

    #[test]
    fn test_smoothed_idf() {
        let index = build(&["the cat sat", "dogs bark loudly", "cats and dogs are pets"]);
        let vocab = index.vocabulary();
        let expected_rare = (4.0f64 / 2.0).ln() + 1.0;
        let expected_common = (4.0f64 / 3.0).ln() + 1.0;
        assert!((vocab.idf("cat").unwrap() - expected_rare).abs() < 1e-12);
        assert!((vocab.idf("dogs").unwrap() - expected_common).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_shape_and_unit_rows() {
        let index = build(&["the cat sat", "dogs bark loudly", "cats and dogs are pets"]);
        assert_eq!(index.matrix().dim(), (3, 7));
        for row in index.matrix().rows() {
            assert!((row.dot(&row) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_stop_word_only_record_is_zero() {
        let index = build(&["cat food", "the and of"]);
        assert_eq!(index.matrix().nrows(), 2);
        assert!(index.matrix().row(1).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_empty_corpus_has_empty_vocabulary() {
        let index = build(&[]);
        assert!(index.vocabulary().is_empty());
        assert_eq!(index.matrix().dim(), (0, 0));

        let index = build(&["the", "of and"]);
        assert!(index.vocabulary().is_empty());
        assert_eq!(index.matrix().dim(), (2, 0));
    }

    #[test]
    fn test_weigh_ignores_unknown_terms() {
        let index = build(&["cat food", "dog food"]);
        let vector = index.vocabulary().weigh(&["zebra".to_string()]);
        assert_eq!(vector.len(), 3);
        assert!(vector.iter().all(|&v| v == 0.0));
    }
}
