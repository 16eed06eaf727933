//! SentSearch vector search
//!
//! Corpus loading, TF-IDF indexing and cosine-similarity ranking.

pub mod corpus;
pub mod engine;
pub mod index;
pub mod similarity;
pub mod stop_words;
pub mod tokenizer;
pub mod types;

pub use corpus::load_corpus;
pub use engine::{SearchEngine, SearchService};
pub use index::{VectorIndex, Vocabulary};
pub use tokenizer::Tokenizer;
pub use types::{IndexStats, Record, SearchResult};
