use regex::Regex;
use sentsearch_common::{Result, SentSearchError, StopWordList};
use std::collections::HashSet;

use crate::stop_words::ENGLISH_STOP_WORDS;

/// Two or more word characters between word boundaries
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Lowercasing, stop-word-aware word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a tokenizer with the given stop word list
    pub fn new(stop_words: StopWordList) -> Result<Self> {
        let pattern = Regex::new(TOKEN_PATTERN).map_err(|e| {
            SentSearchError::config(format!("Invalid token pattern: {}", e))
        })?;

        let stop_words = match stop_words {
            StopWordList::English => ENGLISH_STOP_WORDS.iter().copied().collect(),
            StopWordList::None => HashSet::new(),
        };

        Ok(Self {
            pattern,
            stop_words,
        })
    }

    /// Split text into lowercase terms, dropping stop words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|term| !self.stop_words.contains(*term))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Tokenizer {
        Tokenizer::new(StopWordList::English).unwrap()
    }

    #[test]
    fn test_lowercases_and_drops_stop_words() {
        assert_eq!(english().tokenize("The Cat sat"), vec!["cat", "sat"]);
    }

    #[test]
    fn test_drops_single_character_tokens() {
        assert_eq!(english().tokenize("x marks 7 spots"), vec!["marks", "spots"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        assert_eq!(
            english().tokenize("Scooby-Doo, where's Shaggy?"),
            vec!["scooby", "doo", "shaggy"]
        );
    }

    #[test]
    fn test_only_stop_words_yields_nothing() {
        assert!(english().tokenize("the and of it").is_empty());
        assert!(english().tokenize("").is_empty());
    }

    #[test]
    fn test_stop_words_disabled() {
        let tokenizer = Tokenizer::new(StopWordList::None).unwrap();
        assert_eq!(tokenizer.tokenize("The cat"), vec!["the", "cat"]);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(english().tokenize("Café Ñandú"), vec!["café", "ñandú"]);
    }
}
