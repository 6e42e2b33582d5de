//! Text normalization and tokenization

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercases, tokenizes and strips punctuation/stopwords from free text
pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
        }
    }

    /// Tokenize text into lowercase words using Unicode segmentation
    ///
    /// Punctuation is dropped by segmentation; digits are kept so version
    /// tokens like "es6" survive. Empty or whitespace input yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text.unicode_words() {
            let normalized = word.to_lowercase();
            if normalized.len() > 1
                && !self.stop_words.contains(normalized.as_str())
                && normalized.chars().any(|c| c.is_alphanumeric())
            {
                tokens.push(normalized);
            }
        }

        tokens
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Common English stop words: articles, auxiliaries, prepositions
    fn create_stop_words() -> HashSet<&'static str> {
        [
            "a", "an", "and", "are", "as", "at", "be", "been", "being", "but", "by", "can",
            "could", "did", "do", "does", "for", "from", "had", "has", "have", "he", "her",
            "here", "him", "his", "how", "if", "in", "into", "is", "it", "its", "may", "me",
            "might", "more", "most", "my", "no", "not", "of", "on", "or", "our", "out", "over",
            "shall", "she", "should", "so", "some", "than", "that", "the", "their", "them",
            "then", "there", "these", "they", "this", "those", "to", "too", "up", "was", "we",
            "were", "what", "when", "where", "which", "while", "who", "why", "will", "with",
            "would", "you", "your",
        ]
        .into_iter()
        .collect()
    }
}
