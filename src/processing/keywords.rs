//! Keyword extraction and importance weighting

use crate::processing::text::TextProcessor;
use regex::Regex;
use std::collections::HashSet;

/// Curated vocabulary tables driving extraction and weighting
///
/// Kept as one named, immutable value rather than literals scattered through
/// the scoring code, so the tables are swappable and testable on their own.
pub struct Vocabulary {
    /// Technical terms matched verbatim in raw text, catching multi-token
    /// spellings ("node.js", "ci/cd") that tokenization would split
    pub technical_terms: Vec<&'static str>,
    /// Terms whose presence in a keyword marks it high-importance (weight 3)
    pub high_value: Vec<&'static str>,
    /// Terms marking medium importance (weight 2)
    pub medium_value: Vec<&'static str>,
    /// Recruiting filler dropped from extracted keywords
    pub filler_words: HashSet<&'static str>,
    /// Generic verbs never worth surfacing as "missing keywords"
    pub generic_verbs: Vec<&'static str>,
}

pub const HIGH_IMPORTANCE: u32 = 3;
pub const MEDIUM_IMPORTANCE: u32 = 2;
pub const DEFAULT_IMPORTANCE: u32 = 1;

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            technical_terms: vec![
                "react", "angular", "vue", "node.js", "express", "javascript", "typescript",
                "python", "java", "sql", "aws", "azure", "gcp", "docker", "kubernetes",
                "terraform", "jenkins", "git", "mongodb", "postgresql", "mysql", "redis", "api",
                "rest", "graphql", "microservices", "cloud", "devops", "ci/cd", "agile", "scrum",
            ],
            high_value: vec![
                "react",
                "node",
                "javascript",
                "typescript",
                "python",
                "aws",
                "docker",
                "kubernetes",
                "microservices",
            ],
            medium_value: vec![
                "agile",
                "scrum",
                "api",
                "rest",
                "mongodb",
                "postgresql",
                "cloud",
            ],
            filler_words: [
                "seeking",
                "looking",
                "ideal",
                "candidate",
                "required",
                "requirements",
                "preferred",
                "strong",
                "good",
                "excellent",
                "skills",
                "include",
                "including",
                "such",
                "like",
                "need",
                "needs",
                "want",
                "wants",
            ]
            .into_iter()
            .collect(),
            generic_verbs: vec!["looking", "seeking", "need", "want", "must", "required"],
        }
    }
}

/// Extracts a deduplicated, ordered keyword list from free text
pub struct KeywordExtractor {
    processor: TextProcessor,
    vocabulary: Vocabulary,
    technical_regex: Regex,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

impl KeywordExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        let alternation = vocabulary
            .technical_terms
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");
        let technical_regex = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
            .expect("Invalid technical term regex");

        Self {
            processor: TextProcessor::new(),
            vocabulary,
            technical_regex,
        }
    }

    /// Extract keywords: tokenization pass unioned with a technical-term scan
    ///
    /// Order is deterministic (token order, then technical matches) and the
    /// result is deduplicated. Empty input yields an empty list, not an error.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for token in self.processor.tokenize(text) {
            self.push_keyword(token, &mut seen, &mut keywords);
        }

        // Second pass over the raw text so dotted and slashed terms survive
        for found in self.technical_regex.find_iter(text) {
            self.push_keyword(found.as_str().to_lowercase(), &mut seen, &mut keywords);
        }

        keywords
    }

    fn push_keyword(&self, term: String, seen: &mut HashSet<String>, out: &mut Vec<String>) {
        if term.len() <= 2 || self.vocabulary.filler_words.contains(term.as_str()) {
            return;
        }
        if seen.insert(term.clone()) {
            out.push(term);
        }
    }

    /// Tier weight of a keyword: high vocabulary beats medium beats default
    pub fn importance(&self, term: &str) -> u32 {
        if self.vocabulary.high_value.iter().any(|v| term.contains(v)) {
            HIGH_IMPORTANCE
        } else if self.vocabulary.medium_value.iter().any(|v| term.contains(v)) {
            MEDIUM_IMPORTANCE
        } else {
            DEFAULT_IMPORTANCE
        }
    }

    /// Whether a term is a generic recruiting verb not worth surfacing
    pub fn is_generic_verb(&self, term: &str) -> bool {
        self.vocabulary.generic_verbs.iter().any(|v| term == *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_technical_terms_with_punctuation() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Experience with Node.js and CI/CD pipelines");

        assert!(keywords.contains(&"node.js".to_string()));
        assert!(keywords.contains(&"ci/cd".to_string()));
        assert!(keywords.contains(&"pipelines".to_string()));
    }

    #[test]
    fn test_filters_filler_and_short_tokens() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("We are seeking an ideal candidate with strong React skills");

        assert!(keywords.contains(&"react".to_string()));
        assert!(!keywords.contains(&"seeking".to_string()));
        assert!(!keywords.contains(&"ideal".to_string()));
        assert!(!keywords.contains(&"candidate".to_string()));
        assert!(!keywords.contains(&"skills".to_string()));
    }

    #[test]
    fn test_deduplicates_preserving_order() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Python developer. Python and Django. python!");

        let count = keywords.iter().filter(|k| k.as_str() == "python").count();
        assert_eq!(count, 1);
        assert_eq!(keywords[0], "python");
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_keeps_version_tokens() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("ES6 modules and HTML5");
        assert!(keywords.contains(&"es6".to_string()));
        assert!(keywords.contains(&"html5".to_string()));
    }

    #[test]
    fn test_importance_tiers() {
        let extractor = KeywordExtractor::default();
        assert_eq!(extractor.importance("react"), HIGH_IMPORTANCE);
        assert_eq!(extractor.importance("node.js"), HIGH_IMPORTANCE);
        assert_eq!(extractor.importance("agile"), MEDIUM_IMPORTANCE);
        assert_eq!(extractor.importance("spreadsheets"), DEFAULT_IMPORTANCE);
    }

    #[test]
    fn test_importance_high_tier_wins_over_medium() {
        let extractor = KeywordExtractor::default();
        // Contains both "aws" (high) and "cloud" (medium)
        assert_eq!(extractor.importance("aws-cloud"), HIGH_IMPORTANCE);
    }

    #[test]
    fn test_word_boundaries_in_technical_scan() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Our restful services");
        // "rest" must not match inside "restful"
        assert!(!keywords.contains(&"rest".to_string()));
        assert!(keywords.contains(&"restful".to_string()));
    }
}
