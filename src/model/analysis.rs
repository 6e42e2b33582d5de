//! Analysis results returned to the caller

use serde::{Deserialize, Serialize};

/// Complete compatibility analysis for one resume / job-description pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall 0-100 score, the weighted sum of the breakdown
    #[serde(rename = "score")]
    pub overall: u8,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<Suggestion>,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
    /// Unmatched job keywords worth adding, at most 10
    #[serde(rename = "missingKeywords")]
    pub missing_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keywords: u8,
    pub experience: u8,
    pub skills: u8,
    pub formatting: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub priority: Priority,
    #[serde(rename = "suggestion")]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Keywords,
    Experience,
    Skills,
    Formatting,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Suggestion {
    pub fn new(category: SuggestionCategory, priority: Priority, text: impl Into<String>) -> Self {
        Self {
            category,
            priority,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn test_wire_shape() {
        let result = AnalysisResult {
            overall: 72,
            breakdown: ScoreBreakdown {
                keywords: 80,
                experience: 70,
                skills: 65,
                formatting: 75,
            },
            suggestions: vec![Suggestion::new(
                SuggestionCategory::Skills,
                Priority::High,
                "Add Docker to your skills section",
            )],
            matched_keywords: vec!["react".to_string()],
            missing_keywords: vec!["docker".to_string()],
        };

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 72);
        assert_eq!(json["breakdown"]["keywords"], 80);
        assert_eq!(json["suggestions"][0]["priority"], "high");
        assert_eq!(json["suggestions"][0]["category"], "skills");
        assert!(json["suggestions"][0]["suggestion"].is_string());
        assert_eq!(json["matchedKeywords"][0], "react");
        assert_eq!(json["missingKeywords"][0], "docker");
    }
}
