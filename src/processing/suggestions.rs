//! Prioritized improvement suggestions derived from the sub-scores

use crate::model::analysis::{Priority, Suggestion, SuggestionCategory};
use crate::processing::scoring::{
    ExperienceAnalysis, FormattingAnalysis, KeywordAnalysis, SkillsAnalysis,
};

const IMPROVEMENT_BAR: u8 = 80;
const TAILORING_BAR: u8 = 70;
const MAX_LISTED_TERMS: usize = 5;

/// Generate suggestions from the analysis, rule-ordered and deterministic
///
/// The final list is stably sorted by priority, so within a priority the
/// rule emission order above is preserved.
pub fn generate(
    keywords: &KeywordAnalysis,
    missing_keywords: &[String],
    experience: &ExperienceAnalysis,
    skills: &SkillsAnalysis,
    formatting: &FormattingAnalysis,
    overall: u8,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if keywords.score < IMPROVEMENT_BAR && !missing_keywords.is_empty() {
        let top: Vec<&str> = missing_keywords
            .iter()
            .take(MAX_LISTED_TERMS)
            .map(String::as_str)
            .collect();
        suggestions.push(Suggestion::new(
            SuggestionCategory::Keywords,
            Priority::High,
            format!(
                "Add these key terms from the job description to your resume: {}",
                top.join(", ")
            ),
        ));
    }

    if experience.score < IMPROVEMENT_BAR {
        if let Some(required) = experience.required_years {
            if experience.actual_years < required {
                suggestions.push(Suggestion::new(
                    SuggestionCategory::Experience,
                    Priority::Medium,
                    format!(
                        "The position asks for {} years of experience but your resume shows {}. \
                         Emphasize relevant projects and transferable experience.",
                        required, experience.actual_years
                    ),
                ));
            }
        }
        if experience.job_mentions_leadership {
            suggestions.push(Suggestion::new(
                SuggestionCategory::Experience,
                Priority::High,
                "This role values leadership. Highlight examples of leading projects, \
                 mentoring colleagues, or managing initiatives.",
            ));
        }
    }

    if skills.score < IMPROVEMENT_BAR {
        let absent: Vec<&str> = skills
            .missing
            .iter()
            .take(MAX_LISTED_TERMS)
            .map(String::as_str)
            .collect();
        if !absent.is_empty() {
            suggestions.push(Suggestion::new(
                SuggestionCategory::Skills,
                Priority::High,
                format!(
                    "List these skills from the posting if you have them: {}",
                    absent.join(", ")
                ),
            ));
        }
    }

    if formatting.score < 100 {
        if formatting.missing_phone {
            suggestions.push(Suggestion::new(
                SuggestionCategory::Formatting,
                Priority::Medium,
                "Add a phone number so recruiters can reach you.",
            ));
        }
        if formatting.weak_summary {
            suggestions.push(Suggestion::new(
                SuggestionCategory::Formatting,
                Priority::High,
                "Add a professional summary of at least a few sentences \
                 tailored to the role.",
            ));
        }
    }

    if overall < TAILORING_BAR {
        suggestions.push(Suggestion::new(
            SuggestionCategory::General,
            Priority::High,
            "Tailor your resume more specifically to this posting: mirror its \
             terminology and lead with the most relevant experience.",
        ));
    }

    suggestions.sort_by_key(|s| s.priority);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_analysis(score: u8) -> KeywordAnalysis {
        KeywordAnalysis {
            score,
            matched: vec![],
            unmatched: vec![],
        }
    }

    fn experience_analysis(score: u8) -> ExperienceAnalysis {
        ExperienceAnalysis {
            score,
            required_years: None,
            actual_years: 0,
            job_mentions_leadership: false,
        }
    }

    fn skills_analysis(score: u8, missing: Vec<String>) -> SkillsAnalysis {
        SkillsAnalysis {
            score,
            job_skills: vec![],
            missing,
        }
    }

    fn formatting_analysis(score: u8) -> FormattingAnalysis {
        FormattingAnalysis {
            score,
            issues: vec![],
            missing_phone: false,
            weak_summary: false,
        }
    }

    #[test]
    fn test_no_suggestions_for_a_clean_pass() {
        let suggestions = generate(
            &keyword_analysis(90),
            &[],
            &experience_analysis(90),
            &skills_analysis(90, vec![]),
            &formatting_analysis(100),
            85,
        );
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_missing_keywords_capped_at_five() {
        let missing: Vec<String> = (0..8).map(|i| format!("term{}", i)).collect();
        let suggestions = generate(
            &keyword_analysis(40),
            &missing,
            &experience_analysis(90),
            &skills_analysis(90, vec![]),
            &formatting_analysis(100),
            75,
        );
        assert_eq!(suggestions.len(), 1);
        let text = &suggestions[0].text;
        assert!(text.contains("term0"));
        assert!(text.contains("term4"));
        assert!(!text.contains("term5"));
    }

    #[test]
    fn test_low_keyword_score_without_missing_list_stays_silent() {
        let suggestions = generate(
            &keyword_analysis(40),
            &[],
            &experience_analysis(90),
            &skills_analysis(90, vec![]),
            &formatting_analysis(100),
            75,
        );
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_experience_gap_cites_both_numbers() {
        let mut experience = experience_analysis(70);
        experience.required_years = Some(5);
        experience.actual_years = 2;
        let suggestions = generate(
            &keyword_analysis(90),
            &[],
            &experience,
            &skills_analysis(90, vec![]),
            &formatting_analysis(100),
            85,
        );
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].category, SuggestionCategory::Experience);
        assert_eq!(suggestions[0].priority, Priority::Medium);
        assert!(suggestions[0].text.contains('5'));
        assert!(suggestions[0].text.contains('2'));
    }

    #[test]
    fn test_leadership_suggestion_alongside_years_gap() {
        let mut experience = experience_analysis(60);
        experience.required_years = Some(5);
        experience.actual_years = 1;
        experience.job_mentions_leadership = true;
        let suggestions = generate(
            &keyword_analysis(90),
            &[],
            &experience,
            &skills_analysis(90, vec![]),
            &formatting_analysis(100),
            85,
        );
        assert_eq!(suggestions.len(), 2);
        // Stable sort puts the High leadership suggestion first
        assert_eq!(suggestions[0].priority, Priority::High);
        assert!(suggestions[0].text.contains("leadership"));
        assert_eq!(suggestions[1].priority, Priority::Medium);
    }

    #[test]
    fn test_formatting_phone_and_summary_suggestions() {
        let mut formatting = formatting_analysis(75);
        formatting.missing_phone = true;
        formatting.weak_summary = true;
        let suggestions = generate(
            &keyword_analysis(90),
            &[],
            &experience_analysis(90),
            &skills_analysis(90, vec![]),
            &formatting,
            85,
        );
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions
            .iter()
            .any(|s| s.priority == Priority::High && s.text.contains("summary")));
        assert!(suggestions
            .iter()
            .any(|s| s.priority == Priority::Medium && s.text.contains("phone")));
    }

    #[test]
    fn test_overall_below_seventy_adds_general_suggestion() {
        let suggestions = generate(
            &keyword_analysis(90),
            &[],
            &experience_analysis(90),
            &skills_analysis(90, vec![]),
            &formatting_analysis(100),
            65,
        );
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].category, SuggestionCategory::General);
        assert_eq!(suggestions[0].priority, Priority::High);
    }

    #[test]
    fn test_priority_sort_is_stable_across_rules() {
        let mut experience = experience_analysis(60);
        experience.required_years = Some(8);
        experience.actual_years = 2;
        let mut formatting = formatting_analysis(90);
        formatting.missing_phone = true;
        let suggestions = generate(
            &keyword_analysis(40),
            &["docker".to_string()],
            &experience,
            &skills_analysis(50, vec!["kubernetes".to_string()]),
            &formatting,
            55,
        );
        // High: keywords, skills, general. Medium: experience gap, phone.
        let priorities: Vec<Priority> = suggestions.iter().map(|s| s.priority).collect();
        assert_eq!(
            priorities,
            vec![
                Priority::High,
                Priority::High,
                Priority::High,
                Priority::Medium,
                Priority::Medium
            ]
        );
        assert_eq!(suggestions[0].category, SuggestionCategory::Keywords);
        assert_eq!(suggestions[1].category, SuggestionCategory::Skills);
        assert_eq!(suggestions[2].category, SuggestionCategory::General);
        assert_eq!(suggestions[3].category, SuggestionCategory::Experience);
        assert_eq!(suggestions[4].category, SuggestionCategory::Formatting);
    }
}
