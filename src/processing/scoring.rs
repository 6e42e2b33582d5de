//! The four sub-scores and their weighted aggregation

use crate::model::analysis::ScoreBreakdown;
use crate::model::resume::{present, Experience, ResumeProfile};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::similarity::similar;
use aho_corasick::AhoCorasick;
use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Fixed aggregation weights, summing to 1.0
pub const KEYWORD_WEIGHT: f64 = 0.35;
pub const EXPERIENCE_WEIGHT: f64 = 0.25;
pub const SKILLS_WEIGHT: f64 = 0.25;
pub const FORMATTING_WEIGHT: f64 = 0.15;

/// `overall = round(0.35·keywords + 0.25·experience + 0.25·skills + 0.15·formatting)`
///
/// The single place the overall score is computed, so breakdown and overall
/// can never disagree.
pub fn aggregate_overall(breakdown: &ScoreBreakdown) -> u8 {
    let overall = KEYWORD_WEIGHT * f64::from(breakdown.keywords)
        + EXPERIENCE_WEIGHT * f64::from(breakdown.experience)
        + SKILLS_WEIGHT * f64::from(breakdown.skills)
        + FORMATTING_WEIGHT * f64::from(breakdown.formatting);
    overall.round().clamp(0.0, 100.0) as u8
}

fn ratio_score(matched: f64, total: f64) -> u8 {
    (100.0 * matched / total.max(1.0)).round().clamp(0.0, 100.0) as u8
}

// ---------------------------------------------------------------------------
// Keyword sub-score

#[derive(Debug, Clone)]
pub struct KeywordAnalysis {
    pub score: u8,
    /// Job keywords with a similar resume keyword, extraction order
    pub matched: Vec<String>,
    /// Job keywords with no similar resume keyword, extraction order
    pub unmatched: Vec<String>,
}

/// Importance-weighted coverage of job keywords by resume keywords
pub fn score_keywords(
    extractor: &KeywordExtractor,
    job_keywords: &[String],
    resume_keywords: &[String],
) -> KeywordAnalysis {
    let mut total = 0u32;
    let mut matched_sum = 0u32;
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for keyword in job_keywords {
        let weight = extractor.importance(keyword);
        total += weight;
        if resume_keywords.iter().any(|r| similar(keyword, r)) {
            matched_sum += weight;
            matched.push(keyword.clone());
        } else {
            unmatched.push(keyword.clone());
        }
    }

    KeywordAnalysis {
        score: ratio_score(f64::from(matched_sum), f64::from(total)),
        matched,
        unmatched,
    }
}

// ---------------------------------------------------------------------------
// Experience sub-score

const SENIOR_TERMS: [&str; 4] = ["senior", "lead", "principal", "architect"];
const MID_TERMS: [&str; 2] = ["mid-level", "intermediate"];
const JUNIOR_TERMS: [&str; 3] = ["junior", "entry-level", "associate"];

const LEADERSHIP_EVIDENCE: [&str; 4] = ["lead", "leadership", "managed", "mentored"];
const ARCHITECTURE_EVIDENCE: [&str; 3] = ["architect", "design", "scalable"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeniorityTier {
    Senior,
    Mid,
    Junior,
}

#[derive(Debug, Clone)]
pub struct ExperienceAnalysis {
    pub score: u8,
    /// Years of experience the posting asks for, if stated
    pub required_years: Option<u32>,
    /// Whole years spanned by the candidate's work history
    pub actual_years: u32,
    pub job_mentions_leadership: bool,
}

/// Deduction-based experience scorer
pub struct ExperienceScorer {
    required_years_regex: Regex,
}

impl Default for ExperienceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceScorer {
    pub fn new() -> Self {
        let required_years_regex =
            Regex::new(r"(?i)\b(\d+)\s*\+?\s*(?:years?|yrs?)\b[^.\n]*?\bexperience\b")
                .expect("Invalid required-years regex");
        Self {
            required_years_regex,
        }
    }

    /// Score work history against the posting, starting at 100 and deducting
    pub fn score(
        &self,
        job_description: &str,
        resume_text: &str,
        experiences: &[Experience],
        today: NaiveDate,
    ) -> ExperienceAnalysis {
        let job_lower = job_description.to_lowercase();
        let resume_lower = resume_text.to_lowercase();

        let required_years = self.required_years(&job_lower);
        let actual_years = total_experience_years(experiences, today);
        let job_mentions_leadership = job_lower.contains("leadership");

        let mut score: i32 = 100;

        if experiences.is_empty() {
            score -= 20;
        }

        if let Some(required) = required_years {
            if actual_years < required {
                score -= ((required - actual_years) * 10).min(40) as i32;
            }
        }

        // Only the senior tier is penalized on mismatch; mid/junior postings
        // carry no deduction (source behavior, flagged for product review).
        if detect_tier(&job_lower) == Some(SeniorityTier::Senior)
            && !SENIOR_TERMS.iter().any(|t| resume_lower.contains(t))
        {
            score -= 20;
        }

        if job_lower.contains("microservices") && !resume_lower.contains("microservices") {
            score -= 10;
        }
        if job_mentions_leadership
            && !LEADERSHIP_EVIDENCE.iter().any(|t| resume_lower.contains(t))
        {
            score -= 10;
        }
        if job_lower.contains("architecture")
            && !ARCHITECTURE_EVIDENCE.iter().any(|t| resume_lower.contains(t))
        {
            score -= 10;
        }

        ExperienceAnalysis {
            score: score.clamp(0, 100) as u8,
            required_years,
            actual_years,
            job_mentions_leadership,
        }
    }

    fn required_years(&self, job_lower: &str) -> Option<u32> {
        self.required_years_regex
            .captures(job_lower)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

fn detect_tier(job_lower: &str) -> Option<SeniorityTier> {
    if SENIOR_TERMS.iter().any(|t| job_lower.contains(t)) {
        Some(SeniorityTier::Senior)
    } else if MID_TERMS.iter().any(|t| job_lower.contains(t)) {
        Some(SeniorityTier::Mid)
    } else if JUNIOR_TERMS.iter().any(|t| job_lower.contains(t)) {
        Some(SeniorityTier::Junior)
    } else {
        None
    }
}

/// Whole years between the earliest start date and the latest end date
/// ("now" when any entry is current); entries without parseable dates are
/// skipped rather than failing
fn total_experience_years(experiences: &[Experience], today: NaiveDate) -> u32 {
    let Some(earliest) = experiences.iter().filter_map(Experience::start).min() else {
        return 0;
    };
    let latest = if experiences.iter().any(|e| e.current) {
        today
    } else {
        match experiences.iter().filter_map(|e| e.end_or(today)).max() {
            Some(date) => date,
            None => return 0,
        }
    };
    whole_years(earliest, latest)
}

fn whole_years(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

// ---------------------------------------------------------------------------
// Skills sub-score

#[derive(Debug, Clone)]
pub struct SkillsAnalysis {
    pub score: u8,
    /// Catalogue skills named by the posting, first-appearance order
    pub job_skills: Vec<String>,
    /// Job skills with no similar resume skill
    pub missing: Vec<String>,
}

/// Detects a fixed catalogue of skill terms and scores resume coverage
pub struct SkillsMatcher {
    automaton: AhoCorasick,
    catalogue: Vec<&'static str>,
}

impl Default for SkillsMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillsMatcher {
    pub fn new() -> Self {
        let catalogue = vec![
            // Languages
            "javascript", "typescript", "python", "java", "c++", "ruby", "php",
            // Frameworks
            "react", "angular", "vue", "node.js", "express", "django", "spring",
            // Cloud and infrastructure
            "aws", "azure", "docker", "kubernetes", "terraform",
            // Process
            "agile", "scrum", "devops", "ci/cd", "microservices", "rest", "graphql",
            // Soft skills
            "leadership", "communication", "teamwork", "problem solving",
        ];
        // Longest match wins so "javascript" beats "java" at the same offset
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&catalogue)
            .expect("Invalid skills catalogue patterns");
        Self {
            automaton,
            catalogue,
        }
    }

    /// Catalogue skills present in the text, word-boundary delimited,
    /// deduplicated in order of first appearance
    pub fn skills_in(&self, text: &str) -> Vec<String> {
        let mut found = Vec::new();
        for mat in self.automaton.find_iter(text) {
            if !word_bounded(text, mat.start(), mat.end()) {
                continue;
            }
            let skill = self.catalogue[mat.pattern().as_usize()];
            if !found.iter().any(|f| f == skill) {
                found.push(skill.to_string());
            }
        }
        found
    }

    /// Coverage of the posting's skills by the resume's declared skills
    pub fn score(&self, job_description: &str, resume: &ResumeProfile) -> SkillsAnalysis {
        let job_skills = self.skills_in(job_description);
        let resume_skills = resume.skills.all_lowercase();

        let mut matched = 0usize;
        let mut missing = Vec::new();
        for skill in &job_skills {
            if resume_skills.iter().any(|r| similar(skill, r)) {
                matched += 1;
            } else {
                missing.push(skill.clone());
            }
        }

        SkillsAnalysis {
            score: ratio_score(matched as f64, job_skills.len() as f64),
            job_skills,
            missing,
        }
    }
}

fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_alphanumeric()) && !after.is_some_and(|c| c.is_alphanumeric())
}

// ---------------------------------------------------------------------------
// Formatting sub-score

#[derive(Debug, Clone)]
pub struct FormattingAnalysis {
    pub score: u8,
    /// Human-readable completeness issues, informational only
    pub issues: Vec<String>,
    pub missing_phone: bool,
    pub weak_summary: bool,
}

const MIN_SUMMARY_CHARS: usize = 50;

/// Deduction-based structural completeness check
pub fn score_formatting(resume: &ResumeProfile) -> FormattingAnalysis {
    let mut score: i32 = 100;
    let mut issues = Vec::new();

    if !present(&resume.personal_info.email) {
        score -= 10;
        issues.push("Missing email address".to_string());
    }
    let missing_phone = !present(&resume.personal_info.phone);
    if missing_phone {
        score -= 10;
        issues.push("Missing phone number".to_string());
    }
    if !present(&resume.personal_info.location) {
        score -= 5;
        issues.push("Missing location".to_string());
    }

    let weak_summary = resume
        .summary
        .as_deref()
        .map(str::trim)
        .map_or(true, |s| s.chars().count() < MIN_SUMMARY_CHARS);
    if weak_summary {
        score -= 15;
        issues.push(format!(
            "Summary is missing or shorter than {} characters",
            MIN_SUMMARY_CHARS
        ));
    }

    if resume.work_experience.is_empty() {
        score -= 20;
        issues.push("No work experience listed".to_string());
    } else {
        let undescribed = resume
            .work_experience
            .iter()
            .filter(|e| !e.has_description())
            .count();
        if undescribed > 0 {
            score -= 5 * undescribed as i32;
            issues.push(format!(
                "{} work experience entries have no description",
                undescribed
            ));
        }
    }

    if resume.skills.is_empty() {
        score -= 15;
        issues.push("No skills listed".to_string());
    }
    if resume.education.is_empty() {
        score -= 10;
        issues.push("No education listed".to_string());
    }

    FormattingAnalysis {
        score: score.clamp(0, 100) as u8,
        issues,
        missing_phone,
        weak_summary,
    }
}
