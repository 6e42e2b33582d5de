//! Analysis engine coordinating extraction, scoring and suggestions
//!
//! The engine is purely computational: no I/O, no shared mutable state, and
//! identical inputs always produce identical output. The only ambient input
//! is "today", used for `current` work-experience spans, and it can be
//! injected via [`AnalysisEngine::analyze_at`] so tests stay deterministic.

use crate::error::{AtsEngineError, Result};
use crate::model::analysis::{AnalysisResult, ScoreBreakdown};
use crate::model::resume::ResumeProfile;
use crate::processing::keywords::{KeywordExtractor, Vocabulary};
use crate::processing::projector::project;
use crate::processing::scoring::{
    aggregate_overall, score_formatting, score_keywords, ExperienceScorer, SkillsMatcher,
};
use crate::processing::suggestions;
use chrono::{NaiveDate, Utc};
use log::debug;

const MAX_MISSING_KEYWORDS: usize = 10;

pub struct AnalysisEngine {
    extractor: KeywordExtractor,
    experience_scorer: ExperienceScorer,
    skills_matcher: SkillsMatcher,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            extractor: KeywordExtractor::new(Vocabulary::default()),
            experience_scorer: ExperienceScorer::new(),
            skills_matcher: SkillsMatcher::new(),
        }
    }

    /// Analyze a resume against a job description using today's date for
    /// in-progress experience spans
    pub fn analyze(&self, resume: &ResumeProfile, job_description: &str) -> Result<AnalysisResult> {
        self.analyze_at(resume, job_description, Utc::now().date_naive())
    }

    /// Analyze with an injected "today", for deterministic tests
    pub fn analyze_at(
        &self,
        resume: &ResumeProfile,
        job_description: &str,
        today: NaiveDate,
    ) -> Result<AnalysisResult> {
        if job_description.trim().is_empty() {
            return Err(AtsEngineError::InvalidInput(
                "job description must be a non-empty string".to_string(),
            ));
        }

        let resume_text = project(resume);
        let job_keywords = self.extractor.extract(job_description);
        let resume_keywords = self.extractor.extract(&resume_text);
        debug!(
            "extracted {} job keywords, {} resume keywords",
            job_keywords.len(),
            resume_keywords.len()
        );

        let keywords = score_keywords(&self.extractor, &job_keywords, &resume_keywords);
        let experience = self.experience_scorer.score(
            job_description,
            &resume_text,
            &resume.work_experience,
            today,
        );
        let skills = self.skills_matcher.score(job_description, resume);
        let formatting = score_formatting(resume);

        let breakdown = ScoreBreakdown {
            keywords: keywords.score,
            experience: experience.score,
            skills: skills.score,
            formatting: formatting.score,
        };
        let overall = aggregate_overall(&breakdown);
        debug!(
            "scores: overall {} keywords {} experience {} skills {} formatting {}",
            overall, breakdown.keywords, breakdown.experience, breakdown.skills,
            breakdown.formatting
        );

        let missing_keywords: Vec<String> = keywords
            .unmatched
            .iter()
            .filter(|k| !self.extractor.is_generic_verb(k))
            .take(MAX_MISSING_KEYWORDS)
            .cloned()
            .collect();

        let suggestions = suggestions::generate(
            &keywords,
            &missing_keywords,
            &experience,
            &skills,
            &formatting,
            overall,
        );

        Ok(AnalysisResult {
            overall,
            breakdown,
            suggestions,
            matched_keywords: keywords.matched,
            missing_keywords,
        })
    }
}

/// Convenience wrapper constructing a fresh engine per call
pub fn analyze(resume: &ResumeProfile, job_description: &str) -> Result<AnalysisResult> {
    AnalysisEngine::new().analyze(resume, job_description)
}

/// Like [`analyze`] but with an injected "today"
pub fn analyze_at(
    resume: &ResumeProfile,
    job_description: &str,
    today: NaiveDate,
) -> Result<AnalysisResult> {
    AnalysisEngine::new().analyze_at(resume, job_description, today)
}
