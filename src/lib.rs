//! ATS engine library: deterministic resume/job-description compatibility scoring

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsEngineError, Result};
pub use model::analysis::AnalysisResult;
pub use model::resume::ResumeProfile;
pub use processing::engine::{analyze, analyze_at, AnalysisEngine};
