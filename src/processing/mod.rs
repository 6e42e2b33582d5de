//! Text processing and scoring pipeline

pub mod engine;
pub mod keywords;
pub mod projector;
pub mod scoring;
pub mod similarity;
pub mod suggestions;
pub mod text;
