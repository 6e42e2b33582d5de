//! Data model: resume records in, analysis results out

pub mod analysis;
pub mod resume;
