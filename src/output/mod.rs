//! Output rendering for analysis results

pub mod formatter;
