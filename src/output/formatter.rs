//! Console and JSON rendering of analysis results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::analysis::{AnalysisResult, Priority};
use colored::Colorize;
use std::fmt::Write as _;

pub struct OutputFormatter {
    color: bool,
    detailed: bool,
}

impl OutputFormatter {
    pub fn new(color: bool, detailed: bool) -> Self {
        // colored honors NO_COLOR itself; this switch covers config/CLI intent
        if !color {
            colored::control::set_override(false);
        }
        Self { color, detailed }
    }

    pub fn format(&self, result: &AnalysisResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => Ok(self.format_console(result)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        }
    }

    fn format_console(&self, result: &AnalysisResult) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", "Resume Compatibility Analysis".bold());
        let _ = writeln!(out, "{}", "=============================".bold());
        let _ = writeln!(
            out,
            "\nOverall score: {}",
            self.paint_score(result.overall).bold()
        );

        let _ = writeln!(out, "\n{}", "Breakdown".bold());
        let _ = writeln!(
            out,
            "  Keywords   (35%): {}",
            self.paint_score(result.breakdown.keywords)
        );
        let _ = writeln!(
            out,
            "  Experience (25%): {}",
            self.paint_score(result.breakdown.experience)
        );
        let _ = writeln!(
            out,
            "  Skills     (25%): {}",
            self.paint_score(result.breakdown.skills)
        );
        let _ = writeln!(
            out,
            "  Formatting (15%): {}",
            self.paint_score(result.breakdown.formatting)
        );

        if !result.suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", "Suggestions".bold());
            for suggestion in &result.suggestions {
                let tag = match suggestion.priority {
                    Priority::High => "[high]".red(),
                    Priority::Medium => "[medium]".yellow(),
                    Priority::Low => "[low]".green(),
                };
                let _ = writeln!(out, "  {} {}", tag, suggestion.text);
            }
        }

        if !result.missing_keywords.is_empty() {
            let _ = writeln!(out, "\n{}", "Missing keywords".bold());
            let _ = writeln!(out, "  {}", result.missing_keywords.join(", "));
        }

        if self.detailed && !result.matched_keywords.is_empty() {
            let _ = writeln!(out, "\n{}", "Matched keywords".bold());
            let _ = writeln!(out, "  {}", result.matched_keywords.join(", "));
        }

        out
    }

    fn paint_score(&self, score: u8) -> colored::ColoredString {
        let text = format!("{}/100", score);
        if !self.color {
            return text.normal();
        }
        match score {
            80..=100 => text.green(),
            60..=79 => text.yellow(),
            _ => text.red(),
        }
    }
}
