//! Console and JSON formatters for analysis results

use crate::analysis::deep::DeepAnalysisReport;
use crate::analysis::report::{AnalysisResult, Grade, Severity};
use crate::error::{AnalyzerError, Result};
use colored::Colorize;
use serde_json::json;

/// Structured failure envelope for boundary errors. Callers never see a
/// bare fault; every failure serializes to this shape.
pub fn failure_envelope(error: &AnalyzerError) -> String {
    json!({
        "success": false,
        "error": error.to_string(),
    })
    .to_string()
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format_quick(&self, result: &AnalysisResult) -> Result<String> {
        self.serialize(result)
    }

    pub fn format_deep(&self, report: &DeepAnalysisReport) -> Result<String> {
        self.serialize(report)
    }

    fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let output = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(output)
    }
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    pub fn format_quick(&self, result: &AnalysisResult) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "Resume score: {} / 100  [{}]\n",
            self.paint_score(result.score),
            self.paint_grade(result.grade)
        ));

        out.push_str("\nSections\n");
        for (name, found) in [
            ("contact info", result.sections.contact_info),
            ("summary", result.sections.summary),
            ("experience", result.sections.experience),
            ("education", result.sections.education),
            ("skills", result.sections.skills),
        ] {
            out.push_str(&format!("  {} {}\n", self.tick(found), name));
        }

        out.push_str(&format!(
            "\nAction verbs ({}): {}\n",
            result.action_verbs.len(),
            result.action_verbs.join(", ")
        ));
        out.push_str(&format!(
            "Quantified results ({}): {}\n",
            result.metrics.len(),
            result.metrics.join(", ")
        ));

        if !result.keywords.is_empty() {
            out.push_str("\nCategory keywords\n");
            for (category, found) in &result.keywords {
                out.push_str(&format!("  {}: {}\n", category, found.join(", ")));
            }
        }

        if self.detailed
            && (!result.keyword_overlap.matched.is_empty()
                || !result.keyword_overlap.missing.is_empty())
        {
            out.push_str(&format!(
                "\nMatched job keywords: {}\n",
                result.keyword_overlap.matched.join(", ")
            ));
            out.push_str(&format!(
                "Missing job keywords: {}\n",
                result.keyword_overlap.missing.join(", ")
            ));
        }

        if !result.suggestions.is_empty() {
            out.push_str("\nSuggestions\n");
            for suggestion in &result.suggestions {
                out.push_str(&format!(
                    "  [{}] {}\n",
                    self.paint_severity(suggestion.severity),
                    suggestion.message
                ));
            }
        }

        Ok(out)
    }

    pub fn format_deep(&self, report: &DeepAnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "Overall ATS score: {} / 100\n\n",
            self.paint_score(report.overall_score)
        ));

        out.push_str(&format!(
            "  ATS optimization:  {:>3}\n",
            report.ats_optimization.score
        ));
        out.push_str(&format!(
            "  Content quality:   {:>3}\n",
            report.content_quality.score
        ));
        out.push_str(&format!(
            "  Keyword analysis:  {:>3}\n",
            report.keyword_analysis.score
        ));
        out.push_str(&format!(
            "  Structure:         {:>3}\n",
            report.structure_analysis.score
        ));

        if self.detailed {
            let checks = report.ats_optimization.checks;
            out.push_str("\nStructural checks\n");
            for (name, passed) in [
                ("email present", checks.has_email_pattern),
                ("phone present", checks.has_phone_pattern),
                ("named sections", checks.has_named_sections),
                ("no embedded images", checks.no_embedded_images),
                ("no tables", checks.no_tables),
            ] {
                out.push_str(&format!("  {} {}\n", self.tick(passed), name));
            }

            out.push_str(&format!(
                "\nWords: {}, sentences: {}, avg sentence length: {:.1}\n",
                report.content_quality.word_count,
                report.content_quality.sentence_count,
                report.content_quality.avg_sentence_length
            ));

            if !report.keyword_analysis.matched.is_empty() {
                out.push_str(&format!(
                    "Matched keywords: {}\n",
                    report.keyword_analysis.matched.join(", ")
                ));
            }
            if !report.keyword_analysis.missing.is_empty() {
                out.push_str(&format!(
                    "Missing keywords: {}\n",
                    report.keyword_analysis.missing.join(", ")
                ));
            }
            if !report.structure_analysis.incomplete_fields.is_empty() {
                out.push_str(&format!(
                    "Sparse fields: {}\n",
                    report.structure_analysis.incomplete_fields.join(", ")
                ));
            }
        }

        if !report.recommendations.is_empty() {
            out.push_str("\nRecommendations\n");
            for recommendation in &report.recommendations {
                out.push_str(&format!("  - {}\n", recommendation));
            }
        }

        Ok(out)
    }

    fn tick(&self, on: bool) -> String {
        if !self.use_colors {
            return if on { "[x]".to_string() } else { "[ ]".to_string() };
        }
        if on {
            "[x]".green().to_string()
        } else {
            "[ ]".red().to_string()
        }
    }

    fn paint_score(&self, score: u8) -> String {
        let text = score.to_string();
        if !self.use_colors {
            return text;
        }
        match Grade::from_score(score) {
            Grade::Excellent => text.green().bold().to_string(),
            Grade::Good => text.cyan().bold().to_string(),
            Grade::Fair => text.yellow().bold().to_string(),
            Grade::Poor => text.red().bold().to_string(),
        }
    }

    fn paint_grade(&self, grade: Grade) -> String {
        let text = grade.to_string();
        if !self.use_colors {
            return text;
        }
        match grade {
            Grade::Excellent => text.green().to_string(),
            Grade::Good => text.cyan().to_string(),
            Grade::Fair => text.yellow().to_string(),
            Grade::Poor => text.red().to_string(),
        }
    }

    fn paint_severity(&self, severity: Severity) -> String {
        let text = match severity {
            Severity::Critical => "critical",
            Severity::Important => "important",
            Severity::Helpful => "helpful",
        };
        if !self.use_colors {
            return text.to_string();
        }
        match severity {
            Severity::Critical => text.red().to_string(),
            Severity::Important => text.yellow().to_string(),
            Severity::Helpful => text.blue().to_string(),
        }
    }
}
