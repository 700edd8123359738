//! Deep ATS analysis over a structured resume record
//!
//! Premium-tier scoring path. Four named sub-scores combined by fixed
//! weights; constants here are frozen for output compatibility and are
//! deliberately independent from the quick-check constants in `scorer.rs`.

use crate::analysis::keywords::{self, KeywordExtractor, NEUTRAL_KEYWORD_SCORE};
use crate::analysis::report::{KeywordOverlap, ResumeRecord};
use crate::analysis::sections;
use crate::analysis::signals::SignalExtractor;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const ATS_WEIGHT: f32 = 0.30;
const CONTENT_WEIGHT: f32 = 0.25;
const KEYWORD_WEIGHT: f32 = 0.25;
const STRUCTURE_WEIGHT: f32 = 0.20;

// Per-field completeness thresholds (characters)
const SUMMARY_MIN_CHARS: usize = 50;
const EXPERIENCE_MIN_CHARS: usize = 100;
const EDUCATION_MIN_CHARS: usize = 30;
const SKILLS_MIN_CHARS: usize = 20;
const STRUCTURE_FIELD_COUNT: usize = 7;

// Content-quality sub-score caps
const VERB_SUBSCORE_STEP: u32 = 10;
const VERB_SUBSCORE_CAP: u32 = 40;
const METRIC_SUBSCORE_STEP: u32 = 10;
const METRIC_SUBSCORE_CAP: u32 = 30;
const LENGTH_IDEAL_RANGE: std::ops::RangeInclusive<usize> = 150..=800;
const LENGTH_MIN_WORDS: usize = 50;
const LENGTH_FULL_POINTS: u32 = 30;
const LENGTH_PARTIAL_POINTS: u32 = 15;

const MAX_RECOMMENDATIONS: usize = 5;

/// Named structural checks. A fixed record rather than an open-ended map so
/// the sub-score stays statically checkable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsChecks {
    pub has_email_pattern: bool,
    pub has_phone_pattern: bool,
    pub has_named_sections: bool,
    pub no_embedded_images: bool,
    pub no_tables: bool,
}

impl AtsChecks {
    fn passed(&self) -> usize {
        [
            self.has_email_pattern,
            self.has_phone_pattern,
            self.has_named_sections,
            self.no_embedded_images,
            self.no_tables,
        ]
        .iter()
        .filter(|passed| **passed)
        .count()
    }

    const TOTAL: usize = 5;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsOptimization {
    pub score: u8,
    pub checks: AtsChecks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentQuality {
    pub score: u8,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f32,
    pub action_verb_count: usize,
    pub metric_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub score: u8,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub score: u8,
    pub complete_fields: Vec<String>,
    pub incomplete_fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepAnalysisReport {
    pub overall_score: u8,
    pub ats_optimization: AtsOptimization,
    pub content_quality: ContentQuality,
    pub keyword_analysis: KeywordAnalysis,
    pub structure_analysis: StructureAnalysis,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl DeepAnalysisReport {
    /// Placeholder result for when the analysis itself cannot complete.
    /// Callers always receive a structurally valid report.
    pub fn fallback() -> Self {
        Self {
            overall_score: 50,
            ats_optimization: AtsOptimization {
                score: 50,
                checks: AtsChecks::default(),
            },
            content_quality: ContentQuality {
                score: 50,
                word_count: 0,
                sentence_count: 0,
                avg_sentence_length: 0.0,
                action_verb_count: 0,
                metric_count: 0,
            },
            keyword_analysis: KeywordAnalysis {
                score: 50,
                matched: Vec::new(),
                missing: Vec::new(),
            },
            structure_analysis: StructureAnalysis {
                score: 50,
                complete_fields: Vec::new(),
                incomplete_fields: Vec::new(),
            },
            recommendations: vec![
                "Analysis could not be completed, showing baseline guidance".to_string(),
                "Check that contact details and standard section headings are present".to_string(),
                "Add measurable achievements to your experience entries".to_string(),
            ],
            generated_at: Utc::now(),
        }
    }
}

pub struct DeepAnalyzer {
    email_regex: Regex,
    phone_regex: Regex,
}

impl DeepAnalyzer {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("email pattern is a valid regex");
        let phone_regex =
            Regex::new(r"\b(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
                .expect("phone pattern is a valid regex");

        Self {
            email_regex,
            phone_regex,
        }
    }

    /// Run the four sub-analyses and combine them by the fixed weights.
    pub fn analyze(
        &self,
        record: &ResumeRecord,
        job_description: Option<&str>,
        signal_extractor: &SignalExtractor,
        keyword_extractor: &KeywordExtractor,
    ) -> DeepAnalysisReport {
        let text = record.combined_text();

        let ats_optimization = self.analyze_ats(&text);
        let content_quality = self.analyze_content(&text, signal_extractor);
        let keyword_analysis = self.analyze_keywords(&text, job_description, keyword_extractor);
        let structure_analysis = self.analyze_structure(record);

        let overall = ats_optimization.score as f32 * ATS_WEIGHT
            + content_quality.score as f32 * CONTENT_WEIGHT
            + keyword_analysis.score as f32 * KEYWORD_WEIGHT
            + structure_analysis.score as f32 * STRUCTURE_WEIGHT;
        let overall_score = (overall.round() as u32).min(100) as u8;

        let recommendations = generate_recommendations(
            overall_score,
            &ats_optimization,
            &content_quality,
            &keyword_analysis,
            &structure_analysis,
            job_description.is_some(),
        );

        DeepAnalysisReport {
            overall_score,
            ats_optimization,
            content_quality,
            keyword_analysis,
            structure_analysis,
            recommendations,
            generated_at: Utc::now(),
        }
    }

    fn analyze_ats(&self, text: &str) -> AtsOptimization {
        let lower = text.to_lowercase();
        let section_presence = sections::detect_sections(text);

        let checks = AtsChecks {
            has_email_pattern: self.email_regex.is_match(text),
            has_phone_pattern: self.phone_regex.is_match(text),
            has_named_sections: section_presence.found_count() >= 3,
            no_embedded_images: !lower.contains("[image]") && !lower.contains("<img"),
            no_tables: !lower.contains("<table") && !lower.contains("|---"),
        };

        let score = (checks.passed() * 100 / AtsChecks::TOTAL) as u8;
        AtsOptimization { score, checks }
    }

    fn analyze_content(&self, text: &str, signal_extractor: &SignalExtractor) -> ContentQuality {
        let word_count = text.unicode_words().count();
        let sentences: Vec<&str> = text
            .unicode_sentences()
            .filter(|s| !s.trim().is_empty())
            .collect();
        let sentence_count = sentences.len();
        let avg_sentence_length = if sentence_count == 0 {
            0.0
        } else {
            word_count as f32 / sentence_count as f32
        };

        let signals = signal_extractor.extract(text);
        let action_verb_count = signals.action_verbs.len();
        let metric_count = signals.metrics.len();

        let verb_subscore =
            (action_verb_count as u32 * VERB_SUBSCORE_STEP).min(VERB_SUBSCORE_CAP);
        let metric_subscore =
            (metric_count as u32 * METRIC_SUBSCORE_STEP).min(METRIC_SUBSCORE_CAP);
        let length_subscore = if LENGTH_IDEAL_RANGE.contains(&word_count) {
            LENGTH_FULL_POINTS
        } else if word_count >= LENGTH_MIN_WORDS {
            LENGTH_PARTIAL_POINTS
        } else {
            0
        };

        let score = (verb_subscore + metric_subscore + length_subscore).min(100) as u8;

        ContentQuality {
            score,
            word_count,
            sentence_count,
            avg_sentence_length,
            action_verb_count,
            metric_count,
        }
    }

    fn analyze_keywords(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
        keyword_extractor: &KeywordExtractor,
    ) -> KeywordAnalysis {
        let Some(description) = job_description else {
            // Neutral default when no description is supplied; the baseline
            // must match the quick-check path exactly.
            return KeywordAnalysis {
                score: NEUTRAL_KEYWORD_SCORE,
                matched: Vec::new(),
                missing: Vec::new(),
            };
        };

        let resume_kw = keyword_extractor.extract(resume_text);
        let job_kw = keyword_extractor.extract(description);
        let KeywordOverlap { matched, missing } = keywords::match_keywords(&resume_kw, &job_kw);

        let considered = matched.len() + missing.len();
        let score = if considered == 0 {
            NEUTRAL_KEYWORD_SCORE
        } else {
            ((matched.len() * 100) as f32 / considered as f32).round() as u8
        };

        KeywordAnalysis {
            score,
            matched,
            missing,
        }
    }

    fn analyze_structure(&self, record: &ResumeRecord) -> StructureAnalysis {
        let field_states = [
            ("full_name", !record.full_name.trim().is_empty()),
            ("email", !record.email.trim().is_empty()),
            ("phone", !record.phone.trim().is_empty()),
            ("summary", record.summary.chars().count() > SUMMARY_MIN_CHARS),
            (
                "experience",
                record.experience.chars().count() > EXPERIENCE_MIN_CHARS,
            ),
            (
                "education",
                record.education.chars().count() > EDUCATION_MIN_CHARS,
            ),
            ("skills", record.skills.chars().count() > SKILLS_MIN_CHARS),
        ];

        let mut complete_fields = Vec::new();
        let mut incomplete_fields = Vec::new();
        for (name, complete) in field_states {
            if complete {
                complete_fields.push(name.to_string());
            } else {
                incomplete_fields.push(name.to_string());
            }
        }

        let score = ((complete_fields.len() * 100) as f32 / STRUCTURE_FIELD_COUNT as f32).round()
            as u8;

        StructureAnalysis {
            score,
            complete_fields,
            incomplete_fields,
        }
    }
}

impl Default for DeepAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommendations keyed to the sub-score thresholds, capped at five.
fn generate_recommendations(
    overall_score: u8,
    ats: &AtsOptimization,
    content: &ContentQuality,
    keyword: &KeywordAnalysis,
    structure: &StructureAnalysis,
    has_job_description: bool,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if ats.score < 80 {
        recommendations
            .push("Add clear contact details and standard section headings".to_string());
    }
    if content.score < 60 {
        recommendations.push(
            "Strengthen bullet points with action verbs and measurable results".to_string(),
        );
    }
    if has_job_description && keyword.score < 50 {
        recommendations.push("Mirror more of the job description's key terms".to_string());
    }
    if structure.score < 70 {
        recommendations.push("Fill out sparse resume fields".to_string());
    }
    if overall_score < 40 {
        recommendations.push("Consider a full rewrite focused on the target role".to_string());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
