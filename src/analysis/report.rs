//! Analysis value objects
//!
//! Everything here is a per-request value, recomputed on every call and
//! never persisted by this subsystem. Callers may store an `AnalysisResult`
//! as a denormalized snapshot, but that is their concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller-supplied analysis request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub job_description: Option<String>,
    pub job_title: Option<String>,
}

impl AnalysisInput {
    pub fn new(
        resume_text: String,
        job_description: Option<String>,
        job_title: Option<String>,
    ) -> Self {
        Self {
            resume_text,
            job_description,
            job_title,
        }
    }

    pub fn from_text(resume_text: String) -> Self {
        Self::new(resume_text, None, None)
    }
}

/// Presence flags for the five canonical resume sections.
/// Always carries exactly these five keys; absent text yields all-false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub contact_info: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
}

impl SectionPresence {
    pub fn found_count(&self) -> usize {
        [
            self.contact_info,
            self.summary,
            self.experience,
            self.education,
            self.skills,
        ]
        .iter()
        .filter(|found| **found)
        .count()
    }
}

/// Grade band derived from the composite score. Bands are non-overlapping
/// and evaluated high-to-low: 80 / 60 / 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Grade::Excellent
        } else if score >= 60 {
            Grade::Good
        } else if score >= 40 {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    /// CSS badge class for the web layer.
    pub fn css_class(&self) -> &'static str {
        match self {
            Grade::Excellent => "score-excellent",
            Grade::Good => "score-good",
            Grade::Fair => "score-fair",
            Grade::Poor => "score-poor",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Excellent => write!(f, "Excellent"),
            Grade::Good => write!(f, "Good"),
            Grade::Fair => write!(f, "Fair"),
            Grade::Poor => write!(f, "Poor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Important,
    Helpful,
}

impl Severity {
    /// Sort rank: critical before important before helpful.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Important => 1,
            Severity::Helpful => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub severity: Severity,
    pub message: String,
}

impl Suggestion {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Set-intersection of resume and job keyword rankings, both capped to the
/// first ten entries of the job ranking and kept in job rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordOverlap {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// The quick-check engine output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub grade: Grade,
    pub grade_class: String,
    pub sections: SectionPresence,
    pub action_verbs: Vec<String>,
    pub metrics: Vec<String>,
    pub keyword_overlap: KeywordOverlap,
    /// Job-title category matches: category name to curated keywords found
    /// in the resume. Empty when no job title was supplied.
    pub keywords: BTreeMap<String, Vec<String>>,
    pub suggestions: Vec<Suggestion>,
    pub generated_at: DateTime<Utc>,
}

/// Structured stored resume record, the deep-analysis input. Text fields
/// only; an empty string means the field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: String,
}

impl ResumeRecord {
    /// Flatten the record into one text block for the text-based checks.
    pub fn combined_text(&self) -> String {
        [
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.summary.as_str(),
            self.experience.as_str(),
            self.education.as_str(),
            self.skills.as_str(),
        ]
        .join("\n")
    }
}
