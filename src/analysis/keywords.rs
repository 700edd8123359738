//! Keyword extraction, overlap matching, and job-title category lookup

use crate::analysis::report::KeywordOverlap;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Ranked keyword list cap.
pub const MAX_KEYWORDS: usize = 20;

/// Overlap lists consider only the first ten job keywords.
pub const MAX_OVERLAP: usize = 10;

/// Neutral keyword component score (out of 100) when no job description is
/// supplied. Baseline-sensitive: changing it shifts every composite score.
pub const NEUTRAL_KEYWORD_SCORE: u8 = 80;

/// Fixed English stop-word list. Frozen for output compatibility.
const STOP_WORDS: [&str; 37] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "this", "that", "these", "those",
];

/// Curated keyword lists per job-title category. A category applies when its
/// name occurs as a substring of the lower-cased job title.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "software",
        &["python", "java", "javascript", "react", "node.js", "sql", "git"],
    ),
    (
        "marketing",
        &["seo", "analytics", "campaigns", "social media", "content", "branding"],
    ),
    (
        "sales",
        &["negotiation", "crm", "salesforce", "prospecting", "pipeline", "quota"],
    ),
    (
        "design",
        &["figma", "photoshop", "illustrator", "typography", "wireframes", "ux"],
    ),
    (
        "finance",
        &["excel", "forecasting", "budgeting", "accounting", "modeling", "audit"],
    ),
    (
        "management",
        &["leadership", "strategy", "budgeting", "hiring", "mentoring", "agile"],
    ),
];

pub struct KeywordExtractor {
    token_regex: Regex,
    stop_words: HashSet<&'static str>,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            token_regex: Regex::new(r"[a-zA-Z]{3,}").expect("token pattern is a valid regex"),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Extract the top-ranked keywords from free text.
    ///
    /// Tokens are alphabetic runs of length >= 3, lower-cased, stop-words
    /// dropped. Ranking is by descending frequency; ties keep first-occurrence
    /// order, which makes the output deterministic for identical input.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for mat in self.token_regex.find_iter(text) {
            let token = mat.as_str().to_lowercase();
            if self.stop_words.contains(token.as_str()) {
                continue;
            }
            match counts.get_mut(&token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.clone(), 1);
                    order.push(token);
                }
            }
        }

        // Stable sort over first-occurrence order breaks frequency ties
        order.sort_by(|a, b| counts[b].cmp(&counts[a]));
        order.truncate(MAX_KEYWORDS);
        order
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Intersect the job keyword ranking with the resume keyword set.
///
/// Membership only, not frequency-weighted. Both output lists are capped to
/// the first ten job keywords and keep job rank order.
pub fn match_keywords(resume_kw: &[String], job_kw: &[String]) -> KeywordOverlap {
    let resume_set: HashSet<&str> = resume_kw.iter().map(String::as_str).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for keyword in job_kw.iter().take(MAX_OVERLAP) {
        if resume_set.contains(keyword.as_str()) {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    KeywordOverlap { matched, missing }
}

/// Job-title category lookup: every category whose name is a substring of
/// the lower-cased title is checked, and the curated keywords contained in
/// the lower-cased resume text are recorded per category.
pub fn category_matches(job_title: &str, resume_text: &str) -> BTreeMap<String, Vec<String>> {
    let title = job_title.to_lowercase();
    let resume = resume_text.to_lowercase();

    let mut matches = BTreeMap::new();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if !title.contains(category) {
            continue;
        }
        let found: Vec<String> = keywords
            .iter()
            .filter(|keyword| resume.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect();
        matches.insert(category.to_string(), found);
    }
    matches
}
