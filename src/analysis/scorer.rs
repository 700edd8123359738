//! Quick-check score aggregation and suggestion rules
//!
//! The deep ATS mode in `deep.rs` owns a separate weight set; the two paths
//! are intentionally not unified.

use crate::analysis::report::{
    AnalysisResult, Grade, KeywordOverlap, SectionPresence, Severity, Suggestion,
};
use crate::analysis::signals::ExtractedSignals;
use chrono::Utc;
use std::collections::BTreeMap;

/// Points per found section; five sections make the 40-point component.
const SECTION_POINTS: u32 = 8;
/// Points per distinct action verb, capped at 20.
const VERB_POINTS: u32 = 2;
const VERB_CAP: u32 = 20;
/// Points per metric occurrence, capped at 20.
const METRIC_POINTS: u32 = 2;
const METRIC_CAP: u32 = 20;
/// Points per category keyword hit, capped at 20.
const KEYWORD_POINTS: u32 = 2;
const KEYWORD_CAP: u32 = 20;
/// The 80/100 neutral keyword default folded onto the 20-point component
/// slot. Applied whenever no category matched the job title (or none was
/// supplied); this fixes the baseline for every composite score.
const NEUTRAL_KEYWORD_POINTS: u32 = 16;

const MAX_SUGGESTIONS: usize = 5;
const MIN_ACTION_VERBS: usize = 5;
const MIN_METRICS: usize = 3;

/// Combine the component signals into the quick-check result.
pub fn aggregate(
    sections: SectionPresence,
    signals: ExtractedSignals,
    categories: BTreeMap<String, Vec<String>>,
    overlap: KeywordOverlap,
    job_title_supplied: bool,
) -> AnalysisResult {
    let section_score = sections.found_count() as u32 * SECTION_POINTS;
    let verb_score = (signals.action_verbs.len() as u32 * VERB_POINTS).min(VERB_CAP);
    let metric_score = (signals.metrics.len() as u32 * METRIC_POINTS).min(METRIC_CAP);

    let category_hits: usize = categories.values().map(Vec::len).sum();
    let keyword_score = if categories.is_empty() {
        NEUTRAL_KEYWORD_POINTS
    } else {
        (category_hits as u32 * KEYWORD_POINTS).min(KEYWORD_CAP)
    };

    let score = (section_score + verb_score + metric_score + keyword_score).min(100) as u8;
    let grade = Grade::from_score(score);

    let suggestions = generate_suggestions(
        &sections,
        &signals,
        category_hits,
        job_title_supplied,
    );

    AnalysisResult {
        score,
        grade,
        grade_class: grade.css_class().to_string(),
        sections,
        action_verbs: signals.action_verbs,
        metrics: signals.metrics,
        keyword_overlap: overlap,
        keywords: categories,
        suggestions,
        generated_at: Utc::now(),
    }
}

/// Rule-based suggestions. Rules run in a fixed order and are independent;
/// the final list is ordered critical -> important -> helpful and capped at
/// five entries.
fn generate_suggestions(
    sections: &SectionPresence,
    signals: &ExtractedSignals,
    category_hits: usize,
    job_title_supplied: bool,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !sections.contact_info {
        suggestions.push(Suggestion::new(
            Severity::Critical,
            "Missing contact information",
        ));
    }
    if !sections.experience {
        suggestions.push(Suggestion::new(
            Severity::Critical,
            "Missing work experience section",
        ));
    }
    if !sections.education {
        suggestions.push(Suggestion::new(
            Severity::Important,
            "Missing education section",
        ));
    }
    if signals.action_verbs.len() < MIN_ACTION_VERBS {
        suggestions.push(Suggestion::new(
            Severity::Important,
            format!(
                "Only {} action verbs found, aim for at least {}",
                signals.action_verbs.len(),
                MIN_ACTION_VERBS
            ),
        ));
    }
    if signals.metrics.len() < MIN_METRICS {
        suggestions.push(Suggestion::new(
            Severity::Helpful,
            "Add more quantifiable achievements",
        ));
    }
    if job_title_supplied && category_hits == 0 {
        suggestions.push(Suggestion::new(
            Severity::Important,
            "Add relevant keywords for your target job",
        ));
    }

    suggestions.sort_by_key(|s| s.severity.rank());
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::Grade;

    fn empty_signals() -> ExtractedSignals {
        ExtractedSignals::default()
    }

    #[test]
    fn test_empty_input_scores_neutral_baseline() {
        let result = aggregate(
            SectionPresence::default(),
            empty_signals(),
            BTreeMap::new(),
            KeywordOverlap::default(),
            false,
        );
        // Only the neutral keyword default contributes
        assert_eq!(result.score, 16);
        assert_eq!(result.grade, Grade::Poor);
        assert!(result.action_verbs.is_empty());
        assert!(result.metrics.is_empty());
    }

    #[test]
    fn test_component_caps() {
        let signals = ExtractedSignals {
            action_verbs: (0..15).map(|i| format!("verb{}", i)).collect(),
            metrics: (0..15).map(|_| "10%".to_string()).collect(),
        };
        let all = SectionPresence {
            contact_info: true,
            summary: true,
            experience: true,
            education: true,
            skills: true,
        };
        let result = aggregate(all, signals, BTreeMap::new(), KeywordOverlap::default(), false);
        // 40 sections + 20 verbs (capped) + 20 metrics (capped) + 16 neutral
        assert_eq!(result.score, 96);
        assert_eq!(result.grade, Grade::Excellent);
    }

    #[test]
    fn test_score_never_exceeds_100() {
        let signals = ExtractedSignals {
            action_verbs: (0..20).map(|i| format!("verb{}", i)).collect(),
            metrics: (0..20).map(|_| "10%".to_string()).collect(),
        };
        let all = SectionPresence {
            contact_info: true,
            summary: true,
            experience: true,
            education: true,
            skills: true,
        };
        let mut categories = BTreeMap::new();
        categories.insert(
            "software".to_string(),
            (0..12).map(|i| format!("kw{}", i)).collect(),
        );
        let result = aggregate(all, signals, categories, KeywordOverlap::default(), true);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_category_hits_replace_neutral_default() {
        let mut categories = BTreeMap::new();
        categories.insert(
            "software".to_string(),
            vec!["python".to_string(), "git".to_string()],
        );
        let result = aggregate(
            SectionPresence::default(),
            empty_signals(),
            categories,
            KeywordOverlap::default(),
            true,
        );
        // 2 hits * 2 points, no neutral default once a category matched
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_suggestions_ordered_and_capped() {
        let result = aggregate(
            SectionPresence::default(),
            empty_signals(),
            BTreeMap::new(),
            KeywordOverlap::default(),
            true,
        );
        // All six rules fire on a blank resume with a job title; cap holds
        assert_eq!(result.suggestions.len(), 5);
        let ranks: Vec<u8> = result.suggestions.iter().map(|s| s.severity.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
        assert_eq!(result.suggestions[0].severity, Severity::Critical);
    }

    #[test]
    fn test_verb_count_interpolated() {
        let signals = ExtractedSignals {
            action_verbs: vec!["led".to_string(), "built".to_string()],
            metrics: Vec::new(),
        };
        let result = aggregate(
            SectionPresence::default(),
            signals,
            BTreeMap::new(),
            KeywordOverlap::default(),
            false,
        );
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.message.contains("Only 2 action verbs")));
    }

    #[test]
    fn test_strong_resume_has_few_suggestions() {
        let all = SectionPresence {
            contact_info: true,
            summary: true,
            experience: true,
            education: true,
            skills: true,
        };
        let signals = ExtractedSignals {
            action_verbs: (0..6).map(|i| format!("verb{}", i)).collect(),
            metrics: (0..4).map(|_| "25%".to_string()).collect(),
        };
        let result = aggregate(all, signals, BTreeMap::new(), KeywordOverlap::default(), false);
        assert!(result.suggestions.is_empty());
    }
}
