//! Analysis engine coordinating the four pipeline stages
//!
//! The engine is pure and synchronous, with no interior mutability or IO.
//! One instance can serve concurrent requests without coordination.

use crate::analysis::deep::{DeepAnalysisReport, DeepAnalyzer};
use crate::analysis::keywords::{self, KeywordExtractor};
use crate::analysis::report::{AnalysisInput, AnalysisResult, KeywordOverlap, ResumeRecord};
use crate::analysis::scorer;
use crate::analysis::sections;
use crate::analysis::signals::SignalExtractor;
use std::collections::BTreeMap;

pub struct AnalysisEngine {
    signal_extractor: SignalExtractor,
    keyword_extractor: KeywordExtractor,
    deep_analyzer: DeepAnalyzer,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            signal_extractor: SignalExtractor::new(),
            keyword_extractor: KeywordExtractor::new(),
            deep_analyzer: DeepAnalyzer::new(),
        }
    }

    /// Quick check: sections, signals, title-category keywords, composite
    /// score and suggestions. Never fails; degenerate text yields a
    /// well-formed low-scoring result.
    pub fn quick_check(&self, input: &AnalysisInput) -> AnalysisResult {
        let section_presence = sections::detect_sections(&input.resume_text);
        let signals = self.signal_extractor.extract(&input.resume_text);

        let categories: BTreeMap<String, Vec<String>> = match &input.job_title {
            Some(title) => keywords::category_matches(title, &input.resume_text),
            None => BTreeMap::new(),
        };

        let overlap = match &input.job_description {
            Some(description) => {
                let resume_kw = self.keyword_extractor.extract(&input.resume_text);
                let job_kw = self.keyword_extractor.extract(description);
                keywords::match_keywords(&resume_kw, &job_kw)
            }
            None => KeywordOverlap::default(),
        };

        scorer::aggregate(
            section_presence,
            signals,
            categories,
            overlap,
            input.job_title.is_some(),
        )
    }

    /// Deep ATS analysis over a stored record. The computation itself is
    /// total; if it ever panics the caller still gets the placeholder
    /// report instead of a fault.
    pub fn deep_analyze(
        &self,
        record: &ResumeRecord,
        job_description: Option<&str>,
    ) -> DeepAnalysisReport {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.deep_analyzer.analyze(
                record,
                job_description,
                &self.signal_extractor,
                &self.keyword_extractor,
            )
        }));

        match outcome {
            Ok(report) => report,
            Err(_) => {
                log::warn!("deep analysis failed unexpectedly, returning fallback report");
                DeepAnalysisReport::fallback()
            }
        }
    }

    /// Keyword extraction exposed for callers that rank text on its own.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.keyword_extractor.extract(text)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::Grade;

    #[test]
    fn test_empty_resume_scores_poor() {
        let engine = AnalysisEngine::new();
        let result = engine.quick_check(&AnalysisInput::from_text(String::new()));

        assert_eq!(result.sections.found_count(), 0);
        assert!(result.action_verbs.is_empty());
        assert!(result.metrics.is_empty());
        assert!(result.score <= 20);
        assert_eq!(result.grade, Grade::Poor);
    }

    #[test]
    fn test_complete_resume_scores_good_or_better() {
        let engine = AnalysisEngine::new();
        let text = "Summary: seasoned backend engineer.\n\
                    Email: x@y.com, Phone: 555-1234\n\
                    Experience: developed and led a team, increased revenue by 30%\n\
                    Education: BS Computer Science\n\
                    Skills: python, sql";
        let result = engine.quick_check(&AnalysisInput::from_text(text.to_string()));

        assert_eq!(result.sections.found_count(), 5);
        assert!(result.action_verbs.contains(&"developed".to_string()));
        assert!(result.action_verbs.contains(&"led".to_string()));
        assert_eq!(result.metrics, vec!["30%"]);
        assert!(result.grade >= Grade::Good);
    }

    #[test]
    fn test_job_title_category_matching() {
        let engine = AnalysisEngine::new();
        let input = AnalysisInput::new(
            "Skills: python, git".to_string(),
            None,
            Some("Senior Software Engineer".to_string()),
        );
        let result = engine.quick_check(&input);

        assert!(result.keywords.contains_key("software"));
        assert_eq!(
            result.keywords["software"],
            vec!["python".to_string(), "git".to_string()]
        );
        assert!(!result.keywords.contains_key("marketing"));
    }

    #[test]
    fn test_quick_check_reports_description_overlap() {
        let engine = AnalysisEngine::new();
        let input = AnalysisInput::new(
            "Experienced rust developer, sql and kubernetes daily".to_string(),
            Some("Looking for rust engineer with kubernetes and helm".to_string()),
            None,
        );
        let result = engine.quick_check(&input);

        assert!(result.keyword_overlap.matched.contains(&"rust".to_string()));
        assert!(result.keyword_overlap.missing.contains(&"helm".to_string()));
        assert!(result
            .keyword_overlap
            .matched
            .iter()
            .all(|k| !result.keyword_overlap.missing.contains(k)));
    }

    #[test]
    fn test_quick_check_deterministic() {
        let engine = AnalysisEngine::new();
        let input = AnalysisInput::new(
            "Developed things, increased numbers by 10%".to_string(),
            Some("increase numbers".to_string()),
            Some("software developer".to_string()),
        );
        let a = engine.quick_check(&input);
        let b = engine.quick_check(&input);

        assert_eq!(a.score, b.score);
        assert_eq!(a.sections, b.sections);
        assert_eq!(a.action_verbs, b.action_verbs);
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.keyword_overlap, b.keyword_overlap);
        assert_eq!(a.keywords, b.keywords);
    }

    #[test]
    fn test_deep_analyze_always_returns_report() {
        let engine = AnalysisEngine::new();
        let report = engine.deep_analyze(&ResumeRecord::default(), None);
        assert!(report.overall_score <= 100);
        assert!(report.recommendations.len() <= 5);
    }
}
