//! Quality-signal extraction: action verbs and quantification markers

use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed action-verb vocabulary. Output preserves this order.
pub const ACTION_VERBS: [&str; 17] = [
    "developed",
    "implemented",
    "managed",
    "created",
    "designed",
    "built",
    "led",
    "coordinated",
    "analyzed",
    "improved",
    "increased",
    "decreased",
    "maintained",
    "established",
    "organized",
    "planned",
    "executed",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSignals {
    pub action_verbs: Vec<String>,
    pub metrics: Vec<String>,
}

pub struct SignalExtractor {
    verb_matcher: AhoCorasick,
    metric_regex: Regex,
}

impl SignalExtractor {
    pub fn new() -> Self {
        let verb_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(ACTION_VERBS)
            .expect("action verb vocabulary is a valid pattern set");

        let metric_regex = Regex::new(r"\d+\s*(?:%|percent|increase|decrease|million|thousand)")
            .expect("metric pattern is a valid regex");

        Self {
            verb_matcher,
            metric_regex,
        }
    }

    /// Extract both signals in one pass over the text.
    ///
    /// Verbs are collapsed to one entry per vocabulary word, in vocabulary
    /// order. Metric matches are NOT collapsed: quantification density is
    /// the signal, so every occurrence counts.
    pub fn extract(&self, text: &str) -> ExtractedSignals {
        ExtractedSignals {
            action_verbs: self.extract_action_verbs(text),
            metrics: self.extract_metrics(text),
        }
    }

    fn extract_action_verbs(&self, text: &str) -> Vec<String> {
        let mut found = [false; ACTION_VERBS.len()];

        // Overlapping scan so a verb nested inside another match still
        // registers; presence is all that matters here.
        for mat in self.verb_matcher.find_overlapping_iter(text) {
            found[mat.pattern().as_usize()] = true;
        }

        ACTION_VERBS
            .iter()
            .zip(found.iter())
            .filter(|(_, seen)| **seen)
            .map(|(verb, _)| verb.to_string())
            .collect()
    }

    fn extract_metrics(&self, text: &str) -> Vec<String> {
        self.metric_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}
