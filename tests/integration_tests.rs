//! Integration tests for the resume analyzer

use resume_analyzer::analysis::engine::AnalysisEngine;
use resume_analyzer::analysis::report::{AnalysisInput, Grade, ResumeRecord};
use resume_analyzer::config::InputConfig;
use resume_analyzer::error::AnalyzerError;
use resume_analyzer::input::manager::InputManager;
use std::io::Write;
use std::path::Path;

fn default_limits() -> InputConfig {
    InputConfig {
        max_upload_bytes: 5 * 1024 * 1024,
        allowed_extensions: vec!["pdf".to_string(), "txt".to_string(), "md".to_string()],
    }
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new(default_limits());
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("Kubernetes"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new(default_limits());
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    // Markdown formatting is stripped
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new(default_limits());
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new(default_limits());
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(AnalyzerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new(default_limits());
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_size_cap_enforced_before_extraction() {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(&vec![b'a'; 64]).unwrap();

    let mut manager = InputManager::new(InputConfig {
        max_upload_bytes: 16,
        allowed_extensions: vec!["txt".to_string()],
    });

    let result = manager.extract_text(file.path()).await;
    assert!(matches!(result, Err(AnalyzerError::InputTooLarge(_))));
}

#[tokio::test]
async fn test_invalid_utf8_decoded_lossily() {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(b"Experience: developed \xff\xfe services")
        .unwrap();

    let mut manager = InputManager::new(default_limits());
    let text = manager.extract_text(file.path()).await.unwrap();

    // Invalid bytes are replaced, never a hard failure
    assert!(text.contains("Experience"));
    assert!(text.contains("services"));
}

#[tokio::test]
async fn test_quick_check_end_to_end() {
    let mut manager = InputManager::new(default_limits());
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new();
    let result = engine.quick_check(&AnalysisInput::from_text(resume_text));

    assert_eq!(result.sections.found_count(), 5);
    assert!(result.action_verbs.contains(&"developed".to_string()));
    assert!(result.action_verbs.contains(&"led".to_string()));
    assert!(result.metrics.len() >= 3);
    assert!(result.score <= 100);
    assert!(result.grade >= Grade::Good);
    assert!(result.suggestions.len() <= 5);
}

#[tokio::test]
async fn test_quick_check_with_job_title_category() {
    let mut manager = InputManager::new(default_limits());
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new();
    let input = AnalysisInput::new(resume_text, None, Some("Senior Software Engineer".to_string()));
    let result = engine.quick_check(&input);

    let found = &result.keywords["software"];
    assert!(found.contains(&"python".to_string()));
    assert!(found.contains(&"git".to_string()));
    assert!(!result.keywords.contains_key("marketing"));
}

#[tokio::test]
async fn test_quick_check_with_job_description_overlap() {
    let mut manager = InputManager::new(default_limits());
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new();
    let input = AnalysisInput::new(resume_text, Some(job_text), None);
    let result = engine.quick_check(&input);

    let overlap = &result.keyword_overlap;
    assert!(overlap.matched.contains(&"software".to_string()));
    assert!(overlap.matched.contains(&"engineer".to_string()));
    assert!(overlap.matched.iter().all(|k| !overlap.missing.contains(k)));
    assert!(overlap.matched.len() + overlap.missing.len() <= 10);
}

#[tokio::test]
async fn test_deep_analysis_end_to_end() {
    let record_json = tokio::fs::read_to_string("tests/fixtures/sample_record.json")
        .await
        .unwrap();
    let record: ResumeRecord = serde_json::from_str(&record_json).unwrap();

    let mut manager = InputManager::new(default_limits());
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new();
    let report = engine.deep_analyze(&record, Some(&job_text));

    assert!(report.overall_score <= 100);
    assert_eq!(report.structure_analysis.score, 100);
    assert!(report.ats_optimization.checks.has_email_pattern);
    assert!(report.ats_optimization.checks.has_phone_pattern);
    assert!(report.recommendations.len() <= 5);
}

#[tokio::test]
async fn test_keyword_ranking_from_extracted_text() {
    let mut manager = InputManager::new(default_limits());
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new();
    let keywords = engine.extract_keywords(&resume_text);

    assert!(keywords.len() <= 20);
    assert!(keywords.contains(&"software".to_string()));
    assert!(keywords.contains(&"engineer".to_string()));
    assert!(!keywords.contains(&"with".to_string()));
    assert!(!keywords.contains(&"and".to_string()));
    // Ranking is stable for identical input
    assert_eq!(keywords, engine.extract_keywords(&resume_text));
}

#[tokio::test]
async fn test_deep_analysis_without_description_uses_neutral_default() {
    let record_json = tokio::fs::read_to_string("tests/fixtures/sample_record.json")
        .await
        .unwrap();
    let record: ResumeRecord = serde_json::from_str(&record_json).unwrap();

    let engine = AnalysisEngine::new();
    let report = engine.deep_analyze(&record, None);

    assert_eq!(report.keyword_analysis.score, 80);
    assert!(report.keyword_analysis.matched.is_empty());
    assert!(report.keyword_analysis.missing.is_empty());
}
