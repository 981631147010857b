// Composition tests — verifying that pure functions chain together correctly.
//
// These tests exercise the data flow between modules:
//   Analyzer -> AnalysisResult -> Classifier -> EducationContent
// without any filesystem side effects (except report generation which
// writes to /tmp).

use hearsay::education::{classify, RiskLevel, Severity};
use hearsay::output::markdown::generate_report;
use hearsay::scoring::analyzer::{analyze, AnalysisResult};

// ============================================================
// Chain: Analyzer -> Classifier
// ============================================================

#[test]
fn chain_message_lands_in_high_tier() {
    let content = "URGENT! Forward this to 10 people immediately! Doctors discovered \
                   a secret cure that pharmaceutical companies don't want you to know about...";
    let result = analyze(content);
    let education = classify(&result);

    assert_eq!(result.risk_score, 7);
    assert_eq!(result.confidence, 90);
    assert_eq!(education.level, RiskLevel::High);
    assert_eq!(education.severity, Severity::Error);
    assert!(education.explanation.contains("very cautious"));
}

#[test]
fn sourced_reporting_lands_in_low_tier() {
    let content = "The election commission released turnout figures this morning. \
                   Source: https://example.com/turnout with district-level tables attached.";
    let result = analyze(content);
    let education = classify(&result);

    assert_eq!(result.risk_score, 0);
    assert_eq!(result.confidence, 20);
    assert!(result.flags.is_empty());
    assert_eq!(education.level, RiskLevel::Low);
    assert_eq!(education.severity, Severity::Success);
}

#[test]
fn two_phrase_message_lands_in_moderate_tier() {
    // Two phrase hits (4 pts) with a source mention and enough length to
    // keep every structural rule quiet.
    let content = "Breaking update on the miracle rescue operation, per an official source \
                   briefing held earlier today in the capital.";
    let result = analyze(content);
    let education = classify(&result);

    assert_eq!(result.risk_score, 4);
    assert_eq!(education.level, RiskLevel::Moderate);
    assert_eq!(education.severity, Severity::Warning);
}

#[test]
fn empty_input_still_classifies() {
    let result = analyze("");
    let education = classify(&result);

    assert_eq!(result.risk_score, 2);
    assert_eq!(result.confidence, 40);
    assert_eq!(education.level, RiskLevel::Low);
}

// ============================================================
// Flags accumulate past the score cap
// ============================================================

#[test]
fn flag_count_can_exceed_capped_score() {
    // Every table phrase plus the no-sources rule: 12 flags against a score
    // capped at 10. The cap applies to points, never to flags.
    let content = "forward this share immediately doctors don't want you to know \
                   secret cure government hiding they don't want you to see urgent \
                   breaking exclusive miracle banned";
    let result = analyze(content);

    assert_eq!(result.risk_score, 10);
    assert!(result.flags.len() > usize::from(result.risk_score));
    assert_eq!(result.flags.len(), 12);
}

// ============================================================
// Idempotence and determinism
// ============================================================

#[test]
fn analysis_is_idempotent_modulo_timestamp() {
    let content = "they don't want you to see this exclusive footage!!!!";
    let a = analyze(content);
    let b = analyze(content);

    assert_eq!(a.risk_score, b.risk_score);
    assert_eq!(a.confidence, b.confidence);
    assert_eq!(a.flags, b.flags);
}

#[test]
fn classification_depends_only_on_score() {
    let scored = analyze("banned miracle cure!!!! forward this");
    let synthetic = AnalysisResult {
        risk_score: scored.risk_score,
        confidence: 20,
        flags: vec![],
        analysis_time: "00:00:00".to_string(),
    };

    let from_scored = classify(&scored);
    let from_synthetic = classify(&synthetic);
    assert_eq!(from_scored.level, from_synthetic.level);
    assert_eq!(from_scored.explanation, from_synthetic.explanation);
}

// ============================================================
// JSON serialization
// ============================================================

#[test]
fn analysis_result_round_trips_through_json() {
    let result = analyze("breaking exclusive!!!! no links here whatsoever");
    let json = serde_json::to_string(&result).unwrap();
    let back: AnalysisResult = serde_json::from_str(&json).unwrap();

    assert_eq!(back.risk_score, result.risk_score);
    assert_eq!(back.confidence, result.confidence);
    assert_eq!(back.flags, result.flags);
    assert_eq!(back.analysis_time, result.analysis_time);
}

#[test]
fn education_content_serializes_with_lists() {
    let education = classify(&analyze(""));
    let json = serde_json::to_string(&education).unwrap();

    assert!(json.contains("\"level\""));
    assert!(json.contains("\"severity\""));
    assert!(json.contains("Search for the same claim"));
    assert!(json.contains("Emotional language"));
}

// ============================================================
// Chain: Report generation
// ============================================================

#[test]
fn report_contains_assessment_and_flags() {
    let content = "URGENT! Forward this to 10 people immediately! Doctors discovered \
                   a secret cure that pharmaceutical companies don't want you to know about...";
    let result = analyze(content);
    let education = classify(&result);

    let tmp_path = "/tmp/hearsay_test_report.md";
    let written = generate_report(content, "WhatsApp Forward", &result, &education, tmp_path);
    assert_eq!(written.unwrap(), tmp_path);

    let report = std::fs::read_to_string(tmp_path).unwrap();
    assert!(report.contains("# Hearsay Analysis Report"));
    assert!(report.contains("| Risk score | 7/10 |"));
    assert!(report.contains("| Confidence | 90% |"));
    assert!(report.contains("| Tier | HIGH RISK |"));
    assert!(report.contains("Contains suspicious phrase: 'urgent'"));
    assert!(report.contains("## How to Verify"));
    assert!(report.contains("## Red Flags to Watch For"));

    let _ = std::fs::remove_file(tmp_path);
}

#[test]
fn report_omits_flag_section_when_clean() {
    let content = "The finance ministry published its quarterly report today, \
                   source: reuters.com, with figures matching earlier filings.";
    let result = analyze(content);
    let education = classify(&result);

    let tmp_path = "/tmp/hearsay_test_clean_report.md";
    generate_report(content, "News Article", &result, &education, tmp_path).unwrap();

    let report = std::fs::read_to_string(tmp_path).unwrap();
    assert!(report.contains("| Tier | LOW RISK |"));
    assert!(!report.contains("## Triggered Flags"));

    let _ = std::fs::remove_file(tmp_path);
}

#[test]
fn report_creates_missing_parent_directory() {
    let result = analyze("short note");
    let education = classify(&result);

    let tmp_dir = "/tmp/hearsay_test_nested";
    let tmp_path = "/tmp/hearsay_test_nested/report.md";
    let _ = std::fs::remove_dir_all(tmp_dir);

    let written = generate_report("short note", "Text Message", &result, &education, tmp_path);
    assert!(written.is_ok());
    assert!(std::path::Path::new(tmp_path).exists());

    let _ = std::fs::remove_dir_all(tmp_dir);
}
