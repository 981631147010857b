// The content analyzer — turns raw text into a scored AnalysisResult.
//
// Pure and total: any string in, a valid result out, no I/O. The same text
// always produces the same score, confidence, and flags; only the timestamp
// varies between calls.

use serde::{Deserialize, Serialize};

use super::rules::{self, MAX_RISK_SCORE};

/// Floor of the confidence range — an empty rule set still reports 20%.
pub const MIN_CONFIDENCE: u8 = 20;

/// Ceiling of the confidence range.
pub const MAX_CONFIDENCE: u8 = 95;

/// The outcome of scoring one piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Accumulated rule points, capped at 10.
    pub risk_score: u8,
    /// Display confidence percentage, derived from the score (20-95).
    pub confidence: u8,
    /// One explanation per triggered rule, in rule-evaluation order.
    ///
    /// Deliberately NOT capped alongside the score: a pathological input can
    /// carry more flags than the score ceiling reflects.
    pub flags: Vec<String>,
    /// Local wall-clock time of the analysis (HH:MM:SS), display metadata only.
    pub analysis_time: String,
}

/// Score a piece of content against the heuristic rule set.
pub fn analyze(content: &str) -> AnalysisResult {
    let hits = rules::evaluate(content);

    let points: u32 = hits.iter().map(|h| u32::from(h.points)).sum();
    let risk_score = points.min(u32::from(MAX_RISK_SCORE)) as u8;
    let flags = hits.into_iter().map(|h| h.flag).collect();

    AnalysisResult {
        risk_score,
        confidence: confidence_for(risk_score),
        flags,
        analysis_time: chrono::Local::now().format("%H:%M:%S").to_string(),
    }
}

/// Map a risk score to its display confidence: `min(score * 10 + 20, 95)`.
///
/// Monotonically non-decreasing in the score. This is a presentation
/// transform, not a statistical confidence interval.
pub fn confidence_for(risk_score: u8) -> u8 {
    (u32::from(risk_score) * 10 + u32::from(MIN_CONFIDENCE)).min(u32::from(MAX_CONFIDENCE)) as u8
}
