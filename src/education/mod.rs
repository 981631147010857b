// Risk classification and educational content.
//
// Maps a risk score onto a closed three-tier enum and pairs it with a fixed
// explanation plus static media-literacy material. The verification steps
// and red-flag lists are the same for every tier; only the tier, severity,
// and explanation vary with the score.

use serde::{Deserialize, Serialize};

use crate::scoring::analyzer::AnalysisResult;

/// Discrete risk tier derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Presentation category paired 1:1 with the risk tier.
///
/// Consumers pick a display style from this (green/yellow/red in the
/// terminal) instead of branching on tier label strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl RiskLevel {
    /// Determine the tier from a risk score (0-10). Boundaries are
    /// inclusive: 7 is High, 4 is Moderate, 3 is Low.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 7 => RiskLevel::High,
            s if s >= 4 => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Moderate => "MODERATE RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }

    /// The presentation severity for this tier.
    pub fn severity(&self) -> Severity {
        match self {
            RiskLevel::Low => Severity::Success,
            RiskLevel::Moderate => Severity::Warning,
            RiskLevel::High => Severity::Error,
        }
    }

    /// The tier's fixed explanation text.
    pub fn explanation(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "This content shows multiple signs of potential misinformation. \
                 Be very cautious before believing or sharing."
            }
            RiskLevel::Moderate => {
                "This content has some concerning elements. \
                 Verify with reliable sources before trusting."
            }
            RiskLevel::Low => {
                "This content appears relatively trustworthy, \
                 but always verify important information."
            }
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How to verify a suspicious claim, in recommended order.
pub const VERIFICATION_STEPS: &[&str] = &[
    "🔍 Search for the same claim on reliable news websites",
    "📊 Check fact-checking sites like Alt News, Boom, or Fact Crescendo",
    "🏛️ Look for official government or institutional sources",
    "👥 See if multiple credible sources report the same information",
    "📅 Check if the information is recent and contextually relevant",
];

/// Warning signs of misinformation, shown with every assessment.
pub const RED_FLAGS: &[&str] = &[
    "❌ Emotional language designed to provoke strong reactions",
    "❌ Claims that seem too good or too bad to be true",
    "❌ Requests to 'forward immediately' or 'share with everyone'",
    "❌ No credible sources or citations provided",
    "❌ Poor grammar, spelling, or formatting",
    "❌ Claims that 'they' don't want you to know something",
];

/// Short habits for everyday verification.
pub const QUICK_TIPS: &[&str] = &[
    "🕐 Take a moment to think before sharing",
    "🔗 Check if there are credible source links",
    "📱 Search the claim on Google or fact-check sites",
    "👥 Ask yourself: \"Who benefits from me believing this?\"",
    "🧠 Trust your critical thinking skills",
];

/// Kinds of outlets worth trusting over forwarded claims.
pub const TRUSTED_SOURCES: &[&str] = &[
    "Government websites (.gov.in)",
    "Established news outlets",
    "Fact-checking organizations",
    "Academic institutions",
    "Official social media accounts",
];

/// Indian fact-checking organizations.
pub const FACT_CHECKERS: &[&str] = &[
    "Alt News",
    "BOOM Live",
    "Fact Crescendo",
    "Vishvas News",
    "PIB Fact Check",
];

/// Tier-appropriate explanation plus the static educational lists.
#[derive(Debug, Clone, Serialize)]
pub struct EducationContent {
    pub level: RiskLevel,
    pub severity: Severity,
    pub explanation: &'static str,
    pub verification_steps: &'static [&'static str],
    pub red_flags: &'static [&'static str],
}

/// Classify an analysis result into a risk tier with educational content.
///
/// Pure in `result.risk_score`; the confidence, flags, and timestamp play no
/// part in classification.
pub fn classify(result: &AnalysisResult) -> EducationContent {
    let level = RiskLevel::from_score(result.risk_score);
    EducationContent {
        level,
        severity: level.severity(),
        explanation: level.explanation(),
        verification_steps: VERIFICATION_STEPS,
        red_flags: RED_FLAGS,
    }
}
