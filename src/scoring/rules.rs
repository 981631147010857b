// The heuristic rule set, kept as data rather than control flow.
//
// The suspicious-phrase table is an ordered constant so the rule set can be
// inspected (`hearsay rules`), tested, and extended without touching the
// analyzer. Matching is case-insensitive substring presence: a phrase that
// appears five times still scores once.

/// Suspicious phrases and the points each contributes when present.
///
/// Evaluation order is the table order, which fixes the order of the
/// resulting flags. All phrases are stored lowercase; the analyzer lowercases
/// the content before matching.
pub const SUSPICIOUS_PHRASES: &[(&str, u8)] = &[
    ("forward this", 2),
    ("share immediately", 2),
    ("doctors don't want you to know", 2),
    ("secret cure", 2),
    ("government hiding", 2),
    ("they don't want you to see", 2),
    ("urgent", 2),
    ("breaking", 2),
    ("exclusive", 2),
    ("miracle", 2),
    ("banned", 2),
];

/// Content shorter than this many characters is flagged as lacking detail.
pub const MIN_DETAIL_CHARS: usize = 50;

/// More exclamation marks than this triggers the excessive-punctuation flag.
pub const MAX_EXCLAMATIONS: usize = 3;

/// Points added by each structural rule (short content, punctuation, no sources).
pub const STRUCTURAL_RULE_POINTS: u8 = 1;

/// The risk score never exceeds this, no matter how many rules fire.
pub const MAX_RISK_SCORE: u8 = 10;

/// A single triggered rule: the points it contributed and its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub points: u8,
    pub flag: String,
}

/// Evaluate every rule against the content, in fixed order.
///
/// Returns one `RuleHit` per triggered rule. The caller sums the points and
/// applies the score cap; the hits themselves are never truncated.
pub fn evaluate(content: &str) -> Vec<RuleHit> {
    let mut hits = Vec::new();
    let content_lower = content.to_lowercase();

    for &(phrase, points) in SUSPICIOUS_PHRASES {
        if content_lower.contains(phrase) {
            hits.push(RuleHit {
                points,
                flag: format!("Contains suspicious phrase: '{phrase}'"),
            });
        }
    }

    // Character count, not byte length — multi-byte text shouldn't dodge
    // the short-content rule or trip it early.
    if content.chars().count() < MIN_DETAIL_CHARS {
        hits.push(RuleHit {
            points: STRUCTURAL_RULE_POINTS,
            flag: "Very short content - lacks detail".to_string(),
        });
    }

    if content.matches('!').count() > MAX_EXCLAMATIONS {
        hits.push(RuleHit {
            points: STRUCTURAL_RULE_POINTS,
            flag: "Excessive exclamation marks".to_string(),
        });
    }

    // "http" is matched case-sensitively, "source" case-insensitively.
    if !content.contains("http") && !content_lower.contains("source") {
        hits.push(RuleHit {
            points: STRUCTURAL_RULE_POINTS,
            flag: "No sources or links provided".to_string(),
        });
    }

    hits
}
