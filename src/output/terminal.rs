// Colored terminal output for analysis results and educational content.
//
// This module handles all terminal-specific formatting: colors, the metrics
// row, section layout. The main.rs command handlers delegate here.

use colored::{ColoredString, Colorize};

use crate::education::{self, EducationContent};
use crate::scoring::analyzer::AnalysisResult;
use crate::scoring::rules;

/// Display the full assessment: metrics, tier banner, explanation, flags.
pub fn display_analysis(result: &AnalysisResult, education: &EducationContent) {
    println!("\n{}", "=== Analysis Results ===".bold());
    println!();

    // Metrics row
    println!(
        "  {}  {}/10    {}  {}%    {}  {}",
        "Risk level:".dimmed(),
        result.risk_score,
        "Confidence:".dimmed(),
        result.confidence,
        "Flags detected:".dimmed(),
        result.flags.len(),
    );
    println!();

    println!("  {}", colorize_banner(education));
    println!("  {}", education.explanation);

    if !result.flags.is_empty() {
        println!("\n  {}", "Why this content is flagged:".bold());
        for flag in &result.flags {
            println!("    • {flag}");
        }
    }

    println!();
    println!(
        "  {}",
        format!("Analysis completed at {}", result.analysis_time).dimmed()
    );
}

/// Display the educational section shown after every assessment.
///
/// The lists are constants (identical for every tier), so this takes no
/// classifier output.
pub fn display_education() {
    println!("\n{}", "=== Learn to Spot Misinformation ===".bold());

    println!("\n  {}", "How to verify suspicious content:".bold());
    for step in education::VERIFICATION_STEPS {
        println!("    {step}");
    }

    println!("\n  {}", "Warning signs to watch for:".bold());
    for flag in education::RED_FLAGS {
        println!("    {flag}");
    }

    println!("\n  {}", "Quick verification tips:".bold());
    for tip in education::QUICK_TIPS {
        println!("    {tip}");
    }
}

/// Display the static knowledge-hub lists (`hearsay tips`).
pub fn display_knowledge_hub() {
    println!("\n{}", "=== Knowledge Hub ===".bold());

    println!("\n  {}", "Trusted sources:".green().bold());
    for source in education::TRUSTED_SOURCES {
        println!("    • {source}");
    }

    println!("\n  {}", "Indian fact-checkers:".bold());
    for checker in education::FACT_CHECKERS {
        println!("    • {checker}");
    }
}

/// Display the heuristic rule table (`hearsay rules`).
pub fn display_rules() {
    println!("\n{}", "=== Heuristic Rule Set ===".bold());

    println!("\n  {}", "Suspicious phrases (case-insensitive):".bold());
    println!(
        "  {:<34} {:>6}",
        "Phrase".dimmed(),
        "Points".dimmed()
    );
    println!("  {}", "-".repeat(42).dimmed());
    for &(phrase, points) in rules::SUSPICIOUS_PHRASES {
        println!("  {:<34} {:>6}", format!("'{phrase}'"), points);
    }

    println!("\n  {}", "Structural rules:".bold());
    println!(
        "    • Fewer than {} characters: +{} (lacks detail)",
        rules::MIN_DETAIL_CHARS,
        rules::STRUCTURAL_RULE_POINTS
    );
    println!(
        "    • More than {} exclamation marks: +{}",
        rules::MAX_EXCLAMATIONS,
        rules::STRUCTURAL_RULE_POINTS
    );
    println!(
        "    • No link and no source mention: +{}",
        rules::STRUCTURAL_RULE_POINTS
    );
    println!(
        "\n  Points are capped at a risk score of {}; flags are not capped.",
        rules::MAX_RISK_SCORE
    );
}

/// Colorize the tier banner according to its severity.
fn colorize_banner(education: &EducationContent) -> ColoredString {
    use crate::education::Severity;

    match education.severity {
        Severity::Error => format!("⚠ {} DETECTED", education.level).red().bold(),
        Severity::Warning => format!("⚡ {} DETECTED", education.level).yellow().bold(),
        Severity::Success => format!("✓ {}", education.level).green().bold(),
    }
}
