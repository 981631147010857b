// Markdown report generation.
//
// Writes a single analysis to a markdown file so an assessment can be shared
// or archived outside the terminal. Returns the path it wrote to.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::education::EducationContent;
use crate::scoring::analyzer::AnalysisResult;

/// Generate a markdown report for one analyzed piece of content.
///
/// Creates parent directories as needed and overwrites any existing file at
/// `path`. Returns the destination path on success.
pub fn generate_report(
    content: &str,
    content_type: &str,
    result: &AnalysisResult,
    education: &EducationContent,
    path: &str,
) -> Result<String> {
    let mut md = String::new();

    writeln!(md, "# Hearsay Analysis Report\n")?;
    writeln!(md, "Analysis completed at {}.\n", result.analysis_time)?;

    writeln!(md, "## Input\n")?;
    writeln!(md, "- Content type: {content_type}")?;
    let preview = super::truncate_chars(content.trim(), 140);
    writeln!(md, "- Preview: \"{preview}\"\n")?;

    writeln!(md, "## Assessment\n")?;
    writeln!(md, "| Metric | Value |")?;
    writeln!(md, "|--------|-------|")?;
    writeln!(md, "| Risk score | {}/10 |", result.risk_score)?;
    writeln!(md, "| Confidence | {}% |", result.confidence)?;
    writeln!(md, "| Tier | {} |", education.level)?;
    writeln!(md, "| Flags detected | {} |", result.flags.len())?;
    writeln!(md)?;
    writeln!(md, "> {}\n", education.explanation)?;

    if !result.flags.is_empty() {
        writeln!(md, "## Triggered Flags\n")?;
        for flag in &result.flags {
            writeln!(md, "- {flag}")?;
        }
        writeln!(md)?;
    }

    writeln!(md, "## How to Verify\n")?;
    for (i, step) in education.verification_steps.iter().enumerate() {
        writeln!(md, "{}. {step}", i + 1)?;
    }
    writeln!(md)?;

    writeln!(md, "## Red Flags to Watch For\n")?;
    for flag in education.red_flags {
        writeln!(md, "- {flag}")?;
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
    }
    fs::write(path, md).with_context(|| format!("writing report to {path}"))?;

    Ok(path.to_string())
}
