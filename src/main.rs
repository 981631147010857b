use std::io::Read;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use hearsay::config::Config;
use hearsay::education::{self, EducationContent};
use hearsay::output::{markdown, terminal};
use hearsay::scoring::analyzer::{self, AnalysisResult};

/// Hearsay: heuristic misinformation risk screening.
///
/// Scores forwarded messages, social posts, and article excerpts against a
/// fixed, explainable rule set and pairs the result with media-literacy
/// guidance. Not a model — every point is traceable to a named rule.
#[derive(Parser)]
#[command(name = "hearsay", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a piece of content for misinformation risk
    Analyze {
        /// The content to analyze. Reads from stdin when neither this nor
        /// --file is given.
        content: Option<String>,

        /// Read the content from a file instead
        #[arg(long, conflicts_with = "content")]
        file: Option<String>,

        /// What kind of content this is (descriptive label only)
        #[arg(long, value_enum, default_value = "text-message")]
        content_type: ContentType,

        /// Emit the assessment as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Also write a markdown report (default path: output/hearsay-report.md)
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        report: Option<String>,
    },

    /// Show the heuristic rule table
    Rules,

    /// Show verification steps, red flags, and trusted sources
    Tips,
}

/// Descriptive label for the kind of content being analyzed.
///
/// Metadata for display and reports only — the analyzer never reads it.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ContentType {
    WhatsappForward,
    SocialMediaPost,
    NewsArticle,
    Email,
    TextMessage,
}

impl ContentType {
    fn as_str(&self) -> &'static str {
        match self {
            ContentType::WhatsappForward => "WhatsApp Forward",
            ContentType::SocialMediaPost => "Social Media Post",
            ContentType::NewsArticle => "News Article",
            ContentType::Email => "Email",
            ContentType::TextMessage => "Text Message",
        }
    }
}

/// The combined records emitted by `analyze --json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    content_type: &'a str,
    analysis: &'a AnalysisResult,
    education: &'a EducationContent,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hearsay=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            content,
            file,
            content_type,
            json,
            report,
        } => {
            let config = Config::load()?;
            let content = read_content(content, file.as_deref())?;

            if content.trim().is_empty() {
                anyhow::bail!("No content to analyze. Paste some text, or pass --file.");
            }

            info!(
                content_type = content_type.as_str(),
                chars = content.chars().count(),
                "analyzing content"
            );

            let result = run_analysis(&content, &config, json);
            let education = education::classify(&result);

            if json {
                let combined = JsonReport {
                    content_type: content_type.as_str(),
                    analysis: &result,
                    education: &education,
                };
                println!("{}", serde_json::to_string_pretty(&combined)?);
            } else {
                println!(
                    "\nAnalyzing {} ({} characters)",
                    content_type.as_str().bold(),
                    content.chars().count()
                );
                terminal::display_analysis(&result, &education);
                terminal::display_education();
            }

            if let Some(report_path) = report {
                let path = if report_path.is_empty() {
                    config.report_path.clone()
                } else {
                    report_path
                };
                let written = markdown::generate_report(
                    &content,
                    content_type.as_str(),
                    &result,
                    &education,
                    &path,
                )?;
                if json {
                    info!(path = %written, "markdown report written");
                } else {
                    println!("\n{}", format!("Markdown report saved to: {written}").bold());
                }
            }
        }

        Commands::Rules => {
            terminal::display_rules();
        }

        Commands::Tips => {
            terminal::display_education();
            terminal::display_knowledge_hub();
        }
    }

    Ok(())
}

/// Resolve the content from the positional argument, a file, or stdin.
fn read_content(arg: Option<String>, file: Option<&str>) -> Result<String> {
    if let Some(content) = arg {
        return Ok(content);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {path}: {e}"));
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Run the analyzer behind a cosmetic spinner.
///
/// The spinner and its optional delay are display pacing only — the analysis
/// itself is synchronous and instant, and JSON mode skips both.
fn run_analysis(content: &str, config: &Config, json: bool) -> AnalysisResult {
    if json || config.analysis_delay_ms == 0 {
        return analyzer::analyze(content);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing the content...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    std::thread::sleep(Duration::from_millis(config.analysis_delay_ms));
    let result = analyzer::analyze(content);

    spinner.finish_and_clear();
    result
}
