use std::env;

use anyhow::Result;

/// Default destination for markdown reports.
pub const DEFAULT_REPORT_PATH: &str = "output/hearsay-report.md";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// here is presentation tuning — the scoring core takes no configuration.
pub struct Config {
    /// Cosmetic spinner delay during analysis, in milliseconds (default 0).
    /// Display pacing only; never affects scoring and never read by tests.
    pub analysis_delay_ms: u64,
    /// Where `analyze --report` writes when no path is given on the command line.
    pub report_path: String,
}

impl Config {
    /// Load configuration from environment variables. Both values have
    /// defaults, so loading never fails on a missing variable.
    pub fn load() -> Result<Self> {
        let analysis_delay_ms = match env::var("HEARSAY_ANALYSIS_DELAY_MS") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("HEARSAY_ANALYSIS_DELAY_MS must be an integer, got '{raw}'")
            })?,
            Err(_) => 0,
        };

        Ok(Self {
            analysis_delay_ms,
            report_path: env::var("HEARSAY_REPORT_PATH")
                .unwrap_or_else(|_| DEFAULT_REPORT_PATH.to_string()),
        })
    }
}
