use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::controller::espn::document::SelectorConfig;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "PGA leaderboard from ESPN, live in your terminal",
    long_about = None
)]
pub struct Args {
    /// Only show players standing at or better than this rank (ties included).
    #[arg(short = 't', long, value_name = "N")]
    pub top: Option<u32>,
    /// Leaderboard page to poll.
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_url)]
    pub url: Option<String>,
    /// Seconds between page fetches.
    #[arg(long, value_name = "SECONDS", value_parser = crate::args::validation::check_positive_secs)]
    pub poll_interval_secs: Option<u64>,
    /// Screen redraws per second.
    #[arg(long, value_name = "N", value_parser = crate::args::validation::check_refresh_rate)]
    pub refresh_per_second: Option<u64>,
    /// Seconds before a page fetch is abandoned.
    #[arg(long, value_name = "SECONDS", value_parser = crate::args::validation::check_positive_secs)]
    pub timeout_secs: Option<u64>,
    /// TOML file with the same keys plus a [selectors] table. Flags win over the file.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// Append log output here. In live mode, logging is off without it unless RUST_LOG is set.
    #[arg(long, value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
    /// Print one plain-text table and exit.
    #[arg(long, conflicts_with = "json")]
    pub once: bool,
    /// Print one leaderboard as JSON and exit.
    #[arg(long)]
    pub json: bool,
}

/// Contents of `--config-toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub top: Option<u32>,
    pub url: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub refresh_per_second: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub selectors: Option<SelectorConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Live,
    Once,
    Json,
}

/// Settings after flags, config file and defaults are merged.
#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub top: Option<u32>,
    pub url: String,
    pub poll_interval: Duration,
    pub redraw_interval: Duration,
    pub timeout: Duration,
    pub log_file: Option<PathBuf>,
    pub selectors: SelectorConfig,
    pub mode: RunMode,
}
