pub mod types;
pub mod validation;

pub use types::*;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::controller::espn::client::ESPN_LEADERBOARD_URL;
use validation::{check_url, validate_positive_secs, validate_refresh_rate};

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_REFRESH_PER_SECOND: u64 = 1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parses the command line and merges it with the config file.
///
/// # Errors
///
/// Will return `Err` if the config file cannot be read or holds invalid values
pub fn args_checks() -> Result<CleanArgs> {
    resolve(Args::parse())
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or is not valid config toml
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config toml {}", path.display()))?;
    toml::from_str::<FileConfig>(&contents)
        .with_context(|| format!("parse config toml {}", path.display()))
}

/// Flags win over the config file, the config file over defaults.
///
/// # Errors
///
/// Will return `Err` if the config file cannot be loaded or a file value is out of range
pub fn resolve(args: Args) -> Result<CleanArgs> {
    let file_config = match args.config_toml.as_deref() {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };

    let url = match args.url.or(file_config.url) {
        Some(url) => check_url(&url).map_err(|e| anyhow!(e))?,
        None => ESPN_LEADERBOARD_URL.to_string(),
    };
    let poll_secs = validate_positive_secs(
        args.poll_interval_secs
            .or(file_config.poll_interval_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
    )
    .map_err(|e| anyhow!(e))
    .context("poll_interval_secs")?;
    let refresh_rate = validate_refresh_rate(
        args.refresh_per_second
            .or(file_config.refresh_per_second)
            .unwrap_or(DEFAULT_REFRESH_PER_SECOND),
    )
    .map_err(|e| anyhow!(e))
    .context("refresh_per_second")?;
    let timeout_secs = validate_positive_secs(
        args.timeout_secs
            .or(file_config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    )
    .map_err(|e| anyhow!(e))
    .context("timeout_secs")?;

    let mode = if args.json {
        RunMode::Json
    } else if args.once {
        RunMode::Once
    } else {
        RunMode::Live
    };

    Ok(CleanArgs {
        top: args.top.or(file_config.top),
        url,
        poll_interval: Duration::from_secs(poll_secs),
        redraw_interval: Duration::from_millis(1000 / refresh_rate),
        timeout: Duration::from_secs(timeout_secs),
        log_file: args.log_file.or(file_config.log_file),
        selectors: file_config.selectors.unwrap_or_default(),
        mode,
    })
}
