use reqwest::Url;
use std::{fs, path::PathBuf};

pub const MAX_REFRESH_PER_SECOND: u64 = 30;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The config file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a valid url: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(format!("'{value}' uses {other}, expected http or https.")),
    }
}

/// # Errors
///
/// Will return `Err` if the value is not a whole number of seconds of at least one
pub fn check_positive_secs(value: &str) -> Result<u64, String> {
    let secs: u64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number of seconds."))?;
    validate_positive_secs(secs)
}

/// # Errors
///
/// Will return `Err` if the value is zero
pub fn validate_positive_secs(secs: u64) -> Result<u64, String> {
    if secs == 0 {
        return Err("Intervals must be at least one second.".to_string());
    }
    Ok(secs)
}

/// # Errors
///
/// Will return `Err` if the value is outside 1 to [`MAX_REFRESH_PER_SECOND`]
pub fn check_refresh_rate(value: &str) -> Result<u64, String> {
    let rate: u64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number."))?;
    validate_refresh_rate(rate)
}

/// # Errors
///
/// Will return `Err` if the value is outside 1 to [`MAX_REFRESH_PER_SECOND`]
pub fn validate_refresh_rate(rate: u64) -> Result<u64, String> {
    if !(1..=MAX_REFRESH_PER_SECOND).contains(&rate) {
        return Err(format!(
            "Refresh rate must be between 1 and {MAX_REFRESH_PER_SECOND} per second."
        ));
    }
    Ok(rate)
}
