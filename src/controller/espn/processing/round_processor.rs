use regex::Regex;
use std::sync::LazyLock;

use crate::model::Phase;

static ROUND_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Round (\d+)").expect("round pattern is a valid regex"));

/// Reads the event status line, e.g. `"Round 3 - In Progress"`.
/// No round number (missing text, `"Final"`, `"Official"`, a playoff note) means the
/// event is treated as finished.
#[must_use]
pub fn classify_round(status: Option<&str>) -> Phase {
    status
        .and_then(|text| ROUND_PATTERN.captures(text.trim()))
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .and_then(Phase::from_round_number)
        .unwrap_or(Phase::Final)
}
