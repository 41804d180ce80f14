use crate::view::score::types::{FooterStatus, ScoreTone};

/// Rank given to standings that carry no number, so they sort and filter last.
pub const UNRANKED_STANDING: u32 = 1000;

/// `"T12"` -> 12, `"-"` or a withdrawn marker -> [`UNRANKED_STANDING`].
#[must_use]
pub fn parse_standing(standing: &str) -> u32 {
    standing
        .replace(['T', '-'], "")
        .trim()
        .parse()
        .unwrap_or(UNRANKED_STANDING)
}

#[must_use]
pub fn within_top(standing: &str, top: Option<u32>) -> bool {
    top.is_none_or(|limit| parse_standing(standing) <= limit)
}

#[must_use]
pub fn score_tone(score: &str) -> ScoreTone {
    if score.contains('-') {
        ScoreTone::UnderPar
    } else if score == "E" {
        ScoreTone::Even
    } else {
        ScoreTone::Other
    }
}

#[must_use]
pub fn footer_text(status: &FooterStatus) -> String {
    let mut parts = Vec::new();
    match &status.last_refresh {
        Some(at) => parts.push(format!("updated {at}")),
        None => parts.push("waiting for first refresh".to_string()),
    }
    parts.push(format!("next poll in {}s", status.next_poll_secs));
    if status.skipped_rows > 0 {
        parts.push(format!("{} rows skipped", status.skipped_rows));
    }
    if let Some(err) = &status.error {
        parts.push(format!("last poll failed: {err}"));
    }
    parts.push("q to quit".to_string());
    parts.join(" | ")
}
