use crate::model::{PlayerRecord, TournamentCutline};

const CUTLINE_LABEL: &str = "Projected Cut";

/// Converts a display token such as `"E"`, `"+3"` or `"-5"` to strokes relative to par.
/// Tokens like `"WD"`, `"CUT"`, `"--"` or an empty cell come back as `None`.
#[must_use]
pub fn normalize_score(token: &str) -> Option<i32> {
    let token = token.trim();
    let token = token.strip_prefix('+').unwrap_or(token);
    if token == "E" {
        return Some(0);
    }
    token.parse::<i32>().ok()
}

/// Reads the cutline row text, e.g. `"Projected Cut -2"`.
#[must_use]
pub fn parse_cutline_text(raw: Option<&str>) -> TournamentCutline {
    let value = raw.and_then(|text| normalize_score(&text.replace(CUTLINE_LABEL, "")));
    TournamentCutline { value }
}

/// Marks every player above the cutline. Withdrawals and unscored rows are never cut.
pub fn apply_cutline(players: &mut [PlayerRecord], cutline: TournamentCutline) {
    for player in players.iter_mut() {
        player.is_cut = match (cutline.value, player.score_value) {
            (Some(cut), Some(score)) if !player.is_withdrawn() => score > cut,
            _ => false,
        };
    }
}

/// Holes completed according to the thru column. `"F"` is a full round; a trailing
/// `*` marks a player who started on the back nine and is stripped before parsing.
#[must_use]
pub fn holes_played(thru: &str) -> Option<i32> {
    let thru = thru.trim();
    if thru == "F" {
        return Some(18);
    }
    thru.trim_end_matches('*').parse::<i32>().ok()
}
