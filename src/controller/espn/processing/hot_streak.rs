use super::score_calculator::holes_played;
use crate::model::{Phase, PlayerRecord};

/// How close to the day's best a round has to be to count as hot.
const HOT_MARGIN: i32 = 3;
/// Upper bound on `today + holes played` for a low round early in the day.
const EARLY_PACE_LIMIT: i32 = 2;
const MAKEUP_MARKER: char = 'M';

/// Best score posted today across the field, never above even par.
#[must_use]
pub fn lowest_today(players: &[PlayerRecord]) -> i32 {
    players
        .iter()
        .filter_map(|p| p.today_value)
        .fold(0, i32::min)
}

#[must_use]
pub fn is_hot(player: &PlayerRecord, lowest_today: i32) -> bool {
    if player.round == Phase::Final {
        return false;
    }
    let Some(today) = player.today_value else {
        return false;
    };

    if today == lowest_today || today.saturating_sub(lowest_today) < HOT_MARGIN {
        return true;
    }

    today < 0
        && !player.thru.contains(MAKEUP_MARKER)
        && holes_played(&player.thru)
            .is_some_and(|holes| today.saturating_add(holes) <= EARLY_PACE_LIMIT)
}

/// Sets `is_hot` for every player. Needs the whole field, so it runs after all rows are built.
pub fn apply_hot_streaks(players: &mut [PlayerRecord]) {
    let lowest = lowest_today(players);
    for player in players.iter_mut() {
        player.is_hot = is_hot(player, lowest);
    }
}
