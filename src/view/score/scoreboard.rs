use crate::model::{Leaderboard, PlayerRecord};
use crate::view::score::types::{DisplayRow, DisplayTable, PlayerLine};
use crate::view::score::utils::{score_tone, within_top};

fn player_line(player: &PlayerRecord, leader_holes: Option<i32>) -> PlayerLine {
    // only a plain hole count compares; "F" and back-nine starts do not
    let ahead_of_pace = player.is_hot
        && matches!(
            (player.thru.parse::<i32>().ok(), leader_holes),
            (Some(holes), Some(leader)) if holes < leader
        );
    PlayerLine {
        score: player.score.clone(),
        tone: score_tone(&player.score),
        name: player.player.clone(),
        today: player.today.clone(),
        hot: player.is_hot,
        ahead_of_pace,
        finished: player.is_finished(),
        cut: player.is_cut,
        third: player.thru.clone(),
    }
}

/// Builds the rows to draw: players within `top`, in page order, with one cutline
/// separator ahead of the first cut player.
#[must_use]
pub fn build_display_table(board: &Leaderboard, top: Option<u32>) -> DisplayTable {
    let leader_holes = board
        .leader()
        .and_then(|leader| leader.thru.parse::<i32>().ok());

    let lines: Vec<PlayerLine> = board
        .players
        .iter()
        .filter(|p| within_top(&p.standing, top))
        .map(|p| player_line(p, leader_holes))
        .collect();

    let first_cut = lines.iter().position(|line| line.cut);
    let rows = lines
        .into_iter()
        .enumerate()
        .fold(Vec::new(), |mut rows, (idx, line)| {
            if Some(idx) == first_cut {
                rows.push(DisplayRow::Cutline);
            }
            rows.push(DisplayRow::Player(line));
            rows
        });

    DisplayTable {
        title: board.title.clone(),
        column_label: board.phase.column_label(),
        rows,
    }
}
