use super::hot_streak::apply_hot_streaks;
use super::round_processor::classify_round;
use super::row_mapper::{RawRow, map_row};
use super::score_calculator::{apply_cutline, normalize_score, parse_cutline_text};
use crate::controller::espn::document::LeaderboardDocument;
use crate::error::AppError;
use crate::model::{Leaderboard, Phase, PlayerRecord};

fn into_record(row: RawRow, title: &str) -> PlayerRecord {
    let score_value = normalize_score(&row.score);
    let today_value = row.today.as_deref().and_then(normalize_score);
    PlayerRecord {
        tournament_title: title.to_string(),
        standing: row.standing,
        player: row.player,
        score: row.score,
        score_value,
        today: row.today,
        today_value,
        thru: row.thru,
        round: row.round,
        is_cut: false,
        is_hot: false,
    }
}

/// Turns one leaderboard page into typed records.
///
/// Rows are kept in page order. The cut and hot flags are set only once every row is
/// built, since both depend on the whole field.
///
/// # Errors
///
/// Will return `Err` if the page has no title or no player rows, which means the
/// site markup changed or the page is not a leaderboard.
pub fn build_leaderboard<D: LeaderboardDocument + ?Sized>(
    doc: &D,
) -> Result<Leaderboard, AppError> {
    let title = doc
        .title()
        .ok_or_else(|| AppError::MissingAnchor("tournament title".to_string()))?;
    let rows = doc.player_rows();
    if rows.is_empty() {
        return Err(AppError::MissingAnchor("player rows".to_string()));
    }

    let classified = classify_round(doc.status_text().as_deref());
    let cutline = parse_cutline_text(doc.cutline_text().as_deref());

    let mut players = Vec::with_capacity(rows.len());
    let mut skipped_rows = Vec::new();
    for (row_index, cells) in rows.iter().enumerate() {
        match map_row(classified, row_index, cells) {
            Ok(row) => players.push(into_record(row, &title)),
            Err(diagnostic) => {
                log::warn!(
                    "skipping leaderboard row {} with {} cells, too short for {}",
                    diagnostic.row_index,
                    diagnostic.cell_count,
                    diagnostic.phase
                );
                skipped_rows.push(diagnostic);
            }
        }
    }

    apply_cutline(&mut players, cutline);
    apply_hot_streaks(&mut players);

    let phase = if !players.is_empty() && players.iter().all(|p| p.round == Phase::NotStarted) {
        Phase::NotStarted
    } else {
        classified
    };

    log::debug!(
        "built leaderboard '{title}': {phase}, {} players, {} skipped, cutline {:?}",
        players.len(),
        skipped_rows.len(),
        cutline.value
    );

    Ok(Leaderboard {
        title,
        phase,
        cutline,
        players,
        skipped_rows,
    })
}
