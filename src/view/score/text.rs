use std::fmt::Write;

use crate::error::AppError;
use crate::model::Leaderboard;
use crate::view::score::types::{DisplayRow, DisplayTable, PlayerLine};
use crate::view::score::utils::within_top;

pub const HOT_MARKER: &str = "🔥";
pub const CUTLINE_MARKER: &str = "✂️  -----------------------";
pub const COURSE_ICON: &str = "⛳";

/// Name cell text: name, fire marker when hot, today's score in parentheses.
#[must_use]
pub fn player_label(line: &PlayerLine) -> String {
    let mut label = line.name.clone();
    if line.hot {
        label.push(' ');
        label.push_str(HOT_MARKER);
    }
    if let Some(today) = &line.today {
        let _ = write!(label, " ({today})");
    }
    label
}

/// Renders the table for a non-interactive terminal or a pipe. Cut players are
/// suffixed with `(cut)` since there is no strikethrough.
#[must_use]
pub fn render_plain(table: &DisplayTable) -> String {
    let labels: Vec<Option<String>> = table
        .rows
        .iter()
        .map(|row| match row {
            DisplayRow::Player(line) if line.cut => Some(format!("{} (cut)", player_label(line))),
            DisplayRow::Player(line) => Some(player_label(line)),
            DisplayRow::Cutline => None,
        })
        .collect();
    let name_width = labels
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .chain([table.title.chars().count()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<name_width$}  {:>12}",
        COURSE_ICON, table.title, table.column_label
    );
    for (row, label) in table.rows.iter().zip(labels) {
        match (row, label) {
            (DisplayRow::Player(line), Some(label)) => {
                let _ = writeln!(
                    out,
                    "{:>5}  {:<name_width$}  {:>12}",
                    line.score, label, line.third
                );
            }
            _ => {
                let _ = writeln!(out, "{:>5}  {CUTLINE_MARKER}", "");
            }
        }
    }
    out
}

/// Pretty JSON for `--json`: the whole build, with `players` cut down to `top`.
/// Skipped rows are kept so a consumer can tell what the page dropped.
///
/// # Errors
///
/// Will return `Err` if the leaderboard cannot be serialized
pub fn render_json(board: &Leaderboard, top: Option<u32>) -> Result<String, AppError> {
    let filtered = Leaderboard {
        players: board
            .players
            .iter()
            .filter(|p| within_top(&p.standing, top))
            .cloned()
            .collect(),
        ..board.clone()
    };
    Ok(serde_json::to_string_pretty(&filtered)?)
}
