use serde::{Deserialize, Serialize};

use crate::model::{Phase, PlayerRecord, TournamentCutline};

/// A row the builder could not map, kept so the footer and logs can say what was dropped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RowDiagnostic {
    pub row_index: usize,
    pub cell_count: usize,
    pub phase: Phase,
}

/// Everything one poll cycle produced.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    pub title: String,
    pub phase: Phase,
    pub cutline: TournamentCutline,
    pub players: Vec<PlayerRecord>,
    pub skipped_rows: Vec<RowDiagnostic>,
}

impl Leaderboard {
    #[must_use]
    pub fn leader(&self) -> Option<&PlayerRecord> {
        self.players.first()
    }
}
