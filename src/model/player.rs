use serde::{Deserialize, Serialize};

use crate::model::Phase;

/// One leaderboard row after extraction and normalization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerRecord {
    pub tournament_title: String,
    pub standing: String,
    pub player: String,
    pub score: String,
    pub score_value: Option<i32>,
    pub today: Option<String>,
    pub today_value: Option<i32>,
    pub thru: String,
    pub round: Phase,
    pub is_cut: bool,
    pub is_hot: bool,
}

impl PlayerRecord {
    /// Withdrawn players keep their last score on the board but never count against the cut.
    #[must_use]
    pub fn is_withdrawn(&self) -> bool {
        self.score == "WD"
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thru == "F"
    }
}

/// The projected or official cut score. `None` until the page shows a cutline row.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TournamentCutline {
    pub value: Option<i32>,
}
