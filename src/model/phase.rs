use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the tournament is: before the first tee time, in one of the four rounds, or done.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    Round1,
    Round2,
    Round3,
    Round4,
    Final,
}

impl Phase {
    /// Maps a round number to its phase. Anything outside 1-4 is `None`.
    #[must_use]
    pub fn from_round_number(round: u32) -> Option<Self> {
        match round {
            1 => Some(Phase::Round1),
            2 => Some(Phase::Round2),
            3 => Some(Phase::Round3),
            4 => Some(Phase::Round4),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(
            self,
            Phase::Round1 | Phase::Round2 | Phase::Round3 | Phase::Round4
        )
    }

    /// Header for the third leaderboard column.
    #[must_use]
    pub fn column_label(self) -> &'static str {
        match self {
            Phase::NotStarted => "Tee Time",
            Phase::Final => "Earnings",
            _ => "Thru",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::NotStarted => "not started",
            Phase::Round1 => "round 1",
            Phase::Round2 => "round 2",
            Phase::Round3 => "round 3",
            Phase::Round4 => "round 4",
            Phase::Final => "final",
        };
        write!(f, "{s}")
    }
}
