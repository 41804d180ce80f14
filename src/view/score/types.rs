/// Colour class of the score cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    UnderPar,
    Even,
    Other,
}

/// One player as the presenter draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLine {
    pub score: String,
    pub tone: ScoreTone,
    pub name: String,
    pub today: Option<String>,
    pub hot: bool,
    /// Hot and fewer holes played than the leader.
    pub ahead_of_pace: bool,
    pub finished: bool,
    pub cut: bool,
    pub third: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    Player(PlayerLine),
    Cutline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTable {
    pub title: String,
    pub column_label: &'static str,
    pub rows: Vec<DisplayRow>,
}

impl DisplayTable {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, DisplayRow::Player(_)))
            .count()
    }
}

/// What the footer line reports about the poll loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterStatus {
    pub last_refresh: Option<String>,
    pub next_poll_secs: u64,
    pub skipped_rows: usize,
    pub error: Option<String>,
}
