use crate::model::{Phase, RowDiagnostic};

/// Rows with exactly this many cells only carry a name and a tee time.
pub const TEE_TIME_ROW_CELLS: usize = 3;

/// Score shown for everyone before the first tee shot.
const NOT_STARTED_SCORE: &str = "E";

/// Cell positions of each field for one phase. `None` means the field is not on the page
/// in that phase: standing becomes the row ordinal, score becomes even, today stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub standing: Option<usize>,
    pub player: usize,
    pub score: Option<usize>,
    pub today: Option<usize>,
    pub thru: usize,
}

const NOT_STARTED_LAYOUT: ColumnLayout = ColumnLayout {
    standing: None,
    player: 1,
    score: None,
    today: None,
    thru: 2,
};

// round 1 has no movement column
const FIRST_ROUND_LAYOUT: ColumnLayout = ColumnLayout {
    standing: Some(1),
    player: 2,
    score: Some(3),
    today: Some(4),
    thru: 5,
};

const LATER_ROUND_LAYOUT: ColumnLayout = ColumnLayout {
    standing: Some(1),
    player: 3,
    score: Some(4),
    today: Some(5),
    thru: 6,
};

// today is the R4 column, thru is the earnings column
const FINAL_LAYOUT: ColumnLayout = ColumnLayout {
    standing: Some(1),
    player: 2,
    score: Some(3),
    today: Some(7),
    thru: 9,
};

impl ColumnLayout {
    #[must_use]
    pub const fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::NotStarted => NOT_STARTED_LAYOUT,
            Phase::Round1 => FIRST_ROUND_LAYOUT,
            Phase::Round2 | Phase::Round3 | Phase::Round4 => LATER_ROUND_LAYOUT,
            Phase::Final => FINAL_LAYOUT,
        }
    }

    /// Smallest row that holds every mapped cell.
    #[must_use]
    pub fn min_cells(&self) -> usize {
        [
            self.standing,
            Some(self.player),
            self.score,
            self.today,
            Some(self.thru),
        ]
        .into_iter()
        .flatten()
        .max()
        .map_or(0, |idx| idx + 1)
    }
}

/// Fields pulled from one row, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub standing: String,
    pub player: String,
    pub score: String,
    pub today: Option<String>,
    pub thru: String,
    pub round: Phase,
}

/// The phase a single row is read with. Tee-time-only rows override the event phase.
#[must_use]
pub fn resolve_row_phase(phase: Phase, cell_count: usize) -> Phase {
    if cell_count == TEE_TIME_ROW_CELLS {
        Phase::NotStarted
    } else {
        phase
    }
}

/// Maps one row's cells through the layout for its phase.
///
/// # Errors
///
/// Returns the row's diagnostic when it has fewer cells than its layout needs.
pub fn map_row(phase: Phase, row_index: usize, cells: &[String]) -> Result<RawRow, RowDiagnostic> {
    let round = resolve_row_phase(phase, cells.len());
    let layout = ColumnLayout::for_phase(round);
    if cells.len() < layout.min_cells() {
        return Err(RowDiagnostic {
            row_index,
            cell_count: cells.len(),
            phase: round,
        });
    }

    let cell = |idx: usize| cells[idx].clone();

    Ok(RawRow {
        standing: layout
            .standing
            .map_or_else(|| row_index.to_string(), cell),
        player: cell(layout.player),
        score: layout
            .score
            .map_or_else(|| NOT_STARTED_SCORE.to_string(), cell),
        today: layout.today.map(cell),
        thru: cell(layout.thru),
        round,
    })
}
