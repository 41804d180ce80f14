use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::view::score::text::{COURSE_ICON, CUTLINE_MARKER, HOT_MARKER};
use crate::view::score::types::{DisplayRow, DisplayTable, FooterStatus, PlayerLine, ScoreTone};
use crate::view::score::utils::footer_text;

const FINISHED_GREY: Color = Color::Rgb(150, 150, 150);

fn tone_style(tone: ScoreTone) -> Style {
    let color = match tone {
        ScoreTone::UnderPar => Color::Red,
        ScoreTone::Even => Color::Green,
        ScoreTone::Other => Color::White,
    };
    Style::default().fg(color)
}

fn name_style(line: &PlayerLine) -> Style {
    let mut style = Style::default();
    if line.finished {
        style = style.fg(FINISHED_GREY);
    }
    if line.ahead_of_pace {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if line.cut {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    style
}

fn name_cell(line: &PlayerLine) -> Cell<'static> {
    let mut name = line.name.clone();
    if line.hot {
        name.push(' ');
        name.push_str(HOT_MARKER);
    }
    let mut spans = vec![Span::styled(name, name_style(line))];
    if let Some(today) = &line.today {
        let today_style = if line.finished {
            Style::default().fg(FINISHED_GREY)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" ({today})"), today_style));
    }
    Cell::from(Line::from(spans))
}

fn table_row(row: &DisplayRow) -> Row<'static> {
    match row {
        DisplayRow::Player(line) => Row::new(vec![
            Cell::from(
                Line::from(Span::styled(line.score.clone(), tone_style(line.tone)))
                    .alignment(Alignment::Center),
            ),
            name_cell(line),
            Cell::from(Line::from(line.third.clone()).alignment(Alignment::Right)),
        ]),
        DisplayRow::Cutline => Row::new(vec![
            Cell::from(""),
            Cell::from(CUTLINE_MARKER),
            Cell::from(""),
        ]),
    }
}

fn leaderboard_table(table: &DisplayTable) -> Table<'static> {
    let header = Row::new(vec![
        Cell::from(Line::from(COURSE_ICON).alignment(Alignment::Center)),
        Cell::from(table.title.clone()),
        Cell::from(Line::from(table.column_label).alignment(Alignment::Right)),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    Table::new(
        table.rows.iter().map(table_row),
        [
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL))
}

fn draw_placeholder(frame: &mut Frame, area: Rect, status: &FooterStatus) {
    let text = match &status.error {
        Some(err) => format!("No leaderboard yet: {err}"),
        None => "Loading leaderboard...".to_string(),
    };
    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(placeholder, area);
}

/// Draws the last good leaderboard, or a placeholder before the first one, above a
/// one-line status footer.
pub fn draw_leaderboard(frame: &mut Frame, table: Option<&DisplayTable>, status: &FooterStatus) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    match table {
        Some(table) => frame.render_widget(leaderboard_table(table), chunks[0]),
        None => draw_placeholder(frame, chunks[0], status),
    }

    let footer_style = if status.error.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(footer_text(status)).style(footer_style),
        chunks[1],
    );
}
