use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval};

use crate::args::CleanArgs;
use crate::controller::espn::client::LeaderboardFetcher;
use crate::controller::espn::document::Selectors;
use crate::error::AppError;
use crate::model::Leaderboard;
use crate::mvu::leaderboard::{Deps, LeaderboardModel};
use crate::mvu::runtime::run_cycle;
use crate::view::score::{FooterStatus, build_display_table, draw_leaderboard};

const REFRESH_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Runs a single poll cycle and hands back the leaderboard.
///
/// # Errors
///
/// Will return `Err` if the page cannot be fetched or is not a leaderboard
pub async fn fetch_once<F: LeaderboardFetcher>(
    fetcher: &F,
    selectors: Selectors,
) -> Result<Leaderboard, AppError> {
    let mut model = LeaderboardModel::new(selectors);
    run_cycle(&mut model, Deps { fetcher }).await?;
    model
        .board
        .ok_or_else(|| AppError::Other("poll cycle finished without a leaderboard".to_string()))
}

#[must_use]
pub fn footer_status(model: &LeaderboardModel, until_next_poll: Duration) -> FooterStatus {
    FooterStatus {
        last_refresh: model
            .last_refresh
            .map(|at| at.format(REFRESH_TIME_FORMAT).to_string()),
        next_poll_secs: until_next_poll.as_secs(),
        skipped_rows: model.board.as_ref().map_or(0, |b| b.skipped_rows.len()),
        error: model.error.as_ref().map(ToString::to_string),
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
}

/// Drains pending terminal events without blocking.
fn quit_requested() -> Result<bool, AppError> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if is_quit_key(&key) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn draw(
    terminal: &mut DefaultTerminal,
    model: &LeaderboardModel,
    args: &CleanArgs,
    next_poll: Instant,
) -> Result<(), AppError> {
    let table = model
        .board
        .as_ref()
        .map(|board| build_display_table(board, args.top));
    let status = footer_status(model, next_poll.saturating_duration_since(Instant::now()));
    terminal.draw(|frame| draw_leaderboard(frame, table.as_ref(), &status))?;
    Ok(())
}

enum CycleOutcome {
    Finished(Result<(), AppError>),
    Quit,
}

/// Runs one poll cycle, checking for quit keys on every redraw tick while the fetch
/// is in flight.
async fn cycle_or_quit<F, Q>(
    model: &mut LeaderboardModel,
    fetcher: &F,
    redraw: &mut Interval,
    mut quit: Q,
) -> Result<CycleOutcome, AppError>
where
    F: LeaderboardFetcher,
    Q: FnMut() -> Result<bool, AppError>,
{
    let cycle = run_cycle(model, Deps { fetcher });
    tokio::pin!(cycle);
    loop {
        tokio::select! {
            result = &mut cycle => return Ok(CycleOutcome::Finished(result)),
            _ = redraw.tick() => {
                if quit()? {
                    return Ok(CycleOutcome::Quit);
                }
            }
        }
    }
}

async fn live_loop<F: LeaderboardFetcher>(
    terminal: &mut DefaultTerminal,
    args: &CleanArgs,
    fetcher: &F,
    model: &mut LeaderboardModel,
) -> Result<(), AppError> {
    let mut poll = interval(args.poll_interval);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut redraw = interval(args.redraw_interval);
    redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut next_poll = Instant::now();

    loop {
        tokio::select! {
            _ = poll.tick() => {
                let started = Instant::now();
                match cycle_or_quit(model, fetcher, &mut redraw, quit_requested).await? {
                    CycleOutcome::Quit => return Ok(()),
                    CycleOutcome::Finished(Ok(())) => log::debug!(
                        "poll cycle {} finished in {:?}",
                        model.cycles,
                        started.elapsed()
                    ),
                    CycleOutcome::Finished(Err(e)) => log::warn!(
                        "poll cycle {} failed, keeping previous leaderboard: {e}",
                        model.cycles
                    ),
                }
                next_poll = started + args.poll_interval;
                draw(terminal, model, args, next_poll)?;
            }
            _ = redraw.tick() => {
                draw(terminal, model, args, next_poll)?;
                if quit_requested()? {
                    return Ok(());
                }
            }
        }
    }
}

/// Polls the leaderboard and redraws the table until the user quits.
///
/// # Errors
///
/// Will return `Err` if the terminal cannot be drawn to. Failed poll cycles are
/// logged and retried on the next tick.
pub async fn run_live<F: LeaderboardFetcher>(
    args: &CleanArgs,
    fetcher: &F,
    selectors: Selectors,
) -> Result<(), AppError> {
    log::info!(
        "polling {} every {}s",
        args.url,
        args.poll_interval.as_secs()
    );
    let mut model = LeaderboardModel::new(selectors);
    let mut terminal = ratatui::init();
    let result = live_loop(&mut terminal, args, fetcher, &mut model).await;
    ratatui::restore();
    log::info!(
        "stopped after {} poll cycles, {} failed",
        model.cycles,
        model.failures
    );
    result
}
