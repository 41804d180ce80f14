mod common;

use common::{PageBuilder, ScriptedFetcher};
use rusty_golf_live::AppError;
use rusty_golf_live::controller::espn::Selectors;
use rusty_golf_live::controller::live::fetch_once;
use rusty_golf_live::model::Phase;
use rusty_golf_live::mvu::leaderboard::{Deps, LeaderboardModel};
use rusty_golf_live::mvu::runtime::run_cycle;

fn round_two_page(title: &str) -> String {
    PageBuilder::new(title)
        .status("Round 2 - In Progress")
        .round_row("1", "Ann", "-8", "-4", "F")
        .round_row("2", "Bea", "-6", "-2", "11")
        .render()
}

#[tokio::test]
async fn test3_failed_cycle_keeps_previous_leaderboard() -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = ScriptedFetcher::new(vec![
        Ok(round_two_page("Open")),
        Err(AppError::Network("connection reset".to_string())),
        Ok("<html><body><p>Down for maintenance</p></body></html>".to_string()),
        Ok(round_two_page("Open, later")),
    ]);
    let mut model = LeaderboardModel::new(Selectors::default());

    run_cycle(&mut model, Deps { fetcher: &fetcher }).await?;
    assert_eq!(model.board.as_ref().map(|b| b.players.len()), Some(2));
    let first_refresh = model.last_refresh;
    assert!(first_refresh.is_some());

    let err = run_cycle(&mut model, Deps { fetcher: &fetcher })
        .await
        .expect_err("network failure surfaces");
    assert_eq!(err, AppError::Network("connection reset".to_string()));
    assert_eq!(model.board.as_ref().map(|b| b.title.as_str()), Some("Open"));
    assert_eq!(model.last_refresh, first_refresh);

    let err = run_cycle(&mut model, Deps { fetcher: &fetcher })
        .await
        .expect_err("page without anchors surfaces");
    assert!(matches!(err, AppError::MissingAnchor(_)));
    assert_eq!(model.board.as_ref().map(|b| b.title.as_str()), Some("Open"));

    run_cycle(&mut model, Deps { fetcher: &fetcher }).await?;
    assert_eq!(
        model.board.as_ref().map(|b| b.title.as_str()),
        Some("Open, later")
    );
    assert!(model.error.is_none());
    assert_eq!(model.cycles, 4);
    assert_eq!(model.failures, 2);
    Ok(())
}

#[tokio::test]
async fn test3_cycles_rebuild_from_scratch() -> Result<(), Box<dyn std::error::Error>> {
    let cut_page = PageBuilder::new("Open")
        .status("Round 2 - In Progress")
        .round_row("1", "Ann", "-8", "-4", "F")
        .round_row("T70", "Bea", "+3", "+4", "F")
        .cutline("Projected Cut +1")
        .render();
    let fetcher = ScriptedFetcher::new(vec![Ok(cut_page), Ok(round_two_page("Open"))]);
    let mut model = LeaderboardModel::new(Selectors::default());

    run_cycle(&mut model, Deps { fetcher: &fetcher }).await?;
    assert!(model.board.as_ref().is_some_and(|b| b.players[1].is_cut));

    run_cycle(&mut model, Deps { fetcher: &fetcher }).await?;
    let board = model.board.as_ref().ok_or("board after second cycle")?;
    assert_eq!(board.cutline.value, None);
    assert!(board.players.iter().all(|p| !p.is_cut));
    Ok(())
}

#[tokio::test]
async fn test3_fetch_once_returns_the_board() -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = ScriptedFetcher::new(vec![Ok(round_two_page("Open"))]);
    let board = fetch_once(&fetcher, Selectors::default()).await?;
    assert_eq!(board.phase, Phase::Round2);
    assert_eq!(board.players[0].player, "Ann");
    Ok(())
}

#[tokio::test]
async fn test3_fetch_once_surfaces_failures() {
    let fetcher = ScriptedFetcher::new(vec![Err(AppError::Network("timed out".to_string()))]);
    let result = fetch_once(&fetcher, Selectors::default()).await;
    assert_eq!(result, Err(AppError::Network("timed out".to_string())));
}
