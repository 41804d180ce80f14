mod common;

use common::PageBuilder;
use rusty_golf_live::AppError;
use rusty_golf_live::controller::espn::{HtmlLeaderboard, Selectors, build_leaderboard};
use rusty_golf_live::model::{Leaderboard, Phase};

fn build(page: &PageBuilder) -> Result<Leaderboard, AppError> {
    let selectors = Selectors::default();
    let doc = HtmlLeaderboard::parse(&page.render(), &selectors);
    build_leaderboard(&doc)
}

#[test]
fn test1_cutline_flags_players_over_the_line() -> Result<(), Box<dyn std::error::Error>> {
    let page = PageBuilder::new("Wells Fargo Championship")
        .status("Round 2 - In Progress")
        .round_row("1", "Rory McIlroy", "-6", "-2", "F")
        .round_row("T40", "Jason Day", "-2", "E", "F")
        .round_row("T80", "Adam Scott", "+1", "+2", "16")
        .round_row("-", "Tony Finau", "WD", "-", "-")
        .cutline("Projected Cut -2");

    let board = build(&page)?;
    assert_eq!(board.cutline.value, Some(-2));
    assert_eq!(board.phase, Phase::Round2);
    let cut: Vec<bool> = board.players.iter().map(|p| p.is_cut).collect();
    assert_eq!(cut, vec![false, false, true, false]);
    assert_eq!(board.players[3].score_value, None);
    Ok(())
}

#[test]
fn test1_round_three_hot_streaks() -> Result<(), Box<dyn std::error::Error>> {
    let page = PageBuilder::new("The Memorial Tournament")
        .status("Round 3 - In Progress")
        .round_row("1", "Scottie Scheffler", "-10", "-4", "F")
        .round_row("2", "Collin Morikawa", "-8", "-3", "F")
        .round_row("T3", "Adam Hadwin", "-6", "E", "F")
        .round_row("T3", "Hideki Matsuyama", "-6", "+2", "F");

    let board = build(&page)?;
    let hot: Vec<bool> = board.players.iter().map(|p| p.is_hot).collect();
    assert_eq!(hot, vec![true, true, false, false]);
    let todays: Vec<Option<i32>> = board.players.iter().map(|p| p.today_value).collect();
    assert_eq!(todays, vec![Some(-4), Some(-3), Some(0), Some(2)]);
    Ok(())
}

#[test]
fn test1_tee_time_rows_before_the_event() -> Result<(), Box<dyn std::error::Error>> {
    let page = PageBuilder::new("U.S. Open")
        .tee_time_row("Bryson DeChambeau", "7:29 AM")
        .tee_time_row("Rory McIlroy", "7:40 AM")
        .tee_time_row("Patrick Cantlay", "1:14 PM");

    let board = build(&page)?;
    assert_eq!(board.phase, Phase::NotStarted);
    assert_eq!(board.cutline.value, None);
    for (idx, player) in board.players.iter().enumerate() {
        assert_eq!(player.standing, idx.to_string());
        assert_eq!(player.score, "E");
        assert_eq!(player.score_value, Some(0));
        assert_eq!(player.today, None);
        assert_eq!(player.round, Phase::NotStarted);
        assert!(!player.is_hot);
        assert!(!player.is_cut);
    }
    assert_eq!(board.players[2].thru, "1:14 PM");
    Ok(())
}

#[test]
fn test1_first_round_layout() -> Result<(), Box<dyn std::error::Error>> {
    let page = PageBuilder::new("RBC Heritage")
        .status("Round 1 - Play Complete")
        .first_round_row("1", "Sepp Straka", "-7", "-7", "F")
        .first_round_row("T2", "Justin Thomas", "-5", "-5", "F");

    let board = build(&page)?;
    assert_eq!(board.phase, Phase::Round1);
    assert_eq!(board.players[1].standing, "T2");
    assert_eq!(board.players[1].player, "Justin Thomas");
    assert_eq!(board.players[1].today.as_deref(), Some("-5"));
    assert!(board.players.iter().all(|p| p.is_hot));
    Ok(())
}

#[test]
fn test1_final_results_are_never_hot() -> Result<(), Box<dyn std::error::Error>> {
    let page = PageBuilder::new("Masters Tournament")
        .status("Final")
        .final_row("1", "Scottie Scheffler", "-11", "68", "$3,600,000")
        .final_row("2", "Ludvig Aberg", "-7", "69", "$2,160,000");

    let board = build(&page)?;
    assert_eq!(board.phase, Phase::Final);
    assert_eq!(board.players[0].thru, "$3,600,000");
    assert!(board.players.iter().all(|p| !p.is_hot));
    Ok(())
}

#[test]
fn test1_missing_status_defaults_to_final() -> Result<(), Box<dyn std::error::Error>> {
    let page = PageBuilder::new("Open").final_row("1", "A", "-3", "70", "$10");
    assert_eq!(build(&page)?.phase, Phase::Final);
    Ok(())
}

#[test]
fn test1_page_without_title_is_fatal() {
    let page = PageBuilder::untitled()
        .status("Round 2")
        .round_row("1", "A", "-1", "-1", "F");
    assert!(matches!(build(&page), Err(AppError::MissingAnchor(_))));
}

#[test]
fn test1_page_without_rows_is_fatal() {
    let page = PageBuilder::new("Open").status("Round 2");
    assert_eq!(
        build(&page),
        Err(AppError::MissingAnchor("player rows".to_string()))
    );
}

#[test]
fn test1_malformed_rows_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let page = PageBuilder::new("Open")
        .status("Round 4 - In Progress")
        .round_row("1", "A", "-12", "-5", "14")
        .row(&["", "T2", "-", "B"])
        .round_row("T2", "C", "-9", "-1", "F");

    let board = build(&page)?;
    assert_eq!(board.players.len(), 2);
    assert_eq!(board.skipped_rows.len(), 1);
    assert_eq!(board.skipped_rows[0].row_index, 1);
    assert_eq!(board.skipped_rows[0].cell_count, 4);
    Ok(())
}

#[test]
fn test1_records_keep_page_order() -> Result<(), Box<dyn std::error::Error>> {
    let page = PageBuilder::new("Open")
        .status("Round 2")
        .round_row("T5", "Zed", "-3", "-1", "F")
        .round_row("1", "Amy", "-9", "-4", "F")
        .round_row("T5", "Kit", "-3", "E", "F");

    let board = build(&page)?;
    let names: Vec<&str> = board.players.iter().map(|p| p.player.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Amy", "Kit"]);
    Ok(())
}
