use chrono::{DateTime, Local};

use crate::controller::espn::client::LeaderboardFetcher;
use crate::controller::espn::document::{HtmlLeaderboard, Selectors};
use crate::controller::espn::processing::build_leaderboard;
use crate::error::AppError;
use crate::model::Leaderboard;

/// State carried across poll cycles. Only the last good leaderboard survives a cycle;
/// every build starts from the raw page.
#[derive(Debug, Clone)]
pub struct LeaderboardModel {
    pub selectors: Selectors,
    pub board: Option<Leaderboard>,
    pub last_refresh: Option<DateTime<Local>>,
    pub error: Option<AppError>,
    pub cycles: u64,
    pub failures: u64,
}

impl LeaderboardModel {
    #[must_use]
    pub fn new(selectors: Selectors) -> Self {
        Self {
            selectors,
            board: None,
            last_refresh: None,
            error: None,
            cycles: 0,
            failures: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Poll,
    PageFetched(String),
    Built(Leaderboard, DateTime<Local>),
    Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage,
    BuildLeaderboard(String),
}

pub fn update(model: &mut LeaderboardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Poll => {
            model.cycles += 1;
            vec![Effect::FetchPage]
        }
        Msg::PageFetched(body) => vec![Effect::BuildLeaderboard(body)],
        Msg::Built(board, at) => {
            model.board = Some(board);
            model.last_refresh = Some(at);
            model.error = None;
            vec![]
        }
        Msg::Failed(e) => {
            // the previous board stays on screen until a cycle succeeds
            model.error = Some(e);
            model.failures += 1;
            vec![]
        }
    }
}

pub struct Deps<'a, F> {
    pub fetcher: &'a F,
}

impl<F> Clone for Deps<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Deps<'_, F> {}

pub async fn run_effect<F: LeaderboardFetcher>(
    effect: Effect,
    model: &LeaderboardModel,
    deps: Deps<'_, F>,
) -> Msg {
    match effect {
        Effect::FetchPage => match deps.fetcher.fetch_page().await {
            Ok(body) => Msg::PageFetched(body),
            Err(e) => Msg::Failed(e),
        },
        Effect::BuildLeaderboard(body) => {
            let doc = HtmlLeaderboard::parse(&body, &model.selectors);
            match build_leaderboard(&doc) {
                Ok(board) => Msg::Built(board, Local::now()),
                Err(e) => Msg::Failed(e),
            }
        }
    }
}
