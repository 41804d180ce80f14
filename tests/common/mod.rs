#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use rusty_golf_live::AppError;
use rusty_golf_live::controller::espn::LeaderboardFetcher;

/// Builds an ESPN-shaped leaderboard page.
#[derive(Default)]
pub struct PageBuilder {
    title: Option<String>,
    status: Option<String>,
    cutline: Option<String>,
    rows: Vec<Vec<String>>,
}

impl PageBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn cutline(mut self, text: &str) -> Self {
        self.cutline = Some(text.to_string());
        self
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(ToString::to_string).collect());
        self
    }

    /// Round 2-4 layout: movement column between standing and name.
    pub fn round_row(self, standing: &str, name: &str, score: &str, today: &str, thru: &str) -> Self {
        self.row(&["", standing, "-", name, score, today, thru, "1:40 PM"])
    }

    pub fn first_round_row(
        self,
        standing: &str,
        name: &str,
        score: &str,
        today: &str,
        thru: &str,
    ) -> Self {
        self.row(&["", standing, name, score, today, thru, "8:00 AM"])
    }

    pub fn tee_time_row(self, name: &str, tee_time: &str) -> Self {
        self.row(&["", name, tee_time])
    }

    pub fn final_row(self, standing: &str, name: &str, score: &str, r4: &str, earnings: &str) -> Self {
        self.row(&[
            "", standing, name, score, "68", "70", "69", r4, "275", earnings, "500",
        ])
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<html><head><title>Leaderboard</title></head><body>");
        if let Some(title) = &self.title {
            html.push_str(&format!(
                "<h1 class=\"headline Leaderboard__Event__Title\">{title}</h1>"
            ));
        }
        if let Some(status) = &self.status {
            html.push_str(&format!("<div class=\"status\"><span>{status}</span></div>"));
        }
        html.push_str("<table class=\"Table\"><tbody class=\"Table__TBODY\">");
        for cells in &self.rows {
            html.push_str("<tr class=\"PlayerRow__Overview PlayerRow__Overview--expandable Table__TR\">");
            for cell in cells {
                html.push_str(&format!("<td class=\"Table__TD\">{cell}</td>"));
            }
            html.push_str("</tr>");
        }
        if let Some(cutline) = &self.cutline {
            html.push_str(&format!(
                "<tr class=\"cutline Table__TR\"><td class=\"tc\" colspan=\"9\">{cutline}</td></tr>"
            ));
        }
        html.push_str("</tbody></table></body></html>");
        html
    }
}

/// Hands out queued responses, one per fetch.
pub struct ScriptedFetcher {
    responses: RefCell<VecDeque<Result<String, AppError>>>,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
        }
    }
}

impl LeaderboardFetcher for ScriptedFetcher {
    async fn fetch_page(&self) -> Result<String, AppError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted response left".to_string())))
    }
}
