use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_TITLE_SELECTOR: &str = "h1.Leaderboard__Event__Title";
pub const DEFAULT_STATUS_SELECTOR: &str = "div.status span";
pub const DEFAULT_CUTLINE_SELECTOR: &str = "tr.cutline";
pub const DEFAULT_PLAYER_ROW_SELECTOR: &str = "tr.PlayerRow__Overview";

/// Read access to the parts of a leaderboard page the builder needs.
pub trait LeaderboardDocument {
    fn title(&self) -> Option<String>;
    fn status_text(&self) -> Option<String>;
    /// Text of the cutline row's first cell, label included.
    fn cutline_text(&self) -> Option<String>;
    /// Every player row in page order, each as its trimmed cell texts.
    fn player_rows(&self) -> Vec<Vec<String>>;
}

/// CSS selectors for the page anchors. The site changes its markup without notice,
/// so these can be overridden from the config file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    pub title: String,
    pub status: String,
    pub cutline: String,
    pub player_row: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_SELECTOR.to_string(),
            status: DEFAULT_STATUS_SELECTOR.to_string(),
            cutline: DEFAULT_CUTLINE_SELECTOR.to_string(),
            player_row: DEFAULT_PLAYER_ROW_SELECTOR.to_string(),
        }
    }
}

/// Compiled form of [`SelectorConfig`].
#[derive(Debug, Clone)]
pub struct Selectors {
    title: Selector,
    status: Selector,
    cutline: Selector,
    player_row: Selector,
    cell: Selector,
}

impl Selectors {
    /// # Errors
    ///
    /// Will return `Err` if any selector string is not valid CSS
    pub fn compile(config: &SelectorConfig) -> Result<Self, AppError> {
        Ok(Self {
            title: parse_selector("title", &config.title)?,
            status: parse_selector("status", &config.status)?,
            cutline: parse_selector("cutline", &config.cutline)?,
            player_row: parse_selector("player_row", &config.player_row)?,
            cell: parse_selector("cell", "td")?,
        })
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::compile(&SelectorConfig::default()).expect("default selectors are valid CSS")
    }
}

fn parse_selector(name: &str, css: &str) -> Result<Selector, AppError> {
    Selector::parse(css)
        .map_err(|e| AppError::Config(format!("invalid {name} selector '{css}': {e}")))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// A fetched leaderboard page parsed with `scraper`.
pub struct HtmlLeaderboard<'s> {
    html: Html,
    selectors: &'s Selectors,
}

impl<'s> HtmlLeaderboard<'s> {
    #[must_use]
    pub fn parse(body: &str, selectors: &'s Selectors) -> Self {
        Self {
            html: Html::parse_document(body),
            selectors,
        }
    }

    fn first_text(&self, selector: &Selector) -> Option<String> {
        self.html.select(selector).next().map(element_text)
    }
}

impl LeaderboardDocument for HtmlLeaderboard<'_> {
    fn title(&self) -> Option<String> {
        self.first_text(&self.selectors.title)
            .filter(|title| !title.is_empty())
    }

    fn status_text(&self) -> Option<String> {
        self.first_text(&self.selectors.status)
    }

    fn cutline_text(&self) -> Option<String> {
        let row = self.html.select(&self.selectors.cutline).next()?;
        row.children()
            .filter_map(ElementRef::wrap)
            .next()
            .map(element_text)
    }

    fn player_rows(&self) -> Vec<Vec<String>> {
        self.html
            .select(&self.selectors.player_row)
            .map(|row| {
                row.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|child| self.selectors.cell.matches(child))
                    .map(element_text)
                    .collect()
            })
            .collect()
    }
}
