use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

use crate::error::AppError;

pub const ESPN_LEADERBOARD_URL: &str = "https://www.espn.com/golf/leaderboard";

// ESPN serves a stripped page to clients without a browser user agent
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Source of the raw leaderboard page.
#[allow(async_fn_in_trait)]
pub trait LeaderboardFetcher {
    /// # Errors
    ///
    /// Will return `Err` if the page could not be retrieved
    async fn fetch_page(&self) -> Result<String, AppError>;
}

pub struct EspnClient {
    client: Client,
    url: String,
}

impl EspnClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(url: &str, timeout: Duration) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LeaderboardFetcher for EspnClient {
    async fn fetch_page(&self) -> Result<String, AppError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Network(format!(
                "{} returned http {status}",
                self.url
            )));
        }
        Ok(resp.text().await?)
    }
}
