use reqwest::{header::ACCEPT, Client, StatusCode};

use crate::config::Config;
use crate::error::{AppError, Context, Result};
use crate::records::{parse_matches, Match};

use super::{FetchResult, FixturesSource};

const USER_AGENT: &str = concat!("fixtures-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the fixtures backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    matches_url: String,
    csv_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to construct fixtures HTTP client")?;

        Ok(Self {
            client,
            matches_url: config.matches_url(),
            csv_url: config.csv_url(),
        })
    }

    pub fn matches_url(&self) -> &str {
        &self.matches_url
    }

    pub fn csv_url(&self) -> &str {
        &self.csv_url
    }
}

impl FixturesSource for ApiClient {
    async fn fetch_matches(&self) -> FetchResult<Vec<Match>> {
        log::debug!("GET {}", self.matches_url);
        let response = self
            .client
            .get(&self.matches_url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(matches_status_error(status));
        }

        let body = response.text().await?;
        let matches = parse_matches(&body)?;
        log::info!("Fetched {} matches from {}", matches.len(), self.matches_url);
        Ok(matches)
    }

    async fn fetch_csv(&self) -> FetchResult<Vec<u8>> {
        log::debug!("GET {}", self.csv_url);
        let response = self.client.get(&self.csv_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(csv_status_error(status));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// `API returned 404: Not Found`
pub fn matches_status_error(status: StatusCode) -> AppError {
    AppError::status(
        status.as_u16(),
        format!(
            "API returned {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status")
        ),
    )
}

/// `Failed to generate CSV (500)`
pub fn csv_status_error(status: StatusCode) -> AppError {
    AppError::status(
        status.as_u16(),
        format!("Failed to generate CSV ({})", status.as_u16()),
    )
}
