//! HTTP client for the marketstack v1 REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{DividendQuery, EodQuery, IntradayQuery, Query, SplitQuery, TickerQuery},
    types::{Dividend, EodBar, IntradayBar, PaginatedResponse, Split, Ticker},
    Error,
};

/// Request timeout for upstream API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the marketstack v1 REST API.
///
/// Every request carries the account access key as the `access_key` query
/// pair; the key is never written to the log. One `reqwest::Client` is
/// shared across requests.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl Client {
    /// Creates a new client pointing at the production marketstack API.
    pub fn new(access_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url("http://api.marketstack.com/v1", access_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, access_key: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.into(),
        })
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        let mut url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        url.query_pairs_mut()
            .append_pair("access_key", &self.access_key);
        Ok(url)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                // The error Display would include the full request URL,
                // access key and all; strip it before logging.
                tracing::error!("Failed to get {}: {}", path, e.without_url());
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("{} failed with status {}: {}", path, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {} response: {} | body: {}", path, e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches end-of-day price history matching the given query.
    pub async fn eod(&self, query: &EodQuery) -> Result<PaginatedResponse<EodBar>, Error> {
        self.get::<PaginatedResponse<EodBar>, EodQuery>("/eod", Some(query))
            .await
    }

    /// Fetches the most recent end-of-day record for each queried symbol.
    pub async fn eod_latest(&self, query: &EodQuery) -> Result<PaginatedResponse<EodBar>, Error> {
        self.get::<PaginatedResponse<EodBar>, EodQuery>("/eod/latest", Some(query))
            .await
    }

    /// Fetches intraday quote history matching the given query.
    pub async fn intraday(
        &self,
        query: &IntradayQuery,
    ) -> Result<PaginatedResponse<IntradayBar>, Error> {
        self.get::<PaginatedResponse<IntradayBar>, IntradayQuery>("/intraday", Some(query))
            .await
    }

    /// Fetches the most recent intraday quote for each queried symbol.
    pub async fn intraday_latest(
        &self,
        query: &IntradayQuery,
    ) -> Result<PaginatedResponse<IntradayBar>, Error> {
        self.get::<PaginatedResponse<IntradayBar>, IntradayQuery>("/intraday/latest", Some(query))
            .await
    }

    /// Fetches cash dividend history matching the given query.
    pub async fn dividends(
        &self,
        query: &DividendQuery,
    ) -> Result<PaginatedResponse<Dividend>, Error> {
        self.get::<PaginatedResponse<Dividend>, DividendQuery>("/dividends", Some(query))
            .await
    }

    /// Fetches stock-split history matching the given query.
    pub async fn splits(&self, query: &SplitQuery) -> Result<PaginatedResponse<Split>, Error> {
        self.get::<PaginatedResponse<Split>, SplitQuery>("/splits", Some(query))
            .await
    }

    /// Fetches the ticker listing matching the given query.
    pub async fn tickers(&self, query: &TickerQuery) -> Result<PaginatedResponse<Ticker>, Error> {
        self.get::<PaginatedResponse<Ticker>, TickerQuery>("/tickers", Some(query))
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back up to a char boundary so a multi-byte code point straddling
    // the limit cannot split.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...[truncated]", &body[..cut])
}
