use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, Url,
};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::{PakError, Result};

#[cfg(test)]
mod tests;

/// Current scoring week, returns `{week, start_day, end_day}`.
pub const CURRENT_WEEK_PATH: &str = "current_week/";

/// Player pool for the current week, returns `{results: [...]}`.
pub const PLAYER_GAMES_PATH: &str = "playergames/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Read-only JSON API.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// GET `path` relative to the API root and decode the body as JSON.
    async fn get(&self, path: &str) -> Result<Value>;
}

/// [`ApiClient`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
    headers: HeaderMap,
}

impl HttpApiClient {
    /// Build a client rooted at `base_url`. A trailing slash is added when
    /// missing so relative paths join under it rather than replacing the last
    /// segment.
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .user_agent(concat!("pak-players/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            headers: common_headers(token)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| PakError::InvalidBaseUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path)?;
        debug!(%url, "GET");

        let res = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let url = Url::parse(&normalized).map_err(|e| PakError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(PakError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}

/// JSON accept header plus an optional token authorization header.
pub fn common_headers(token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Token {}", token))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
