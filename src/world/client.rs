use serde::de::DeserializeOwned;

use super::types::{WorldDetail, WorldItem, WorldResponse};
use crate::error::{Error, Result};

/// HTTP client for the world service REST API.
#[derive(Debug, Clone)]
pub struct WorldClient {
    base_url: String,
    http: reqwest::Client,
}

impl WorldClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/worlds`
    pub async fn fetch_worlds(&self) -> Result<Vec<WorldItem>> {
        let url = format!("{}/worlds", self.base_url);
        log::info!("requesting world list: {url}");

        let response: WorldResponse = self.get_json(&url).await?;
        response.items.ok_or(Error::MalformedResponse {
            url,
            reason: "missing `items`",
        })
    }

    /// `GET {base}/world/{id}`
    pub async fn fetch_world(&self, world_id: &str) -> Result<WorldDetail> {
        let url = format!("{}/world/{}", self.base_url, world_id);
        log::info!("requesting world detail: {url}");

        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Parse {
            url: url.to_string(),
            source,
        })
    }
}
