//! HTTP client for the game server backend API

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::{RaceDeckError, Result};
use crate::models::responses::{
    CommandResponse, ConsoleResponse, PlayersResponse, StatusResponse,
};
use crate::models::server::{PlayerEntry, ServerAction};

/// Operations the dashboard needs from the backend.
///
/// Implemented over HTTP by [`HttpServerApi`]; tests substitute their own.
#[async_trait]
pub trait ServerApi: Send + Sync {
    async fn console(&self, server_id: &str) -> Result<Vec<String>>;

    async fn players(&self, server_id: &str) -> Result<Vec<PlayerEntry>>;

    async fn status(&self, server_id: &str) -> Result<StatusResponse>;

    async fn command(&self, server_id: &str, action: ServerAction) -> Result<CommandResponse>;
}

/// reqwest-backed API client
#[derive(Debug, Clone)]
pub struct HttpServerApi {
    client: Client,
    base_url: String,
}

impl HttpServerApi {
    /// Requests carry no timeout; a slow backend leaves the view stale until it answers.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, server_id: &str, tail: &str) -> String {
        format!(
            "{}/api/server/{}/{}",
            self.base_url,
            urlencoding::encode(server_id),
            tail
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ServerApi for HttpServerApi {
    async fn console(&self, server_id: &str) -> Result<Vec<String>> {
        let body: ConsoleResponse = self.get_json(&self.endpoint(server_id, "console")).await?;
        Ok(body.logs)
    }

    async fn players(&self, server_id: &str) -> Result<Vec<PlayerEntry>> {
        let body: PlayersResponse = self.get_json(&self.endpoint(server_id, "players")).await?;
        Ok(body.players)
    }

    async fn status(&self, server_id: &str) -> Result<StatusResponse> {
        self.get_json(&self.endpoint(server_id, "status")).await
    }

    async fn command(&self, server_id: &str, action: ServerAction) -> Result<CommandResponse> {
        let url = self.endpoint(server_id, action.endpoint());
        log::debug!("POST {}", url);

        // Failed starts come back as HTTP 500 with a regular command body,
        // so the status code is only reported, never turned into an error.
        let response = self.client.post(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        serde_json::from_str::<CommandResponse>(&body).map_err(|e| {
            RaceDeckError::Remote(format!(
                "unexpected {} response from {}: {}",
                status, url, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_server_id() {
        let api = HttpServerApi::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(
            api.endpoint("drift-practice-01", "console"),
            "http://localhost:5000/api/server/drift-practice-01/console"
        );
        assert_eq!(
            api.endpoint("a b/c", "status"),
            "http://localhost:5000/api/server/a%20b%2Fc/status"
        );
    }
}
