//! Thin request layer over `reqwest`: one call per endpoint, body read in full

use std::time::Instant;
use reqwest::{Client, Method, Url};
use crate::api::{ApiResponse, CreateGameRequest, GAMES_PATH, HEALTH_PATH};
use crate::error::{SmokeError, SmokeResult};

/// Client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct GameApiClient {
    http: Client,
    base_url: String,
}

impl GameApiClient {
    /// Create a client with reqwest's default settings
    pub fn new(base_url: &str) -> SmokeResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| SmokeError::transport("client_init", e))?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /`
    pub async fn get_root(&self) -> SmokeResult<ApiResponse> {
        let url = self.url(HEALTH_PATH);
        self.execute("health_check", Method::GET, url, None).await
    }

    /// `POST /api/games`
    pub async fn create_game(&self, request: &CreateGameRequest) -> SmokeResult<ApiResponse> {
        let url = self.url(GAMES_PATH);
        self.execute("create_game", Method::POST, url, Some(request)).await
    }

    /// `GET /api/games/{session_id}`
    pub async fn get_game(&self, session_id: &str) -> SmokeResult<ApiResponse> {
        let url = self.session_url(session_id)?;
        self.execute("get_game", Method::GET, url, None).await
    }

    /// `DELETE /api/games/{session_id}`
    pub async fn delete_game(&self, session_id: &str) -> SmokeResult<ApiResponse> {
        let url = self.session_url(session_id)?;
        self.execute("delete_game", Method::DELETE, url, None).await
    }

    // Session ids are opaque, so they go in as an encoded path segment.
    fn session_url(&self, session_id: &str) -> SmokeResult<String> {
        let mut url = Url::parse(&self.url(GAMES_PATH)).map_err(|e| {
            SmokeError::configuration("api.base_url", format!("Invalid base URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| SmokeError::configuration("api.base_url", "Base URL cannot carry a path"))?
            .push(session_id);
        Ok(url.into())
    }

    async fn execute(
        &self,
        operation: &str,
        method: Method,
        url: String,
        body: Option<&CreateGameRequest>,
    ) -> SmokeResult<ApiResponse> {
        let started = Instant::now();
        tracing::debug!(operation, %method, url = %url, "Sending request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(operation, url = %url, error = %e, "Request failed");
            SmokeError::transport(operation, e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SmokeError::transport(operation, e))?;

        tracing::info!(
            operation,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Response received"
        );

        Ok(ApiResponse { url, status, body })
    }
}
