//! Wire types for the beast hunt game API

pub mod game;

pub use game::{CreateGameRequest, GameEnvelope};

use reqwest::StatusCode;
use serde_json::Value;
use crate::error::{SmokeError, SmokeResult};

/// Root endpoint, used as the health probe
pub const HEALTH_PATH: &str = "/";
/// Game collection endpoint
pub const GAMES_PATH: &str = "/api/games";

/// A fully read HTTP response: status plus the raw body text
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Parse the body as JSON of any shape
    pub fn json(&self) -> SmokeResult<Value> {
        serde_json::from_str(&self.body).map_err(|source| SmokeError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}
