//! Game creation request and the envelope every game endpoint answers with

use serde::Serialize;
use serde_json::Value;
use crate::config::GameConfig;

/// Body of `POST /api/games`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGameRequest {
    pub beast_name: String,
    pub inquisitor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl CreateGameRequest {
    pub fn new(beast_name: &str, inquisitor_name: &str) -> Self {
        Self {
            beast_name: beast_name.to_string(),
            inquisitor_name: inquisitor_name.to_string(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl From<&GameConfig> for CreateGameRequest {
    fn from(config: &GameConfig) -> Self {
        Self {
            beast_name: config.beast_name.clone(),
            inquisitor_name: config.inquisitor_name.clone(),
            seed: config.seed,
        }
    }
}

/// `{success, message, game_data: {session_id, ..}}` as returned by the
/// game endpoints.
///
/// Every field is optional. A field holding the wrong JSON type reads as
/// absent rather than failing, so callers only ever branch on `Option`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEnvelope(Value);

impl GameEnvelope {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn success(&self) -> Option<bool> {
        self.0.get("success").and_then(Value::as_bool)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// The nested `game_data` object, if present and non-empty
    pub fn game_data(&self) -> Option<&serde_json::Map<String, Value>> {
        self.0
            .get("game_data")
            .and_then(Value::as_object)
            .filter(|data| !data.is_empty())
    }

    /// `game_data.session_id`; an empty string counts as absent
    pub fn session_id(&self) -> Option<&str> {
        self.game_data()
            .and_then(|data| data.get("session_id"))
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }
}
