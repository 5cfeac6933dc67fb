//! hunt-smoke - a smoke tester for the beast hunt game API
//!
//! One run checks that the backend answers on its root endpoint, asks it to
//! create a game, and reports whether a session identifier came back:
//! - `client` issues the HTTP calls and reads bodies in full
//! - `api` holds the wire types and tolerant accessors for game responses
//! - `smoke` sequences the steps and writes the console report
//! - `config` loads the optional TOML file with the run's defaults

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod observability;
pub mod smoke;

// Re-export commonly used types for convenience
pub use error::{SmokeError, SmokeResult};

pub use api::{ApiResponse, CreateGameRequest, GameEnvelope};
pub use client::GameApiClient;
pub use config::{SmokeConfig, ApiConfig, FrontendConfig, GameConfig, ChecksConfig};
pub use smoke::{HealthReport, Outcome, SmokeTester};
