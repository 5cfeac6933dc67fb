//! HTTP client for the game backend

pub mod api_client;

pub use api_client::GameApiClient;
