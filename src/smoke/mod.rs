//! The smoke run: health check, game creation, summary
//!
//! Requests go out one at a time and each is awaited before the next. A
//! transport failure ends the run through `?`; everything the backend
//! answers with, whatever the status, is reported and folded into
//! [`Outcome`].

pub mod report;

pub use report::Report;

use std::io::Write;
use std::process::ExitCode;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::Instrument;
use crate::api::{CreateGameRequest, GameEnvelope};
use crate::client::GameApiClient;
use crate::config::SmokeConfig;
use crate::error::SmokeResult;
use crate::observability::RunContext;

/// What the health probe saw
#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub status: StatusCode,
    pub body: Value,
}

/// Final result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The backend handed out a session identifier
    SessionCreated { session_id: String },
    /// No identifier was obtained; the report says why
    Failed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::SessionCreated { .. })
    }

    pub fn session_id(&self) -> Option<&str> {
        match self {
            Outcome::SessionCreated { session_id } => Some(session_id),
            Outcome::Failed => None,
        }
    }

    /// Process exit status: 0 with a session id, 1 without
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl From<&Outcome> for ExitCode {
    fn from(outcome: &Outcome) -> Self {
        ExitCode::from(outcome.exit_status())
    }
}

/// Drives one smoke run against a backend and writes the report to `W`
pub struct SmokeTester<W: Write> {
    client: GameApiClient,
    config: SmokeConfig,
    report: Report<W>,
}

impl<W: Write> SmokeTester<W> {
    /// Build a tester from a validated configuration
    pub fn new(config: SmokeConfig, out: W) -> SmokeResult<Self> {
        config.validate()?;
        let client = GameApiClient::new(&config.api.base_url)?;
        Ok(Self::with_client(client, config, out))
    }

    pub fn with_client(client: GameApiClient, config: SmokeConfig, out: W) -> Self {
        Self {
            client,
            config,
            report: Report::new(out),
        }
    }

    /// Hand back the report sink, e.g. to inspect a captured buffer
    pub fn into_output(self) -> W {
        self.report.into_inner()
    }

    /// Run every step and print the summary
    pub async fn run(&mut self) -> SmokeResult<Outcome> {
        let context = RunContext::new("smoke_test");
        let span = context.span();

        let outcome = self.run_steps().instrument(span.clone()).await;

        span.in_scope(|| match &outcome {
            Ok(outcome) => tracing::info!(
                success = outcome.is_success(),
                elapsed_ms = context.elapsed().as_millis() as u64,
                "Smoke run finished"
            ),
            Err(e) => tracing::error!(error = %e, "Smoke run aborted"),
        });

        outcome
    }

    async fn run_steps(&mut self) -> SmokeResult<Outcome> {
        self.check_health().await?;

        let request = CreateGameRequest::from(&self.config.game);
        let mut session_id = self.create_game(&request).await?;

        if let Some(id) = session_id.clone() {
            if self.config.checks.verify_session && !self.verify_session(&id).await? {
                session_id = None;
            }
            if self.config.checks.cleanup_session {
                self.cleanup_session(&id).await?;
            }
        }

        match session_id {
            Some(session_id) => {
                self.report.success_summary(
                    &session_id,
                    &self.config.frontend.url,
                    self.client.base_url(),
                )?;
                Ok(Outcome::SessionCreated { session_id })
            }
            None => {
                self.report.failure_summary()?;
                Ok(Outcome::Failed)
            }
        }
    }

    /// `GET /`: print the status and the JSON body, whatever its shape
    pub async fn check_health(&mut self) -> SmokeResult<HealthReport> {
        self.report.section("Testing API health...")?;

        let response = self.client.get_root().await?;
        self.report.status(response.status)?;
        let body = response.json()?;
        self.report.json_body(&body)?;
        self.report.blank()?;

        Ok(HealthReport {
            status: response.status,
            body,
        })
    }

    /// `POST /api/games`: returns the session id when a 200 carried one
    pub async fn create_game(&mut self, request: &CreateGameRequest) -> SmokeResult<Option<String>> {
        self.report.section("Testing game creation...")?;

        let response = self.client.create_game(request).await?;
        self.report.status(response.status)?;

        let session_id = if response.is_ok() {
            let envelope = GameEnvelope::new(response.json()?);
            self.report.envelope(&envelope)?;
            envelope.session_id().map(str::to_string)
        } else {
            tracing::warn!(status = response.status.as_u16(), "Game creation rejected");
            self.report.error_body(&response.body)?;
            None
        };

        // A created session runs straight into the summary.
        if session_id.is_none() {
            self.report.blank()?;
            tracing::warn!("No session id obtained from game creation");
        }
        Ok(session_id)
    }

    /// `GET /api/games/{id}`: true when the backend echoes the same session
    pub async fn verify_session(&mut self, session_id: &str) -> SmokeResult<bool> {
        self.report.blank()?;
        self.report.section("Verifying game session...")?;

        let response = self.client.get_game(session_id).await?;
        self.report.status(response.status)?;

        let verified = if response.is_ok() {
            let envelope = GameEnvelope::new(response.json()?);
            match envelope.session_id() {
                Some(echoed) if echoed == session_id => {
                    self.report.line(&format!("Session confirmed: {}", session_id))?;
                    true
                }
                other => {
                    self.report.line(&format!(
                        "Session mismatch: expected {}, got {}",
                        session_id,
                        other.unwrap_or("None")
                    ))?;
                    false
                }
            }
        } else {
            self.report.error_body(&response.body)?;
            false
        };

        if !verified {
            tracing::warn!(session_id, "Session verification failed");
        }
        Ok(verified)
    }

    /// `DELETE /api/games/{id}`: reported only, never changes the outcome
    pub async fn cleanup_session(&mut self, session_id: &str) -> SmokeResult<bool> {
        self.report.blank()?;
        self.report.section("Cleaning up game session...")?;

        let response = self.client.delete_game(session_id).await?;
        self.report.status(response.status)?;

        let deleted = response.is_ok();
        if deleted {
            // Body is informational here; an unparsable one is not worth aborting over.
            let message = response
                .json()
                .ok()
                .map(GameEnvelope::new)
                .and_then(|envelope| envelope.message().map(str::to_string));
            self.report.line(&format!("Message: {}", message.as_deref().unwrap_or("None")))?;
        } else {
            tracing::warn!(session_id, status = response.status.as_u16(), "Session cleanup failed");
            self.report.error_body(&response.body)?;
        }

        Ok(deleted)
    }
}
