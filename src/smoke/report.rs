//! Console report written while the run progresses

use std::fmt::Display;
use std::io::{self, Write};
use reqwest::StatusCode;
use serde_json::Value;
use crate::api::GameEnvelope;

/// Human-readable report sink
#[derive(Debug)]
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", title)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn status(&mut self, status: StatusCode) -> io::Result<()> {
        writeln!(self.out, "Status: {}", status.as_u16())
    }

    pub fn json_body(&mut self, body: &Value) -> io::Result<()> {
        writeln!(self.out, "Response: {}", body)
    }

    pub fn error_body(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "Error: {}", text)
    }

    /// `success`, `message` and, when `game_data` exists, the session id
    pub fn envelope(&mut self, envelope: &GameEnvelope) -> io::Result<()> {
        writeln!(self.out, "Success: {}", or_none(envelope.success()))?;
        writeln!(self.out, "Message: {}", or_none(envelope.message()))?;
        if envelope.game_data().is_some() {
            writeln!(self.out, "Session ID: {}", or_none(envelope.session_id()))?;
        }
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn success_summary(&mut self, session_id: &str, frontend_url: &str, backend_url: &str) -> io::Result<()> {
        writeln!(self.out, "✅ API is working! Created game session: {}", session_id)?;
        writeln!(self.out, "🎮 Both frontend and backend are running successfully!")?;
        writeln!(self.out, "Frontend: {}", frontend_url)?;
        writeln!(self.out, "Backend: {}", backend_url)?;
        self.out.flush()
    }

    pub fn failure_summary(&mut self) -> io::Result<()> {
        writeln!(self.out, "❌ API test failed")?;
        self.out.flush()
    }
}

fn or_none<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}
