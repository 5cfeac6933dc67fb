//! Per-run correlation context

use std::time::{Duration, Instant};
use tracing::Span;
use uuid::Uuid;

/// Correlation context tying every log line of one run together
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Unique correlation ID for the run
    pub correlation_id: String,
    /// Operation being performed
    pub operation: String,
    started: Instant,
}

impl RunContext {
    /// Create a new context with a fresh correlation id
    pub fn new(operation: &str) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            operation: operation.to_string(),
            started: Instant::now(),
        }
    }

    /// Span carrying the correlation id; instrument the run with it
    pub fn span(&self) -> Span {
        tracing::info_span!(
            "smoke_run",
            correlation_id = %self.correlation_id,
            operation = %self.operation,
        )
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
